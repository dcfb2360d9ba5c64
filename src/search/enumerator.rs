use super::SubresultCache;
use crate::board::{Castle, Dimensions, MoveTable};
use crate::count::{BlockHistogram, CastleCount};
use tracing::{debug, instrument};

/// Counters collected during one search
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes visited, i.e. distinct partial castles
    pub nodes: u64,
    /// Rows whose completions were taken from a [`SubresultCache`]
    pub cache_hits: u64,
}

/// Outcome of [`Enumerator::run`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Castles by block count parity
    pub count: CastleCount,
    /// Castles by total block count, if requested
    pub histogram: Option<BlockHistogram>,
    #[allow(missing_docs)]
    pub stats: SearchStats,
}

/// Depth first search over every way to complete a [`Castle`].
///
/// Blocks within a row are placed left to right, a row is finished by advancing to the
/// one above. Every partial castle is visited exactly once and counted if it reaches the
/// top row. The castle is mutated in place and handed back in its original state.
///
/// ```
/// use castles::board::{Castle, MoveTable};
/// use castles::search::Enumerator;
///
/// let mut castle = Castle::new(4, 2);
/// let moves = MoveTable::new(4);
/// let report = Enumerator::new(&mut castle, &moves).run();
/// assert_eq!(report.count.to_string(), "{10, 5}");
/// ```
pub struct Enumerator<'a> {
    castle: &'a mut Castle,
    moves: &'a MoveTable,
    cache: Option<&'a SubresultCache>,
    histogram: Option<BlockHistogram>,
    stats: SearchStats,
}

impl<'a> Enumerator<'a> {
    /// Prepares a plain search of every completion of `castle`.
    ///
    /// # Panics
    /// Panics, if `moves` does not cover spaces as wide as the castle.
    pub fn new(castle: &'a mut Castle, moves: &'a MoveTable) -> Self {
        assert!(
            moves.max_width() >= castle.width(),
            "move table for width {} cannot serve a castle of width {}",
            moves.max_width(),
            castle.width()
        );
        Enumerator {
            castle,
            moves,
            cache: None,
            histogram: None,
            stats: SearchStats::default(),
        }
    }

    /// Takes the completions of a row holding a single space from `cache` when present.
    pub fn with_cache(mut self, cache: &'a SubresultCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Records how many blocks each castle uses.
    ///
    /// Cached results carry no block counts, the cache is not consulted while recording.
    pub fn with_histogram(mut self) -> Self {
        self.histogram = Some(BlockHistogram::new());
        self
    }

    /// Counts every completion of the castle.
    #[instrument(level = "debug", skip_all, fields(width = self.castle.width(), height = self.castle.height()))]
    pub fn run(mut self) -> SearchReport {
        let count = self.enumerate(0);
        debug!(
            nodes = self.stats.nodes,
            cache_hits = self.stats.cache_hits,
            %count,
            "search finished"
        );
        SearchReport {
            count,
            histogram: self.histogram,
            stats: self.stats,
        }
    }

    fn enumerate(&mut self, mut space_index: usize) -> CastleCount {
        self.stats.nodes += 1;
        let mut sum = CastleCount::zero();
        if self.castle.is_solution() {
            sum.increment(self.castle.parity());
            if let Some(histogram) = &mut self.histogram {
                histogram.record(self.castle.last_id());
            }
        }

        if self.castle.can_advance() {
            self.castle.advance();
            sum += self.enter_row();
            self.castle.retreat();
        }

        let moves = self.moves;
        while space_index < self.castle.space_count() {
            let space = self.castle.space(space_index);
            for &relative in moves.for_width(space.width()) {
                let placement = relative.shifted(space.start());
                let resume = self.castle.place(placement, space_index);
                sum += self.enumerate(resume.next_index());
                self.castle.remove(placement, resume.space_index());
            }
            space_index += 1;
        }
        sum
    }

    // Right after advancing, a row with one space sits on one block and everything
    // above it is an independent castle as wide as the space.
    fn enter_row(&mut self) -> CastleCount {
        if let (Some(cache), None) = (self.cache, &self.histogram) {
            let row = self.castle.current_row();
            if let [space] = self.castle.spaces(row) {
                let dims = Dimensions::new(space.width(), row + 2);
                if let Some(known) = cache.get(dims) {
                    self.stats.cache_hits += 1;
                    return known.stacked_on(self.castle.parity());
                }
            }
        }
        self.enumerate(0)
    }
}
