// Only completions of a row holding a single space are reused. Once a row holds
// several spaces their sub-castles still grow independently, but only one of them
// has to reach the top row, so a per-space (even, odd) pair does not compose.
// That would need counts by height per space.
// TODO: key on the sorted (width, height) of every space in the row with at-most-height counts

use super::{closed_form, Enumerator, SearchReport, SearchStats};
use crate::board::{Castle, Dimensions, MoveTable};
use crate::count::CastleCount;
use fxhash::FxHashMap;

/// Known results of whole castles, by size.
///
/// The count for `width x height` is also the number of ways to finish a castle whose
/// current row holds a single space of `width` columns, `height - 1` rows below the top.
/// [`Enumerator::with_cache`] makes use of that.
#[derive(Clone, Debug, Default)]
pub struct SubresultCache {
    results: FxHashMap<Dimensions, CastleCount>,
}

impl SubresultCache {
    /// An empty cache
    pub fn new() -> Self {
        SubresultCache::default()
    }

    /// The stored count for a castle of the given size
    pub fn get(&self, dims: Dimensions) -> Option<&CastleCount> {
        self.results.get(&dims)
    }

    /// Returns `true` if a count for the given size is stored
    pub fn contains(&self, dims: Dimensions) -> bool {
        self.results.contains_key(&dims)
    }

    /// Stores the count for a castle of the given size.
    ///
    /// The count must be exact, every later search using the cache relies on it.
    pub fn insert(&mut self, dims: Dimensions, count: CastleCount) {
        self.results.insert(dims, count);
    }

    /// Number of stored sizes
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Counts the castles of the given size, reusing and then extending the cache.
    ///
    /// The search benefits from every `n x p` with `n <= width` and `p < height`
    /// already being stored.
    pub fn solve(&mut self, dims: Dimensions) -> SearchReport {
        if let Some(count) = self.get(dims).cloned().or_else(|| closed_form(dims)) {
            self.insert(dims, count.clone());
            return SearchReport {
                count,
                histogram: None,
                stats: SearchStats::default(),
            };
        }

        let mut castle = Castle::with_dimensions(dims);
        let moves = MoveTable::new(dims.width());
        let report = Enumerator::new(&mut castle, &moves).with_cache(self).run();
        self.insert(dims, report.count.clone());
        report
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solve_stores_results() {
        let mut cache = SubresultCache::new();
        assert!(cache.is_empty());
        let dims = Dimensions::new(4, 2);
        let report = cache.solve(dims);
        assert_eq!(report.count, CastleCount::new(10u32, 5u32));
        assert!(cache.contains(dims));
        assert_eq!(cache.len(), 1);

        // a second call is answered from the cache
        let again = cache.solve(dims);
        assert_eq!(again.count, report.count);
        assert_eq!(again.stats.nodes, 0);
    }

    #[test]
    fn closed_forms_are_stored_without_search() {
        let mut cache = SubresultCache::new();
        let report = cache.solve(Dimensions::new(1, 6));
        assert_eq!(report.stats.nodes, 0);
        assert_eq!(cache.get(Dimensions::new(1, 6)), Some(&CastleCount::new(1u32, 0u32)));
    }
}
