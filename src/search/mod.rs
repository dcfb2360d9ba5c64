//! Exhaustive counting of castles.
//!
//! The [`Enumerator`] walks every castle of a grid through incremental
//! [`Castle::place`](crate::board::Castle::place) / [`Castle::remove`](crate::board::Castle::remove)
//! calls. A [`SubresultCache`] of smaller castles can cut off rows that hold a single free space.
//! Both ways produce identical counts.

mod cache;
mod enumerator;

pub use self::cache::SubresultCache;
pub use self::enumerator::{Enumerator, SearchReport, SearchStats};

use crate::board::{Castle, Dimensions, MoveTable};
use crate::count::CastleCount;
use crate::errors::DimensionError;

/// How [`count`] searches
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum SearchMode {
    /// Visit every castle
    Plain,
    /// Solve all smaller sizes first and reuse their results
    Cached,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Cached
    }
}

/// Result for sizes that need no search.
///
/// A castle one row high is just its base block. A castle one column wide is a
/// single tower of `height` blocks.
pub fn closed_form(dims: Dimensions) -> Option<CastleCount> {
    let (width, height) = (dims.width(), dims.height());
    if height == 1 {
        Some(CastleCount::new(0u32, 1u32))
    } else if width == 1 {
        let even = (height + 1) % 2;
        let odd = height % 2;
        Some(CastleCount::new(even as u32, odd as u32))
    } else {
        None
    }
}

/// Counts the castles on a `width x height` grid by block count parity.
///
/// `count(..)?.even()` is `F(width, height)`.
///
/// ```
/// use castles::search::{count, SearchMode};
///
/// let castles = count(4, 2, SearchMode::Plain).unwrap();
/// assert_eq!(castles.even().to_string(), "10");
/// ```
pub fn count(width: usize, height: usize, mode: SearchMode) -> Result<CastleCount, DimensionError> {
    let dims = Dimensions::new_checked(width, height)?;
    if let Some(count) = closed_form(dims) {
        return Ok(count);
    }
    let count = match mode {
        SearchMode::Plain => {
            let mut castle = Castle::with_dimensions(dims);
            let moves = MoveTable::new(width);
            Enumerator::new(&mut castle, &moves).run().count
        }
        SearchMode::Cached => {
            let mut cache = SubresultCache::new();
            for sub_width in 1..=width {
                for sub_height in 1..height {
                    cache.solve(Dimensions::new(sub_width, sub_height));
                }
            }
            cache.solve(dims).count
        }
    };
    Ok(count)
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    // (even, odd) for widths 1..=6 (outer) and heights 1..=6 (inner)
    const SMALL: [[(u32, u32); 6]; 6] = [
        [(0, 1), (1, 0), (0, 1), (1, 0), (0, 1), (1, 0)],
        [(0, 1), (3, 0), (0, 5), (7, 0), (0, 9), (11, 0)],
        [(0, 1), (6, 1), (3, 16), (31, 6), (10, 51), (76, 15)],
        [(0, 1), (10, 5), (21, 44), (117, 58), (122, 247), (448, 223)],
        [(0, 1), (16, 15), (89, 122), (439, 342), (906, 1195), (2630, 2021)],
        [(0, 1), (28, 35), (307, 358), (1729, 1638), (5478, 6051), (16126, 14905)],
    ];

    #[test]
    fn small_castles_in_every_mode() {
        for mode in SearchMode::iter() {
            for (w, row) in SMALL.iter().enumerate() {
                for (h, &(even, odd)) in row.iter().enumerate() {
                    let result = count(w + 1, h + 1, mode).unwrap();
                    assert_eq!(result, CastleCount::new(even, odd), "{:?} {}x{}", mode, w + 1, h + 1);
                }
            }
        }
    }

    #[test]
    fn closed_forms_match_search() {
        for height in 1..9 {
            let dims = Dimensions::new(1, height);
            let mut castle = Castle::with_dimensions(dims);
            let moves = MoveTable::new(1);
            let searched = Enumerator::new(&mut castle, &moves).run().count;
            assert_eq!(Some(searched), closed_form(dims));
        }
        for width in 1..9 {
            let dims = Dimensions::new(width, 1);
            assert_eq!(closed_form(dims), Some(CastleCount::new(0u32, 1u32)));
        }
        assert_eq!(closed_form(Dimensions::new(2, 2)), None);
    }

    #[test]
    fn rejects_zero_dimensions() {
        for mode in SearchMode::iter() {
            assert_eq!(count(0, 4, mode), Err(DimensionError::ZeroWidth));
            assert_eq!(count(4, 0, mode), Err(DimensionError::ZeroHeight));
        }
    }
}
