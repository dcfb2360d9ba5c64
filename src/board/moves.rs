use super::Placement;

/// Precomputed block placements for every space width up to the castle width.
///
/// `table.for_width(n)` holds every `(offset, length)` with `1 <= length <= n` and
/// `offset + length <= n`, ordered by length first, then by offset. Offsets are relative
/// to the start of the space. Gap and support rules are not checked here, spaces
/// already exclude every column a block may not cover.
#[derive(Clone, Debug)]
pub struct MoveTable {
    // placements[n] for a space of width n, placements[0] is empty
    placements: Vec<Box<[Placement]>>,
}

impl MoveTable {
    /// Builds the table for spaces of width `1..=max_width`
    pub fn new(max_width: usize) -> Self {
        let placements = (0..=max_width)
            .map(|width| {
                (1..=width)
                    .flat_map(|length| (0..=width - length).map(move |offset| Placement::new(offset, length)))
                    .collect()
            })
            .collect();
        MoveTable { placements }
    }

    /// Largest space width the table covers
    pub fn max_width(&self) -> usize {
        self.placements.len() - 1
    }

    /// Placements inside a space of width `width`.
    ///
    /// # Panics
    /// Panics, if `width` exceeds [`max_width`](Self::max_width).
    #[inline(always)]
    pub fn for_width(&self, width: usize) -> &[Placement] {
        &self.placements[width]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_are_triangular() {
        let table = MoveTable::new(6);
        assert_eq!(table.max_width(), 6);
        for width in 0..=6 {
            assert_eq!(table.for_width(width).len(), width * (width + 1) / 2);
        }
    }

    #[test]
    fn ordered_by_length_then_offset() {
        let table = MoveTable::new(3);
        let expected = [(0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (0, 3)];
        let actual: Vec<_> = table
            .for_width(3)
            .iter()
            .map(|p| (p.column(), p.length()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn every_placement_fits() {
        let table = MoveTable::new(5);
        for width in 1..=5 {
            for &placement in table.for_width(width) {
                assert!(placement.end() <= width);
            }
        }
    }
}
