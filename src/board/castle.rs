// Rows are numbered from the top, row `height - 1` is the base.
//
//   row 0   ·██····   <- top row, a castle is complete once a block sits here
//   row 1   ·███·██
//   row 2   ███████   <- base block, placed on construction
//
// The search builds one row at a time, bottom up. For the row currently being
// built, `spaces[row]` lists the runs of columns a new block may still cover:
// supported by a block in the row below, not covered yet, and not adjacent to a
// block already placed in this row. Placing a block splits its space and opens
// a new space directly above it. Removing it undoes exactly that.
//
// `blocked` is shared by all rows. A column is blocked if it is next to a block
// of the current row, or if it is unsupported in the current row. The second
// part is kept up by `advance`, which blocks the columns of every space the row
// below abandons. Since unsupported columns never become supported higher up,
// flags from lower rows stay valid. `remove` reads the flags to decide whether
// the freed run joins its neighbouring spaces.

use super::{Dimensions, Placement, Space};
use crate::count::Parity;
use crate::errors::DimensionError;
use crate::helper::Grid;

/// Where scanning the current row continues after a [`Castle::place`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resume {
    space_index: usize,
    skip: bool,
}

impl Resume {
    /// Index of the first space the placement produced, pass it to [`Castle::remove`].
    #[inline(always)]
    pub fn space_index(self) -> usize {
        self.space_index
    }

    /// Returns `true` if a leftover run was split off to the left of the placement.
    ///
    /// Blocks in a row are placed left to right, that leftover must not be revisited.
    #[inline(always)]
    pub fn skip(self) -> bool {
        self.skip
    }

    /// First space index to try for the next block in the same row
    #[inline(always)]
    pub fn next_index(self) -> usize {
        self.space_index + self.skip as usize
    }
}

/// The mutable castle under construction.
///
/// A `Castle` starts with only its base block and is built up and torn down by
/// [`place`](Castle::place) / [`remove`](Castle::remove) and
/// [`advance`](Castle::advance) / [`retreat`](Castle::retreat). Each pair are exact
/// inverses when undone in reverse order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Castle {
    dims: Dimensions,
    current: usize,
    last_id: usize,
    parity: Parity,
    placed_in_row: Vec<usize>,
    spaces: Vec<Vec<Space>>,
    blocked: Vec<bool>,
    blocks: Grid<bool>,
}

impl Castle {
    /// Creates a castle of the given size holding only its base block.
    ///
    /// # Panics
    /// Panics, if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_dimensions(Dimensions::new(width, height))
    }

    /// Creates a castle of the given size holding only its base block.
    /// Fails if `width` or `height` is zero.
    pub fn new_checked(width: usize, height: usize) -> Result<Self, DimensionError> {
        Dimensions::new_checked(width, height).map(Self::with_dimensions)
    }

    /// Creates a castle of the given size holding only its base block.
    pub fn with_dimensions(dims: Dimensions) -> Self {
        let (width, height) = (dims.width(), dims.height());
        let base = height - 1;
        let mut castle = Castle {
            dims,
            current: base,
            last_id: 0,
            parity: Parity::Even,
            placed_in_row: vec![0; height],
            spaces: vec![Vec::new(); height],
            blocked: vec![false; width],
            blocks: Grid::new(width, height, false),
        };
        castle.spaces[base].push(Space::new(0, width));
        castle.place(Placement::new(0, width), 0);
        if base > 0 {
            castle.current -= 1;
        }
        castle
    }

    /// Size of the grid
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width()
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height()
    }

    /// The row blocks are currently placed in
    #[inline]
    pub fn current_row(&self) -> usize {
        self.current
    }

    /// Number of blocks in the castle, base included
    #[inline]
    pub fn last_id(&self) -> usize {
        self.last_id
    }

    /// Parity of [`last_id`](Self::last_id)
    #[inline]
    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Number of blocks placed in `row`
    #[inline]
    pub fn placed_in_row(&self, row: usize) -> usize {
        self.placed_in_row[row]
    }

    /// Free spaces of `row`, left to right
    #[inline]
    pub fn spaces(&self, row: usize) -> &[Space] {
        &self.spaces[row]
    }

    /// Number of free spaces in the current row
    #[inline]
    pub fn space_count(&self) -> usize {
        self.spaces[self.current].len()
    }

    /// The `index`th free space of the current row
    #[inline]
    pub fn space(&self, index: usize) -> Space {
        self.spaces[self.current][index]
    }

    /// Returns `true` if a block covers the cell
    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.blocks[(row, col)]
    }

    /// Returns `true` if no new block in the current row may cover `col`
    #[inline]
    pub fn is_blocked(&self, col: usize) -> bool {
        self.blocked[col]
    }

    /// Returns `true` if the current row has room for another block
    #[inline]
    pub fn can_add_block(&self) -> bool {
        !self.spaces[self.current].is_empty()
    }

    /// Returns `true` if building may move on to the row above
    #[inline]
    pub fn can_advance(&self) -> bool {
        self.current > 0 && self.placed_in_row[self.current] > 0
    }

    /// Returns `true` if the castle reaches the top row, i.e. has exactly the full height
    #[inline]
    pub fn is_solution(&self) -> bool {
        self.placed_in_row[0] > 0
    }

    /// Places a block inside the `space_index`th space of the current row.
    ///
    /// The space is replaced by the runs left over to the left and right of the
    /// block, minus the column right next to it on either side. The row above gains
    /// a space on top of the new block.
    ///
    /// # Panics
    /// Panics, if `placement` does not fit inside the space.
    pub fn place(&mut self, placement: Placement, space_index: usize) -> Resume {
        let row = self.current;
        let space = self.spaces[row][space_index];
        assert!(
            space.contains(placement),
            "{:?} does not fit into {:?}",
            placement,
            space
        );

        self.last_id += 1;
        self.parity = self.parity.flip();
        for cell in &mut self.blocks.row_mut(row)[placement.columns()] {
            *cell = true;
        }
        self.placed_in_row[row] += 1;

        // neighbours in the same row need a gap
        if let Some(left) = placement.column().checked_sub(1) {
            self.blocked[left] = true;
        }
        if placement.end() < self.width() {
            self.blocked[placement.end()] = true;
        }

        if row > 0 {
            self.spaces[row - 1].push(Space::from(placement));
        }

        let spaces = &mut self.spaces[row];
        spaces.remove(space_index);
        let mut insert_at = space_index;
        let mut skip = false;
        if placement.column() > space.start() + 1 {
            let left = Space::new(space.start(), placement.column() - 1 - space.start());
            spaces.insert(insert_at, left);
            insert_at += 1;
            skip = true;
        }
        if placement.end() + 1 < space.end() {
            let right = Space::new(placement.end() + 1, space.end() - placement.end() - 1);
            spaces.insert(insert_at, right);
        }

        Resume { space_index, skip }
    }

    /// Removes a block placed by the matching [`place`](Self::place) call.
    ///
    /// `space_index` is [`Resume::space_index`] of that call. Every change made by
    /// later calls must already be undone.
    ///
    /// # Panics
    /// Panics, if the space opened above the block is not the last one of the row above.
    pub fn remove(&mut self, placement: Placement, space_index: usize) {
        let row = self.current;
        debug_assert!(row + 1 < self.height(), "the base block is never removed");

        let left_gap = placement.column().checked_sub(1);
        let left = self.gap(left_gap, left_gap.and_then(|col| col.checked_sub(1)));
        let right_gap = Some(placement.end()).filter(|&col| col < self.width());
        let right = self.gap(right_gap, right_gap.map(|col| col + 1));

        self.last_id -= 1;
        self.parity = self.parity.flip();
        for cell in &mut self.blocks.row_mut(row)[placement.columns()] {
            *cell = false;
        }
        self.placed_in_row[row] -= 1;

        if row > 0 {
            let above = self.spaces[row - 1].pop();
            assert_eq!(above, Some(Space::from(placement)), "blocks must be removed in reverse order");
        }

        if let (Some(col), Gap::Free { .. }) = (left_gap, left) {
            self.blocked[col] = false;
        }
        if let (Some(col), Gap::Free { .. }) = (right_gap, right) {
            self.blocked[col] = false;
        }

        let mut start = match left {
            Gap::Free { .. } => placement.column() - 1,
            Gap::Edge => placement.column(),
        };
        let mut end = match right {
            Gap::Free { .. } => placement.end() + 1,
            Gap::Edge => placement.end(),
        };

        let spaces = &mut self.spaces[row];
        if let Gap::Free { merges: true } = left {
            start = spaces.remove(space_index).start();
        }
        if let Gap::Free { merges: true } = right {
            end = spaces.remove(space_index).end();
        }
        spaces.insert(space_index, Space::new(start, end - start));
    }

    // Classifies the column `gap` next to a block of the current row that is about to
    // be removed. `beyond` is the column on the far side of `gap`.
    fn gap(&self, gap: Option<usize>, beyond: Option<usize>) -> Gap {
        let gap = match gap {
            Some(gap) => gap,
            None => return Gap::Edge,
        };
        let below = self.current + 1;
        let beyond = beyond.filter(|&col| col < self.width());

        let overhang = !self.blocks[(below, gap)];
        let block_beyond = beyond.map_or(false, |col| self.blocks[(self.current, col)]);
        if overhang || block_beyond {
            return Gap::Edge;
        }

        let merges = beyond.map_or(false, |col| {
            self.blocks[(below, col)] && !self.blocks[(self.current, col)] && !self.blocked[col]
        });
        Gap::Free { merges }
    }

    /// Stops placing blocks in the current row and moves up one row.
    ///
    /// The spaces left unused in the row become unsupported above it and are blocked.
    ///
    /// # Panics
    /// Panics, if [`can_advance`](Self::can_advance) is `false`.
    pub fn advance(&mut self) {
        assert!(self.can_advance(), "cannot advance from row {}", self.current);
        let (spaces, blocked) = (&self.spaces[self.current], &mut self.blocked);
        for space in spaces {
            for col in space.columns() {
                blocked[col] = true;
            }
        }
        self.current -= 1;
    }

    /// Reverses the matching [`advance`](Self::advance).
    ///
    /// # Panics
    /// Panics, if the row below the current one is the base row.
    pub fn retreat(&mut self) {
        assert!(
            self.current + 2 < self.height(),
            "cannot retreat from row {}",
            self.current
        );
        self.placed_in_row[self.current] = 0;
        self.current += 1;
        let (spaces, blocked) = (&self.spaces[self.current], &mut self.blocked);
        for space in spaces {
            for col in space.columns() {
                blocked[col] = false;
            }
        }
    }
}

// The column beside a block that is being removed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Gap {
    // outside the grid, unsupported or next to another block: stays unavailable
    Edge,
    // becomes part of the freed run, which joins the space beyond it if there is one
    Free { merges: bool },
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::MoveTable;

    fn spaces(castle: &Castle, row: usize) -> Vec<(usize, usize)> {
        castle.spaces(row).iter().map(|s| (s.start(), s.width())).collect()
    }

    #[test]
    fn new_castle_has_base_block() {
        let castle = Castle::new(4, 3);
        assert_eq!(castle.current_row(), 1);
        assert_eq!(castle.last_id(), 1);
        assert_eq!(castle.parity(), Parity::Odd);
        assert_eq!(castle.placed_in_row(2), 1);
        assert!((0..4).all(|col| castle.is_occupied(2, col)));
        assert_eq!(spaces(&castle, 1), [(0, 4)]);
        assert!(spaces(&castle, 2).is_empty());
        assert!((0..4).all(|col| !castle.is_blocked(col)));
        assert!(!castle.can_advance());
        assert!(castle.can_add_block());
        assert!(!castle.is_solution());
    }

    #[test]
    fn single_row_castle_is_solved() {
        let castle = Castle::new(3, 1);
        assert_eq!(castle.current_row(), 0);
        assert!(castle.is_solution());
        assert!(!castle.can_add_block());
        assert!(!castle.can_advance());
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(Castle::new_checked(0, 2), Err(DimensionError::ZeroWidth));
        assert_eq!(Castle::new_checked(2, 0), Err(DimensionError::ZeroHeight));
    }

    #[test]
    fn place_splits_space() {
        let mut castle = Castle::new(7, 3);
        let resume = castle.place(Placement::new(3, 1), 0);
        assert_eq!(resume.space_index(), 0);
        assert!(resume.skip());
        assert_eq!(resume.next_index(), 1);
        assert_eq!(spaces(&castle, 1), [(0, 2), (5, 2)]);
        assert_eq!(spaces(&castle, 0), [(3, 1)]);
        assert!(castle.is_blocked(2) && castle.is_blocked(4));
        assert_eq!(castle.parity(), Parity::Even);
        assert!(castle.can_advance());
    }

    #[test]
    fn place_at_edges_leaves_no_slivers() {
        let mut castle = Castle::new(4, 2);
        // [1,3) leaves single columns on both sides, both are gaps
        let resume = castle.place(Placement::new(1, 2), 0);
        assert!(!resume.skip());
        assert!(spaces(&castle, 0).is_empty());
        assert!(castle.is_solution());
    }

    #[test]
    fn remove_restores_state() {
        let mut castle = Castle::new(7, 3);
        let fresh = castle.clone();
        for &placement in MoveTable::new(7).for_width(7) {
            let resume = castle.place(placement, 0);
            castle.remove(placement, resume.space_index());
            assert_eq!(castle, fresh, "{:?}", placement);
        }
    }

    #[test]
    fn remove_second_block_rejoins_space() {
        let mut castle = Castle::new(9, 2);
        let first = Placement::new(1, 2);
        let r1 = castle.place(first, 0);
        assert_eq!(spaces(&castle, 0), [(4, 5)]);
        let before = castle.clone();

        let second = Placement::new(6, 1);
        let r2 = castle.place(second, r1.next_index());
        assert_eq!(spaces(&castle, 0), [(4, 1), (8, 1)]);
        castle.remove(second, r2.space_index());
        assert_eq!(castle, before);

        castle.remove(first, r1.space_index());
        assert_eq!(spaces(&castle, 0), [(0, 9)]);
        assert!((0..9).all(|col| !castle.is_blocked(col)));
    }

    #[test]
    fn advance_blocks_abandoned_spaces() {
        let mut castle = Castle::new(6, 3);
        let placement = Placement::new(2, 2);
        let resume = castle.place(placement, 0);
        assert_eq!(spaces(&castle, 1), [(0, 1), (5, 1)]);
        let before = castle.clone();

        castle.advance();
        assert_eq!(castle.current_row(), 0);
        assert!(castle.is_blocked(0) && castle.is_blocked(5));
        assert_eq!(spaces(&castle, 0), [(2, 2)]);

        let top = Placement::new(2, 1);
        let r = castle.place(top, 0);
        assert!(castle.is_solution());
        castle.remove(top, r.space_index());
        castle.retreat();
        assert_eq!(castle, before);

        castle.remove(placement, resume.space_index());
        assert_eq!(castle, Castle::new(6, 3));
    }

    #[test]
    #[should_panic]
    fn place_outside_space_panics() {
        let mut castle = Castle::new(4, 2);
        castle.place(Placement::new(3, 2), 0);
    }

    #[test]
    #[should_panic]
    fn advance_without_block_panics() {
        Castle::new(4, 3).advance();
    }
}
