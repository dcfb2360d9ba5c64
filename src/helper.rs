// A collection of internal helper types
// like arrays that are indexed by grid positions

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Container with one slot for each cell of a `width * height` grid,
/// indexed by `(row, col)`.
pub(crate) struct Grid<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Grid {
            width,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Returns the cells of one row, left to right.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let width = self.width;
        &mut self.cells[row * width..(row + 1) * width]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(col < self.width);
        &self.cells[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(col < self.width);
        &mut self.cells[row * self.width + col]
    }
}
