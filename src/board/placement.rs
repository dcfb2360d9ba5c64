use std::ops::Range;

/// A block of `length` cells starting at `column`.
///
/// Entries of a [`MoveTable`](super::MoveTable) are relative to the start of a space,
/// [`Placement::shifted`] turns them into absolute grid columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    column: usize,
    length: usize,
}

impl Placement {
    /// Constructs a new `Placement`.
    ///
    /// # Panics
    /// Panics, if `length` is zero.
    #[inline]
    pub fn new(column: usize, length: usize) -> Self {
        assert!(length > 0, "blocks have a length of at least 1");
        Placement { column, length }
    }

    /// Leftmost covered column
    #[inline(always)]
    pub fn column(self) -> usize {
        self.column
    }

    /// Number of covered columns
    #[inline(always)]
    pub fn length(self) -> usize {
        self.length
    }

    /// One past the rightmost covered column
    #[inline(always)]
    pub fn end(self) -> usize {
        self.column + self.length
    }

    /// Covered columns
    #[inline]
    pub fn columns(self) -> Range<usize> {
        self.column..self.end()
    }

    /// The same block moved `offset` columns to the right
    #[inline(always)]
    pub fn shifted(self, offset: usize) -> Self {
        Placement {
            column: self.column + offset,
            length: self.length,
        }
    }
}

/// A run of columns in one row that a new block may cover.
///
/// Every column of a space is supported from below, empty, and not next to
/// a block already placed in the same row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space {
    start: usize,
    width: usize,
}

impl Space {
    /// Constructs a new `Space`.
    ///
    /// # Panics
    /// Panics, if `width` is zero.
    #[inline]
    pub fn new(start: usize, width: usize) -> Self {
        assert!(width > 0, "spaces have a width of at least 1");
        Space { start, width }
    }

    /// Leftmost column
    #[inline(always)]
    pub fn start(self) -> usize {
        self.start
    }

    /// Number of columns
    #[inline(always)]
    pub fn width(self) -> usize {
        self.width
    }

    /// One past the rightmost column
    #[inline(always)]
    pub fn end(self) -> usize {
        self.start + self.width
    }

    /// Columns of the space
    #[inline]
    pub fn columns(self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns `true` if `placement` lies entirely inside the space
    #[inline]
    pub fn contains(self, placement: Placement) -> bool {
        self.start <= placement.column() && placement.end() <= self.end()
    }
}

impl From<Placement> for Space {
    fn from(placement: Placement) -> Space {
        Space::new(placement.column(), placement.length())
    }
}
