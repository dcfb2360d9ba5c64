use crate::errors::DimensionError;
use std::fmt;

/// Width and height of a castle grid, both at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Constructs new `Dimensions`.
    ///
    /// # Panics
    /// Panics, if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_checked(width, height).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Constructs new `Dimensions`. Fails if `width` or `height` is zero.
    pub fn new_checked(width: usize, height: usize) -> Result<Self, DimensionError> {
        if width == 0 {
            return Err(DimensionError::ZeroWidth);
        }
        if height == 0 {
            return Err(DimensionError::ZeroHeight);
        }
        Ok(Dimensions { width, height })
    }

    /// Number of columns, equal to the length of the base block
    #[inline]
    pub fn width(self) -> usize {
        self.width
    }

    /// Number of rows, equal to the exact height every counted castle reaches
    #[inline]
    pub fn height(self) -> usize {
        self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert_eq!(Dimensions::new_checked(0, 3), Err(DimensionError::ZeroWidth));
        assert_eq!(Dimensions::new_checked(3, 0), Err(DimensionError::ZeroHeight));
        assert_eq!(Dimensions::new(4, 2).to_string(), "4x2");
    }

    #[test]
    #[should_panic]
    fn new_panics_on_zero() {
        Dimensions::new(0, 0);
    }
}
