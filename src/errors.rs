use std::num::ParseIntError;

#[cfg(doc)]
use crate::{board::Castle, board::Dimensions, driver::DriverConfig};

/// Error for [`Dimensions::new_checked`] and [`Castle::new_checked`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// The grid has no columns
    #[error("castle width must be at least 1")]
    ZeroWidth,
    /// The grid has no rows
    #[error("castle height must be at least 1")]
    ZeroHeight,
}

/// Error for [`DriverConfig::from_args`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required positional argument was not given
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    /// A positional argument is not a non-negative integer
    #[error("argument <{name}> should be a non-negative integer, found `{value}`")]
    InvalidNumber {
        #[allow(missing_docs)]
        name: &'static str,
        #[allow(missing_docs)]
        value: String,
        #[source]
        #[allow(missing_docs)]
        source: ParseIntError,
    },
    /// Neither a positional argument nor a known flag
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
    /// The requested table bounds are empty
    #[error(transparent)]
    Dimensions(#[from] DimensionError),
}
