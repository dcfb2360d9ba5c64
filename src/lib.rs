#![warn(missing_docs)]
//! The castles library
//!
//! ## Overview
//!
//! A castle on a `w x h` grid is a stack of blocks one unit high and of integer length:
//!
//! 1. The bottom row is a single block of length `w`.
//! 2. Every block rests entirely on a block in the row below.
//! 3. Neighbouring blocks in the same row are at least one unit apart.
//! 4. The castle is exactly `h` rows high.
//!
//! This library counts all castles of a given size by exhaustive search, split by whether
//! they are made from an even or an odd number of blocks. The even half is `F(w,h)` of
//! Project Euler problem 502.
//!
//! ## Example
//!
//! ```
//! use castles::search::{count, SearchMode};
//!
//! let castles = count(4, 2, SearchMode::Cached).unwrap();
//! println!("{}", castles); // {10, 5}
//! assert_eq!(castles.even().to_string(), "10");
//! assert_eq!(castles.total().to_string(), "15");
//! ```
//!
//! The search itself works on a [`Castle`](board::Castle) that is built up and torn down
//! block by block, see [`search::Enumerator`].

mod count;
mod errors;
mod helper;

pub mod board;
pub mod driver;
pub mod search;

pub use crate::count::{BlockHistogram, CastleCount, Parity};
pub use crate::errors::{ConfigError, DimensionError};
