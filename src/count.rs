//! Arbitrary precision solution counters split by block parity
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Whether a number of blocks is even or odd
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of `n`
    #[inline]
    pub fn of(n: usize) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The other parity
    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    /// Returns `true` for [`Parity::Even`]
    #[inline(always)]
    pub fn is_even(self) -> bool {
        self == Parity::Even
    }
}

/// Number of castles using an even and an odd number of blocks.
///
/// Displays as `{even, odd}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastleCount {
    even: BigUint,
    odd: BigUint,
}

impl CastleCount {
    /// No castles of either parity
    pub fn zero() -> Self {
        CastleCount::default()
    }

    /// Constructs a count from its two halves
    pub fn new(even: impl Into<BigUint>, odd: impl Into<BigUint>) -> Self {
        CastleCount {
            even: even.into(),
            odd: odd.into(),
        }
    }

    /// Castles made from an even number of blocks. This is `F(w,h)`.
    pub fn even(&self) -> &BigUint {
        &self.even
    }

    /// Castles made from an odd number of blocks
    pub fn odd(&self) -> &BigUint {
        &self.odd
    }

    /// Count for the given parity
    pub fn get(&self, parity: Parity) -> &BigUint {
        match parity {
            Parity::Even => &self.even,
            Parity::Odd => &self.odd,
        }
    }

    /// All castles regardless of parity
    pub fn total(&self) -> BigUint {
        &self.even + &self.odd
    }

    /// Counts one more castle of the given parity
    #[inline]
    pub fn increment(&mut self, parity: Parity) {
        match parity {
            Parity::Even => self.even += 1u32,
            Parity::Odd => self.odd += 1u32,
        }
    }

    /// Swaps the even and odd halves
    pub fn flip(self) -> Self {
        CastleCount {
            even: self.odd,
            odd: self.even,
        }
    }

    /// Re-bases the count of a sub-castle onto an enclosing castle.
    ///
    /// `self` counts sub-castles including their base block, which the enclosing
    /// castle has already placed. `placed` is the parity of the blocks placed so far,
    /// base included. The halves swap when `placed` is even.
    pub fn stacked_on(&self, placed: Parity) -> Self {
        match placed {
            Parity::Even => self.clone().flip(),
            Parity::Odd => self.clone(),
        }
    }

    /// `F(w,h) mod modulus`, as the puzzle reports its answer
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn even_mod(&self, modulus: u64) -> u64 {
        assert!(modulus != 0);
        let rem = &self.even % modulus;
        // remainder < modulus fits
        rem.iter_u64_digits().next().unwrap_or(0)
    }

    /// Returns `true` if no castle was counted
    pub fn is_zero(&self) -> bool {
        self.even.is_zero() && self.odd.is_zero()
    }
}

impl AddAssign<&CastleCount> for CastleCount {
    fn add_assign(&mut self, other: &CastleCount) {
        self.even += &other.even;
        self.odd += &other.odd;
    }
}

impl AddAssign for CastleCount {
    fn add_assign(&mut self, other: CastleCount) {
        self.even += other.even;
        self.odd += other.odd;
    }
}

impl Add for CastleCount {
    type Output = CastleCount;

    fn add(mut self, other: CastleCount) -> CastleCount {
        self += other;
        self
    }
}

impl fmt::Display for CastleCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.even, self.odd)
    }
}

/// Number of solutions for each total block count.
///
/// `histogram.get(n)` is the number of castles built from exactly `n` blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockHistogram(Vec<u64>);

impl BlockHistogram {
    /// An empty histogram
    pub fn new() -> Self {
        BlockHistogram(Vec::new())
    }

    pub(crate) fn record(&mut self, blocks: usize) {
        if self.0.len() <= blocks {
            self.0.resize(blocks + 1, 0);
        }
        self.0[blocks] += 1;
    }

    /// Castles built from exactly `blocks` blocks
    pub fn get(&self, blocks: usize) -> u64 {
        self.0.get(blocks).copied().unwrap_or(0)
    }

    /// Largest block count with at least one castle
    pub fn max_blocks(&self) -> Option<usize> {
        self.0.iter().rposition(|&n| n != 0)
    }

    /// Iterator over `(blocks, castles)` for every block count with at least one castle
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n != 0)
            .map(|(blocks, &n)| (blocks, n))
    }

    /// Folds the histogram into an even / odd split
    pub fn to_count(&self) -> CastleCount {
        let mut count = CastleCount::zero();
        for (blocks, n) in self.iter() {
            match Parity::of(blocks) {
                Parity::Even => count.even += n,
                Parity::Odd => count.odd += n,
            }
        }
        count
    }
}
