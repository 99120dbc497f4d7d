//! Bucket-histogram learner for two-input binary functions.
//!
//! Four bucket pairs, one per input combination. In a pair the first bucket
//! weighs the zero outputs seen for that input and the second the ones.
//!
//! ```text
//!   0,0    0,1    1,0   1,1     input (bucket pair)
//!     _    _            _ _
//!   _| |  | |          | | |
//!  | | |  | |_    _    | | |    weight of each output
//!  | | |  | | |  | |   | | |
//!  |_|_|  |_|_|  |_|_  |_|_|
//!   0 1    0 1    0 1   0 1     output (bucket)
//! ```
//!
//! Each pair holds at most `size_limit` weight. When a new sample would not
//! fit, both buckets of the pair are shrunk proportionally first, so old
//! evidence fades geometrically while the newest sample always weighs 1.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    BooleanFunction, Config,
    config::normalize_size_limit,
    error::{Error, Result}
};

/// Number of buckets: two outputs for each of four inputs.
pub const BUCKETS: usize = 8;

/// Length of a [`Snapshot`]: the buckets followed by the size limit.
pub const SNAPSHOT_LEN: usize = BUCKETS + 1;

/// Flat learner state as returned by [`Beuron::save`].
///
/// Buckets in index order (`2 * (2a + b) + output`), then the size limit.
/// Carries no version tag.
pub type Snapshot = [f64; SNAPSHOT_LEN];

/// Index of the zeros bucket of the pair for `input`.
#[inline(always)]
const fn pair_index(input: [u8; 2]) -> usize {
    let mut index = 0;
    if input[0] == 1 {
        index += 4;
    }
    if input[1] == 1 {
        index += 2;
    }
    index
}

#[inline]
const fn check_bit(value: u8) -> Result<u8> {
    match value {
        0 | 1 => Ok(value),
        _ => Err(Error::InvalidBit {
            value
        })
    }
}

#[inline]
fn check_input(input: [u8; 2]) -> Result<[u8; 2]> {
    check_bit(input[0])?;
    check_bit(input[1])?;
    Ok(input)
}

/// # Overview
///
/// Online learner of a two-input, one-output binary function.
///
/// `solve` answers with the heavier bucket of the input's pair; ties,
/// including the untouched empty pair, answer 0.
///
/// Bits are read as 1 only when they equal 1, any other value counts as 0.
/// Use [`try_learn`](Self::try_learn) and [`try_solve`](Self::try_solve) to
/// reject such values instead.
///
/// # Examples
///
/// ```
/// use beuron::Beuron;
///
/// let mut b = Beuron::new();
/// b.learn([1, 1], 0)
///     .learn([0, 1], 1)
///     .learn([1, 0], 1)
///     .learn([0, 0], 0);
///
/// assert_eq!(b.solve([1, 1]), 0);
/// assert_eq!(b.solve([0, 1]), 1);
/// assert_eq!(b.solve([1, 0]), 1);
/// assert_eq!(b.solve([0, 0]), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Beuron {
    buckets:    [f64; BUCKETS],
    size_limit: f64
}

impl Default for Beuron {
    fn default() -> Self {
        Self::new()
    }
}

impl Beuron {
    /// # Overview
    ///
    /// Creates an empty learner that never forgets (maximum size limit).
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// # Overview
    ///
    /// Creates an empty learner with the given bucket-pair size limit.
    ///
    /// Zero, negative or oversized limits mean "unlimited"; see
    /// [`normalize_size_limit`].
    #[inline]
    #[must_use]
    pub fn with_size_limit(size_limit: f64) -> Self {
        Self::from_config(Config::builder().size_limit(size_limit).build())
    }

    /// # Overview
    ///
    /// Creates an empty learner from a config.
    #[inline]
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            buckets:    [0.0; BUCKETS],
            size_limit: normalize_size_limit(config.size_limit)
        }
    }

    #[inline]
    #[must_use]
    pub fn size_limit(&self) -> f64 {
        self.size_limit
    }

    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[f64; BUCKETS] {
        &self.buckets
    }

    /// # Overview
    ///
    /// Weights `(zeros, ones)` of the pair for `input`.
    #[inline]
    #[must_use]
    pub fn pair(&self, input: [u8; 2]) -> (f64, f64) {
        let i = pair_index(input);
        (self.buckets[i], self.buckets[i + 1])
    }

    /// # Overview
    ///
    /// Share of the pair's weight held by output 1, or `None` before the
    /// input has been seen.
    #[must_use]
    pub fn ratio_of_ones(&self, input: [u8; 2]) -> Option<f64> {
        let (zeros, ones) = self.pair(input);
        let total = zeros + ones;
        (total > 0.0).then(|| ones / total)
    }

    /// # Overview
    ///
    /// Most likely output for `input`. Ties answer 0.
    #[inline]
    #[must_use]
    pub fn solve(&self, input: [u8; 2]) -> u8 {
        let (zeros, ones) = self.pair(input);
        if zeros < ones { 1 } else { 0 }
    }

    /// # Overview
    ///
    /// [`solve`](Self::solve) that rejects bits other than 0 and 1.
    pub fn try_solve(&self, input: [u8; 2]) -> Result<u8> {
        Ok(self.solve(check_input(input)?))
    }

    /// # Overview
    ///
    /// Function predicted for all four inputs at once.
    #[must_use]
    pub fn function(&self) -> BooleanFunction {
        BooleanFunction::from_outputs([[0, 0], [0, 1], [1, 0], [1, 1]].map(|x| self.solve(x)))
    }

    /// # Overview
    ///
    /// Records one sample and returns `self` for chaining.
    ///
    /// If the pair has no room for one more unit, both of its buckets are
    /// scaled by `(size_limit - 1) / sum` before the increment. Shrinking
    /// before adding keeps the first sample and the `size_limit`-th sample at
    /// equal weight.
    #[inline]
    pub fn learn(&mut self, input: [u8; 2], output: u8) -> &mut Self {
        let i = pair_index(input);
        let room = self.size_limit - 1.0;
        let sum = self.buckets[i] + self.buckets[i + 1];
        if sum > room {
            let reducer = room / sum;
            self.buckets[i] *= reducer;
            self.buckets[i + 1] *= reducer;
            log::trace!("pair {i} scaled by {reducer}");
        }

        let target = if output == 1 { i + 1 } else { i };
        self.buckets[target] += 1.0;
        self
    }

    /// # Overview
    ///
    /// [`learn`](Self::learn) that rejects bits other than 0 and 1. Nothing
    /// is recorded on error.
    pub fn try_learn(&mut self, input: [u8; 2], output: u8) -> Result<&mut Self> {
        let input = check_input(input)?;
        let output = check_bit(output)?;
        Ok(self.learn(input, output))
    }

    /// # Overview
    ///
    /// Changes the size limit and immediately shrinks every pair that now
    /// exceeds it, so the capacity bound holds without waiting for the next
    /// sample.
    pub fn set_size_limit(&mut self, size_limit: f64) {
        let size_limit = normalize_size_limit(size_limit);
        log::debug!("size limit {} -> {}", self.size_limit, size_limit);
        self.size_limit = size_limit;

        for pair in self.buckets.chunks_exact_mut(2) {
            let sum = pair[0] + pair[1];
            if sum > size_limit {
                let reducer = size_limit / sum;
                pair[0] *= reducer;
                pair[1] *= reducer;
            }
        }
    }

    /// # Overview
    ///
    /// Forgets all samples, keeping the size limit.
    pub fn reset(&mut self) {
        self.buckets = [0.0; BUCKETS];
    }

    /// # Overview
    ///
    /// Flat copy of the state: buckets, then the size limit.
    #[must_use]
    pub fn save(&self) -> Snapshot {
        let mut snapshot = [0.0; SNAPSHOT_LEN];
        snapshot[..BUCKETS].copy_from_slice(&self.buckets);
        snapshot[BUCKETS] = self.size_limit;
        snapshot
    }

    /// # Overview
    ///
    /// Restores the state written by [`save`](Self::save).
    ///
    /// Values are taken as they are; only the length is checked. On error the
    /// learner is left unchanged.
    pub fn load(&mut self, snapshot: &[f64]) -> Result<()> {
        if snapshot.len() != SNAPSHOT_LEN {
            return Err(Error::SnapshotLength {
                expected: SNAPSHOT_LEN,
                got:      snapshot.len()
            });
        }
        self.buckets.copy_from_slice(&snapshot[..BUCKETS]);
        self.size_limit = snapshot[BUCKETS];
        Ok(())
    }

    /// # Overview
    ///
    /// Creates a learner from a saved snapshot.
    pub fn from_snapshot(snapshot: &[f64]) -> Result<Self> {
        let mut b = Self::new();
        b.load(snapshot)?;
        Ok(b)
    }
}

impl crate::model::Learner for Beuron {
    fn learn(&mut self, input: [u8; 2], output: u8) -> &mut Self {
        Beuron::learn(self, input, output)
    }

    fn solve(&self, input: [u8; 2]) -> u8 {
        Beuron::solve(self, input)
    }

    fn save(&self) -> Snapshot {
        Beuron::save(self)
    }

    fn load(&mut self, snapshot: &[f64]) -> Result<()> {
        Beuron::load(self, snapshot)
    }

    fn set_size_limit(&mut self, size_limit: f64) {
        Beuron::set_size_limit(self, size_limit);
    }

    fn function(&self) -> BooleanFunction {
        Beuron::function(self)
    }
}
