//! Capability trait shared by learners and their decorators.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    BooleanFunction, Snapshot,
    error::{Error, Result},
    utils::{rng_from_seed, shuffle}
};

/// Core operations of a two-input binary learner.
///
/// New behavior is added by wrapping a learner in another type that
/// implements this trait and forwards to it, as [`Traced`](crate::Traced)
/// does. The provided methods are built only from the required ones, so
/// every wrapper gets batch prediction, evaluation and fitting for free.
///
/// # Example
///
/// ```
/// use beuron::{Beuron, Learner};
///
/// fn teach<L: Learner>(learner: &mut L) {
///     learner.learn([0, 0], 1).learn([1, 1], 1);
/// }
///
/// let mut b = Beuron::new();
/// teach(&mut b);
/// assert_eq!(b.solve_batch(&[[0, 0], [0, 1]]), vec![1, 0]);
/// ```
pub trait Learner {
    /// Records one `(input, output)` sample.
    fn learn(&mut self, input: [u8; 2], output: u8) -> &mut Self;

    /// Predicts the most likely output for `input`.
    fn solve(&self, input: [u8; 2]) -> u8;

    /// Flat copy of the learner state.
    fn save(&self) -> Snapshot;

    /// Restores state written by [`save`](Self::save).
    fn load(&mut self, snapshot: &[f64]) -> Result<()>;

    /// Changes the bucket-pair size limit.
    fn set_size_limit(&mut self, size_limit: f64);

    /// Truth table currently predicted.
    fn function(&self) -> BooleanFunction {
        BooleanFunction::from_outputs([[0, 0], [0, 1], [1, 0], [1, 1]].map(|x| self.solve(x)))
    }

    /// Batch prediction for multiple samples.
    fn solve_batch(&self, xs: &[[u8; 2]]) -> Vec<u8> {
        xs.iter().map(|&x| self.solve(x)).collect()
    }

    /// Fraction of samples predicted correctly.
    ///
    /// Returns 0.0 for an empty set or when `x` and `y` differ in length.
    fn evaluate(&self, x: &[[u8; 2]], y: &[u8]) -> f64 {
        if x.is_empty() || x.len() != y.len() {
            return 0.0;
        }
        let correct = x
            .iter()
            .zip(y)
            .filter(|(xi, yi)| self.solve(**xi) == **yi)
            .count();
        correct as f64 / x.len() as f64
    }

    /// Records every `(input, output)` sample in order.
    fn learn_all(&mut self, samples: &[([u8; 2], u8)]) -> &mut Self {
        for &(input, output) in samples {
            self.learn(input, output);
        }
        self
    }

    /// Feeds the dataset `epochs` times, each pass in a fresh random order.
    ///
    /// Order matters once pairs are full: the last samples weigh the most.
    /// Empty or mismatched datasets are ignored.
    ///
    /// # Arguments
    ///
    /// * `x` - Inputs
    /// * `y` - Outputs (0 or 1)
    /// * `epochs` - Number of passes over the data
    /// * `seed` - Random seed for the sample order
    fn fit(&mut self, x: &[[u8; 2]], y: &[u8], epochs: usize, seed: u64) {
        if x.is_empty() || x.len() != y.len() {
            return;
        }

        let mut rng = rng_from_seed(seed);
        let mut indices: Vec<usize> = (0..x.len()).collect();
        for _ in 0..epochs {
            shuffle(&mut indices, &mut rng);
            for &i in &indices {
                self.learn(x[i], y[i]);
            }
        }
        log::debug!("fitted {} samples over {epochs} epochs", x.len());
    }

    /// [`fit`](Self::fit) that reports unusable datasets instead of
    /// ignoring them.
    fn try_fit(&mut self, x: &[[u8; 2]], y: &[u8], epochs: usize, seed: u64) -> Result<()> {
        if x.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if x.len() != y.len() {
            return Err(Error::DimensionMismatch {
                expected: x.len(),
                got:      y.len()
            });
        }
        self.fit(x, y, epochs, seed);
        Ok(())
    }
}
