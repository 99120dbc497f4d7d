//! Logging decorator for any [`Learner`].

use crate::{Learner, Snapshot, error::Result};

/// # Overview
///
/// Wraps a learner, forwarding every operation and reporting through the
/// `log` facade.
///
/// - `trace!` for every learned sample,
/// - `debug!` whenever a sample flips the prediction for its input,
/// - `debug!` on snapshot loads and limit changes.
///
/// It also counts the samples passed through it since creation or the last
/// [`load`](Learner::load).
///
/// # Examples
///
/// ```
/// use beuron::{Beuron, Learner, Traced};
///
/// let mut learner = Traced::new(Beuron::with_size_limit(4.0));
/// learner.learn([0, 1], 1).learn([1, 0], 1);
///
/// assert_eq!(learner.samples(), 2);
/// assert_eq!(learner.solve([0, 1]), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Traced<L> {
    inner:   L,
    samples: u64
}

impl<L: Learner> Traced<L> {
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            samples: 0
        }
    }

    #[inline]
    pub fn inner(&self) -> &L {
        &self.inner
    }

    #[inline]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: Learner> Learner for Traced<L> {
    fn learn(&mut self, input: [u8; 2], output: u8) -> &mut Self {
        let before = self.inner.solve(input);
        self.inner.learn(input, output);
        self.samples += 1;
        log::trace!("sample {}: {input:?} -> {output}", self.samples);

        let after = self.inner.solve(input);
        if before != after {
            log::debug!(
                "prediction for {input:?} changed {before} -> {after} after {} samples",
                self.samples
            );
        }
        self
    }

    fn solve(&self, input: [u8; 2]) -> u8 {
        self.inner.solve(input)
    }

    fn save(&self) -> Snapshot {
        self.inner.save()
    }

    fn load(&mut self, snapshot: &[f64]) -> Result<()> {
        self.inner.load(snapshot)?;
        self.samples = 0;
        log::debug!("loaded snapshot of {} values", snapshot.len());
        Ok(())
    }

    fn set_size_limit(&mut self, size_limit: f64) {
        log::debug!("setting size limit to {size_limit}");
        self.inner.set_size_limit(size_limit);
    }
}
