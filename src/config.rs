//! Configuration and builder for the bucket-histogram learner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted bucket-pair size limit.
///
/// A pair sums at most two counters, so 2^50 leaves a wide margin below the
/// 2^53 range where `f64` still represents every integer exactly.
pub const MAX_SIZE_LIMIT: f64 = 1_125_899_906_842_624.0;

/// Smallest accepted bucket-pair size limit.
///
/// Below one the pre-scaling reducer `(limit - 1) / sum` goes negative and a
/// single sample no longer fits into a pair.
pub const MIN_SIZE_LIMIT: f64 = 1.0;

/// # Overview
///
/// Maps any requested size limit into `[MIN_SIZE_LIMIT, MAX_SIZE_LIMIT]`.
///
/// Zero, negative, NaN and oversized values mean "unlimited" and become
/// [`MAX_SIZE_LIMIT`]. Positive values below one are raised to
/// [`MIN_SIZE_LIMIT`].
///
/// # Examples
///
/// ```
/// use beuron::{MAX_SIZE_LIMIT, normalize_size_limit};
///
/// assert_eq!(normalize_size_limit(8.0), 8.0);
/// assert_eq!(normalize_size_limit(0.0), MAX_SIZE_LIMIT);
/// assert_eq!(normalize_size_limit(-3.0), MAX_SIZE_LIMIT);
/// assert_eq!(normalize_size_limit(0.25), 1.0);
/// ```
#[inline]
#[must_use]
pub fn normalize_size_limit(limit: f64) -> f64 {
    if limit.is_nan() || limit <= 0.0 || limit > MAX_SIZE_LIMIT {
        MAX_SIZE_LIMIT
    } else if limit < MIN_SIZE_LIMIT {
        MIN_SIZE_LIMIT
    } else {
        limit
    }
}

/// # Overview
///
/// Configuration parameters for a learner.
///
/// `size_limit` caps the total weight of each bucket pair. Smaller limits
/// forget faster: the learner follows a changing function sooner but is
/// more sensitive to label noise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub size_limit: f64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size_limit: MAX_SIZE_LIMIT
        }
    }
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// True when the limit is the "remember everything" ceiling.
    #[inline]
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        self.size_limit >= MAX_SIZE_LIMIT
    }
}

/// # Overview
///
/// Builder for Config with normalization.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    size_limit: Option<f64>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the bucket-pair size limit (default: unlimited).
    pub fn size_limit(mut self, limit: f64) -> Self {
        self.size_limit = Some(limit);
        self
    }

    /// # Overview
    ///
    /// Builds the Config, normalizing the size limit.
    ///
    /// Out-of-range limits are adjusted rather than rejected, so building
    /// cannot fail.
    pub fn build(self) -> Config {
        let requested = self.size_limit.unwrap_or(MAX_SIZE_LIMIT);
        let size_limit = normalize_size_limit(requested);
        if size_limit != requested {
            log::debug!("size limit {requested} normalized to {size_limit}");
        }
        Config {
            size_limit
        }
    }
}
