//! Seeded randomness for sample ordering and synthetic data.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Fast RNG suitable for no_std environments.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use beuron::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Performs a Bernoulli trial with given probability.
#[inline]
pub fn bernoulli<R: Rng>(rng: &mut R, probability: f64) -> bool {
    rng.random::<f64>() < probability
}

/// # Overview
///
/// Uniformly random input pair.
#[inline]
pub fn random_input<R: Rng>(rng: &mut R) -> [u8; 2] {
    let bits: u8 = rng.random_range(0..4);
    [bits >> 1, bits & 1]
}

/// # Overview
///
/// Shuffles a slice in-place using Fisher-Yates algorithm.
#[inline]
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}
