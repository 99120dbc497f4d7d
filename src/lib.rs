//! # Beuron
//!
//! Online learner for binary logical functions of two binary inputs.
//!
//! A [`Beuron`] keeps one pair of weighted counters per input combination
//! and answers with the output seen more often for that input. A size limit
//! on each pair makes old evidence fade, so the learner follows a target
//! function that changes over time.
//!
//! # Features
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialization support
//!
//! # Examples
//!
//! ```
//! use beuron::{Beuron, BooleanFunction};
//!
//! let mut b = Beuron::with_size_limit(4.0);
//!
//! b.learn([1, 1], 0)
//!     .learn([0, 1], 1)
//!     .learn([1, 0], 1)
//!     .learn([0, 0], 0);
//!
//! assert_eq!(b.function(), BooleanFunction::ExclusiveDisjunction);
//!
//! let snapshot = b.save();
//! let restored = Beuron::from_snapshot(&snapshot).unwrap();
//! assert_eq!(restored.solve([0, 1]), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod config;
pub mod error;
mod function;
mod histogram;
mod model;
mod traced;
pub mod utils;

pub use config::{Config, ConfigBuilder, MAX_SIZE_LIMIT, MIN_SIZE_LIMIT, normalize_size_limit};
pub use error::{Error, Result};
pub use function::BooleanFunction;
pub use histogram::{BUCKETS, Beuron, SNAPSHOT_LEN, Snapshot};
pub use model::Learner;
pub use traced::Traced;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
