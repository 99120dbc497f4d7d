//! Error types for the bucket-histogram learner.

use core::fmt;

/// # Overview
///
/// Errors reported by the checked parts of the API.
///
/// The unchecked `learn`/`solve` never fail; these variants surface only
/// from `try_*` methods, snapshot loading and batch fitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidBit { value: u8 },
    SnapshotLength { expected: usize, got: usize },
    EmptyDataset,
    DimensionMismatch { expected: usize, got: usize }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBit {
                value
            } => write!(f, "bit must be 0 or 1, got {value}"),
            Self::SnapshotLength {
                expected,
                got
            } => {
                write!(f, "snapshot must hold {expected} values, got {got}")
            }
            Self::EmptyDataset => write!(f, "dataset cannot be empty"),
            Self::DimensionMismatch {
                expected,
                got
            } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// # Overview
///
/// Result type for learner operations.
pub type Result<T> = core::result::Result<T, Error>;
