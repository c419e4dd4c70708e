//! Errors returned by the estimator and its building blocks.
//!
//! Every precondition is checked before any register is touched, so a failed
//! call never leaves a partially updated register array behind.

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Error returned when an operation's preconditions do not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The record sequence itself is missing (an empty sequence is valid).
    #[error("record sequence is absent")]
    AbsentInput,
    #[error("prefix length {0} is outside of [1, 32] range")]
    PrefixLengthOutOfRange(u32),
    #[error("register count {0} is not a positive power of two")]
    InvalidRegisterCount(u64),
    #[error("digest length ({len} bytes) is too short for prefix length ({required} bytes needed)")]
    DigestTooShort { len: usize, required: usize },
    #[error("digest is empty")]
    EmptyDigest,
    #[error("start offset {offset} exceeds digest length ({bits} bits)")]
    OffsetOutOfRange { offset: usize, bits: usize },
}

/// Broad category of an [`EstimateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AbsentInput,
    RangeViolation,
    SizeViolation,
}

impl EstimateError {
    /// Return the category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            EstimateError::AbsentInput => ErrorKind::AbsentInput,
            EstimateError::PrefixLengthOutOfRange(_) | EstimateError::InvalidRegisterCount(_) => {
                ErrorKind::RangeViolation
            }
            EstimateError::DigestTooShort { .. }
            | EstimateError::EmptyDigest
            | EstimateError::OffsetOutOfRange { .. } => ErrorKind::SizeViolation,
        }
    }
}
