//! `hll-estimator` is a Rust crate designed to estimate the number of distinct byte records in a stream or dataset
//! using a fixed, small amount of memory.
//!
//! This library uses the original HyperLogLog algorithm with small range (linear counting) and large range
//! corrections, computed in a single pass over the input.
//!
//! ```
//! let records = ["item1", "item2", "item1"];
//! let estimate = hll_estimator::estimate(Some(records), 4).unwrap();
//! assert!(estimate > 1.0 && estimate < 3.0);
//! ```
pub mod alpha;
pub mod config;
pub mod error;
pub mod estimator;
pub mod hash;
pub mod prefix;
pub mod rank;

pub use config::EstimatorConfig;
pub use error::{ErrorKind, EstimateError, Result};
pub use estimator::{estimate, Correction, Estimate, Estimator};
pub use hash::{Digest, DigestHasher, HashFunction, Murmur3, WyHash128};
