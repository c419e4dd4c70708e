//! HyperLogLog bias correction constant.
//!
//! Flajolet et al., "HyperLogLog: the analysis of a near-optimal cardinality estimation algorithm":
//! http://algo.inria.fr/flajolet/Publications/FlFuGaMe07.pdf

use crate::error::{EstimateError, Result};

/// Return bias correction parameter `α(m)` for `m` registers.
///
/// `m` must be a positive power of two.
#[inline]
pub fn alpha(m: u64) -> Result<f64> {
    if !m.is_power_of_two() {
        return Err(EstimateError::InvalidRegisterCount(m));
    }
    Ok(match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    })
}
