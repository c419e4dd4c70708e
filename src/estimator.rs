//! Cardinality estimator allows to estimate number of distinct byte records
//! in a stream or dataset with a fixed amount of memory. It is defined by a
//! single `prefix_length` parameter `p` in [1..32] range, which sets the
//! number of HyperLogLog registers to `m = 2^p`.
//!
//! # Algorithm
//!
//! Every record is hashed into a 128-bit [`Digest`]. The first `p` digest bits
//! select a register, and the register keeps the maximum rank observed for it,
//! where rank is one plus the number of zero bits following the prefix.
//!
//! After all records are consumed, registers are aggregated once:
//! - raw estimate `E = α(m) * m^2 / Σ 2^(-M[i])`
//! - small range: if `E <= 2.5 * m` and some registers are still zero,
//!   linear counting `m * ln(m / zeros)` is used instead
//! - large range: if `E > 2^32 / 30`, `-2^32 * ln(1 - E / 2^32)` is used instead
//!
//! Expected relative error is `1.04 / sqrt(m)`:
//!   p = 10: 1.04 / sqrt(2^10) = 3.25%
//!   p = 12: 1.04 / sqrt(2^12) = 1.62%
//!   p = 14: 1.04 / sqrt(2^14) = 0.81%
//!   p = 18: 1.04 / sqrt(2^18) = 0.20%
//!
//! # Memory
//!
//! Each estimation allocates one register array of `2^p` bytes which lives
//! only for the duration of the call. Nothing is retained between calls.
//!
//! [Original HyperLogLog paper](http://algo.inria.fr/flajolet/Publications/FlFuGaMe07.pdf)

use std::mem::size_of_val;

use tracing::{debug, warn};

use crate::alpha::alpha;
use crate::config::EstimatorConfig;
use crate::error::{EstimateError, Result};
use crate::hash::{DigestHasher, HashFunction};
use crate::prefix::{extract_prefix, validate_prefix_length};
use crate::rank::count_zeros;

/// Raw estimates at or below `SMALL_RANGE_FACTOR * m` are replaced by linear counting.
const SMALL_RANGE_FACTOR: f64 = 2.5;
/// Size of the hash space the large range correction is defined over.
const TWO_POW_32: f64 = 4_294_967_296.0;
/// Raw estimates above this threshold get the large range correction.
const LARGE_RANGE_THRESHOLD: f64 = TWO_POW_32 / 30.0;

/// Estimate number of distinct records using `2^prefix_length` registers and the default hasher.
///
/// `None` stands for an absent record sequence and is rejected, while an empty sequence is valid
/// and yields an estimate of exactly `0.0`.
pub fn estimate<I>(records: Option<I>, prefix_length: u32) -> Result<f64>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let records = records.ok_or(EstimateError::AbsentInput)?;
    Estimator::new(prefix_length)?.estimate(records)
}

/// Short-lived HyperLogLog estimator over byte records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimator<H: DigestHasher = HashFunction> {
    /// Number of digest bits used for register indices
    prefix_length: u32,
    /// Hash function producing record digests
    hasher: H,
}

/// Which branch of the range correction produced the final estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Raw harmonic mean estimate is used as is.
    Raw,
    /// Small range: linear counting over zero registers.
    LinearCounting,
    /// Large range: hash space saturation correction.
    LargeRange,
    /// Raw estimate reached `2^32` where the large range correction is undefined,
    /// raw estimate is used as is.
    Saturated,
}

/// Result of a single estimation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Final cardinality estimate
    pub value: f64,
    /// Raw harmonic mean estimate before range corrections
    pub raw: f64,
    /// Number of registers which were never updated
    pub zeros: u64,
    pub correction: Correction,
}

impl Estimator {
    /// Creates new `Estimator` with `2^prefix_length` registers and the default hasher
    #[inline]
    pub fn new(prefix_length: u32) -> Result<Self> {
        Self::with_hasher(prefix_length, HashFunction::default())
    }

    /// Creates new `Estimator` from configuration
    pub fn from_config(config: &EstimatorConfig) -> Result<Self> {
        Self::with_hasher(config.prefix_length, config.hasher)
    }
}

impl<H: DigestHasher> Estimator<H> {
    /// Creates new `Estimator` with `2^prefix_length` registers and a custom hasher
    pub fn with_hasher(prefix_length: u32, hasher: H) -> Result<Self> {
        let prefix_length = validate_prefix_length(prefix_length)?;
        Ok(Self {
            prefix_length,
            hasher,
        })
    }

    /// Return number of digest bits used for register indices
    #[inline]
    pub fn prefix_length(&self) -> u32 {
        self.prefix_length
    }

    /// Return number of registers
    #[inline]
    pub fn registers(&self) -> u64 {
        1 << self.prefix_length
    }

    /// Return hasher used for record digests
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Return cardinality estimate of `records`
    #[inline]
    pub fn estimate<I>(&self, records: I) -> Result<f64>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        Ok(self.estimate_detailed(records)?.value)
    }

    /// Return cardinality estimate of `records` along with the aggregation details
    pub fn estimate_detailed<I>(&self, records: I) -> Result<Estimate>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let digests = records
            .into_iter()
            .map(|record| self.hasher.digest(record.as_ref()));
        self.estimate_digests(digests)
    }

    /// Return cardinality estimate from already computed digests.
    ///
    /// Each digest must be long enough to hold the prefix plus at least one more bit.
    pub fn estimate_digests<I>(&self, digests: I) -> Result<Estimate>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut registers = Registers::new(self.prefix_length)?;
        for digest in digests {
            registers.insert_digest(digest.as_ref())?;
        }
        registers.estimate()
    }

    /// Return memory size of the register array allocated per estimation
    pub fn size_of(&self) -> usize {
        // one byte per register
        1 << self.prefix_length
    }
}

/// HyperLogLog register array, one maximum rank per register index
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Registers {
    prefix_length: u32,
    data: Vec<u8>,
}

impl Registers {
    /// Create register array of `2^prefix_length` zero registers
    pub(crate) fn new(prefix_length: u32) -> Result<Self> {
        let prefix_length = validate_prefix_length(prefix_length)?;
        let m = usize::try_from(1u64 << prefix_length)
            .map_err(|_| EstimateError::PrefixLengthOutOfRange(prefix_length))?;
        Ok(Self {
            prefix_length,
            data: vec![0u8; m],
        })
    }

    /// Insert digest: select register by prefix and update it with the rank of the following bits
    #[inline]
    pub(crate) fn insert_digest(&mut self, digest: &[u8]) -> Result<()> {
        let idx = extract_prefix(digest, self.prefix_length)?;
        let zeros = count_zeros(digest, self.prefix_length as usize)?;
        // ranks beyond `u8::MAX` only occur for digests wider than 2040 bits
        let rank = u8::try_from(zeros + 1).unwrap_or(u8::MAX);
        self.update_rank(idx as usize, rank);
        Ok(())
    }

    /// Set register `idx` to `rank` if it is greater than the current value
    #[inline]
    pub(crate) fn update_rank(&mut self, idx: usize, rank: u8) {
        let register = &mut self.data[idx];
        if rank > *register {
            *register = rank;
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, idx: usize) -> u8 {
        self.data[idx]
    }

    /// Return number of registers set to 0
    #[inline]
    pub(crate) fn zeros(&self) -> u64 {
        self.data.iter().filter(|&&r| r == 0).count() as u64
    }

    /// Return harmonic sum `Σ 2^(-M[i])` of all registers
    #[inline]
    pub(crate) fn harmonic_sum(&self) -> f64 {
        self.data.iter().map(|&r| 2f64.powi(-i32::from(r))).sum()
    }

    /// Aggregate registers into a cardinality estimate with range corrections applied
    pub(crate) fn estimate(&self) -> Result<Estimate> {
        let m = self.data.len() as f64;
        let raw = alpha(self.data.len() as u64)? * m * m / self.harmonic_sum();
        let zeros = self.zeros();

        let (value, correction) = if raw <= SMALL_RANGE_FACTOR * m {
            if zeros > 0 {
                (m * (m / zeros as f64).ln(), Correction::LinearCounting)
            } else {
                (raw, Correction::Raw)
            }
        } else if raw > LARGE_RANGE_THRESHOLD {
            if raw < TWO_POW_32 {
                (-TWO_POW_32 * (1.0 - raw / TWO_POW_32).ln(), Correction::LargeRange)
            } else {
                warn!(raw, "raw estimate saturated 32-bit hash space, skipping large range correction");
                (raw, Correction::Saturated)
            }
        } else {
            (raw, Correction::Raw)
        };

        debug!(
            prefix_length = self.prefix_length,
            size = size_of_val(self.data.as_slice()),
            raw,
            zeros,
            value,
            ?correction,
            "computed cardinality estimate"
        );

        Ok(Estimate {
            value,
            raw,
            zeros,
            correction,
        })
    }
}
