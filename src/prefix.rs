//! Register index extraction.
//!
//! The digest is read as a big-endian bit stream: bit 0 is the most significant
//! bit of byte 0. The first `prefix_length` bits select the register.

use crate::error::{EstimateError, Result};

/// Smallest supported prefix length
pub const MIN_PREFIX_LENGTH: u32 = 1;
/// Largest supported prefix length
pub const MAX_PREFIX_LENGTH: u32 = 32;

/// Check that `prefix_length` is within `[MIN_PREFIX_LENGTH, MAX_PREFIX_LENGTH]`
#[inline]
pub fn validate_prefix_length(prefix_length: u32) -> Result<u32> {
    if (MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&prefix_length) {
        Ok(prefix_length)
    } else {
        Err(EstimateError::PrefixLengthOutOfRange(prefix_length))
    }
}

/// Return the first `prefix_length` bits of `digest` packed into the low-order bits of the result.
///
/// When `prefix_length` is not a multiple of 8 only the high-order bits of the partial byte are
/// taken. Fails if `digest` holds fewer than `ceil(prefix_length / 8)` bytes.
#[inline]
pub fn extract_prefix(digest: &[u8], prefix_length: u32) -> Result<u32> {
    let prefix_length = validate_prefix_length(prefix_length)?;

    let full_bytes = (prefix_length / 8) as usize;
    let extra_bits = prefix_length % 8;
    let required = full_bytes + usize::from(extra_bits > 0);
    if digest.len() < required {
        return Err(EstimateError::DigestTooShort {
            len: digest.len(),
            required,
        });
    }

    let mut result = digest[..full_bytes]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

    if extra_bits > 0 {
        let bits = digest[full_bytes] >> (8 - extra_bits);
        result = (result << extra_bits) | u64::from(bits);
    }

    let mask = (1u64 << prefix_length) - 1;
    Ok((result & mask) as u32)
}
