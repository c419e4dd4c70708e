//! Leading zero run counting used to derive register ranks.

use crate::error::{EstimateError, Result};

/// Count consecutive zero bits of `digest` starting at bit `start`.
///
/// Bits are numbered from the most significant bit of byte 0. Counting stops at the first
/// 1-bit or when the digest is exhausted, so an all-zero tail yields the number of remaining bits.
#[inline]
pub fn count_zeros(digest: &[u8], start: usize) -> Result<u32> {
    if digest.is_empty() {
        return Err(EstimateError::EmptyDigest);
    }
    let bits = digest.len() * 8;
    if start >= bits {
        return Err(EstimateError::OffsetOutOfRange { offset: start, bits });
    }

    let byte_idx = start / 8;
    let bit_pos = (start % 8) as u32;

    // drop bits preceding `start` within its byte
    let head = digest[byte_idx] << bit_pos;
    if head != 0 {
        return Ok(head.leading_zeros());
    }

    let mut zeros = 8 - bit_pos;
    for &b in &digest[byte_idx + 1..] {
        if b != 0 {
            return Ok(zeros + b.leading_zeros());
        }
        zeros += 8;
    }
    Ok(zeros)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[0x80], 0 => 0; "first bit set")]
    #[test_case(&[0x08], 4 => 0; "start bit set")]
    #[test_case(&[0x01], 0 => 7; "last bit of byte")]
    #[test_case(&[0x00, 0x80], 0 => 8; "next byte")]
    #[test_case(&[0xF0, 0x20], 4 => 6; "across byte boundary")]
    #[test_case(&[0xFF, 0x00, 0x00, 0x01], 8 => 23; "skips prefix byte")]
    #[test_case(&[0x00], 0 => 8; "all zero byte")]
    #[test_case(&[0xFE], 7 => 1; "zero last bit")]
    #[test_case(&[0xB4, 0x00, 0x00], 4 => 1; "partial nibble")]
    #[test_case(&[0xB0, 0x00, 0x00], 4 => 20; "zero tail")]
    fn test_count_zeros(digest: &[u8], start: usize) -> u32 {
        count_zeros(digest, start).unwrap()
    }

    #[test]
    fn test_all_zero_digest() {
        let digest = [0u8; 16];
        for start in 0..128 {
            assert_eq!(count_zeros(&digest, start).unwrap(), 128 - start as u32);
        }
    }

    #[test]
    fn test_empty_digest() {
        assert_eq!(count_zeros(&[], 0), Err(EstimateError::EmptyDigest));
    }

    #[test_case(&[0x00], 8)]
    #[test_case(&[0x00; 16], 128)]
    #[test_case(&[0x00; 16], usize::MAX)]
    fn test_offset_out_of_range(digest: &[u8], start: usize) {
        assert_eq!(
            count_zeros(digest, start),
            Err(EstimateError::OffsetOutOfRange {
                offset: start,
                bits: digest.len() * 8
            })
        );
    }
}
