//! ## Digest hashers
//! The estimator consumes a fixed-width 128-bit digest per record and never hashes on its own.
//! A digest is read as a big-endian bit stream: the register index is taken from its first
//! `prefix_length` bits and the rank from the zero run which follows.
//!
//! Built-in hashers are dispatched statically via [`HashFunction`]; any other type implementing
//! [`DigestHasher`] can be plugged into [`Estimator`](crate::Estimator) as well.

use enum_dispatch::enum_dispatch;
#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

/// Length of a digest in bytes
pub const DIGEST_LEN: usize = 16;

/// 128-bit record digest
pub type Digest = [u8; DIGEST_LEN];

/// Seed of the second `wyhash` pass, chosen to be independent from the first pass' zero seed.
const WYHASH_SECOND_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Built-in digest hashers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "snake_case"))]
#[enum_dispatch]
pub enum HashFunction {
    Murmur3(Murmur3),
    WyHash128(WyHash128),
}

/// Hash function mapping a byte record to a [`Digest`].
///
/// Implementations must be deterministic within a process and should spread output bits
/// uniformly, since accuracy guarantees of the estimate assume i.i.d. uniform digest bits.
#[enum_dispatch(HashFunction)]
pub trait DigestHasher {
    fn digest(&self, record: &[u8]) -> Digest;
}

impl Default for HashFunction {
    fn default() -> Self {
        HashFunction::Murmur3(Murmur3)
    }
}

/// MurmurHash3 x64 128-bit variant with zero seed.
///
/// Digest bytes are the little-endian bytes of `h1` followed by those of `h2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Murmur3;

impl DigestHasher for Murmur3 {
    #[inline]
    fn digest(&self, record: &[u8]) -> Digest {
        let mut reader = record;
        // reading from an in-memory slice never fails
        let hash = murmur3::murmur3_x64_128(&mut reader, 0).expect("in-memory read failed");
        hash.to_le_bytes()
    }
}

/// Two independently seeded `wyhash` passes concatenated into 128 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct WyHash128;

impl DigestHasher for WyHash128 {
    #[inline]
    fn digest(&self, record: &[u8]) -> Digest {
        let hi = wyhash::wyhash(record, 0);
        let lo = wyhash::wyhash(record, WYHASH_SECOND_SEED);
        ((u128::from(hi) << 64) | u128::from(lo)).to_be_bytes()
    }
}
