//! Estimator configuration.

#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hash::HashFunction;
use crate::prefix::validate_prefix_length;

/// Default number of prefix bits used for register indices (4096 registers)
pub const DEFAULT_PREFIX_LENGTH: u32 = 12;

/// Parameters an [`Estimator`](crate::Estimator) is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(default))]
pub struct EstimatorConfig {
    /// Number of digest bits used for register indices, in `[1, 32]` range.
    /// The register array holds `2^prefix_length` one-byte registers.
    pub prefix_length: u32,
    /// Hash function producing record digests
    pub hasher: HashFunction,
}

impl EstimatorConfig {
    /// Creates new configuration with given prefix length and the default hasher
    pub fn new(prefix_length: u32) -> Self {
        Self {
            prefix_length,
            ..Self::default()
        }
    }

    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    pub fn with_hasher(mut self, hasher: HashFunction) -> Self {
        self.hasher = hasher;
        self
    }

    /// Return number of registers described by this configuration
    pub fn registers(&self) -> Result<u64> {
        Ok(1u64 << self.validate()?.prefix_length)
    }

    /// Expected standard error of an estimate, `1.04 / sqrt(m)`
    pub fn standard_error(&self) -> Result<f64> {
        Ok(1.04 / (self.registers()? as f64).sqrt())
    }

    /// Check that the configuration describes a valid estimator
    pub fn validate(&self) -> Result<&Self> {
        validate_prefix_length(self.prefix_length)?;
        Ok(self)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            prefix_length: DEFAULT_PREFIX_LENGTH,
            hasher: HashFunction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;
    use crate::hash::WyHash128;
    use test_case::test_case;

    #[test]
    fn test_default() {
        let config = EstimatorConfig::default();
        assert_eq!(config.prefix_length, 12);
        assert_eq!(config.hasher, HashFunction::default());
        assert_eq!(config.registers(), Ok(4096));
    }

    #[test]
    fn test_builder() {
        let config = EstimatorConfig::new(4).with_hasher(HashFunction::WyHash128(WyHash128));
        assert_eq!(config.prefix_length, 4);
        assert_eq!(config.hasher, HashFunction::WyHash128(WyHash128));
        assert_eq!(config.with_prefix_length(10).prefix_length, 10);
    }

    #[test_case(1 => Ok(2))]
    #[test_case(14 => Ok(16384))]
    #[test_case(32 => Ok(1 << 32))]
    #[test_case(0 => Err(EstimateError::PrefixLengthOutOfRange(0)))]
    #[test_case(33 => Err(EstimateError::PrefixLengthOutOfRange(33)))]
    fn test_registers(prefix_length: u32) -> Result<u64> {
        EstimatorConfig::new(prefix_length).registers()
    }

    #[test_case(10 => "0.0325")]
    #[test_case(16 => "0.0041")]
    #[test_case(14 => "0.0081")]
    fn test_standard_error(prefix_length: u32) -> String {
        let err = EstimatorConfig::new(prefix_length).standard_error().unwrap();
        format!("{:.4}", err)
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn test_serde() {
        let config = EstimatorConfig::new(14).with_hasher(HashFunction::WyHash128(WyHash128));
        let serialized = serde_json::to_string(&config).expect("serialization failed");
        let deserialized: EstimatorConfig =
            serde_json::from_str(&serialized).expect("deserialization failed");
        assert_eq!(config, deserialized);
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn test_serde_defaults() {
        let config: EstimatorConfig =
            serde_json::from_str(r#"{"prefix_length":16}"#).expect("deserialization failed");
        assert_eq!(config, EstimatorConfig::new(16));
    }

    #[cfg(feature = "with_serde")]
    #[test_case("{ invalid_json_string }"; "invalid json")]
    #[test_case(r#"{"prefix_length":-1}"#; "negative prefix length")]
    #[test_case(r#"{"hasher":"md5"}"#; "unknown hasher")]
    fn test_failed_deserialization(input: &str) {
        let result: std::result::Result<EstimatorConfig, _> = serde_json::from_str(input);
        assert!(result.is_err());
    }
}
