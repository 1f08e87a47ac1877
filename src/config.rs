//! Run configuration
//!
//! Values come from defaults, optionally overlaid by a YAML file, and are
//! finally overridden by command-line flags in the CLI.

use crate::error::{LinkRankError, LinkRankResult};
use linkrank_algorithms::{PageRankConfig, SamplingConfig, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters shared by both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Random-walk length for the sampling estimator
    pub samples: usize,
    /// Convergence threshold for the iterative estimator
    pub tolerance: f64,
    /// Seed for the sampling estimator; unseeded runs draw from entropy
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            samples: 10_000,
            tolerance: DEFAULT_TOLERANCE,
            seed: None,
        }
    }
}

impl RankConfig {
    /// Load a configuration file. Missing keys keep their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> LinkRankResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| LinkRankError::io(path, e))?;
        serde_yaml::from_str(&text).map_err(|source| LinkRankError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> LinkRankResult<()> {
        self.pagerank_config().validate()?;
        self.sampling_config().validate()?;
        Ok(())
    }

    pub fn pagerank_config(&self) -> PageRankConfig {
        PageRankConfig {
            damping_factor: self.damping_factor,
            tolerance: self.tolerance,
        }
    }

    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            damping_factor: self.damping_factor,
            samples: self.samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RankConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sampling_config().samples, 10_000);
        assert_eq!(config.pagerank_config().tolerance, 0.001);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: RankConfig = serde_yaml::from_str("damping_factor: 0.5\nseed: 7\n").unwrap();
        assert_eq!(config.damping_factor, 0.5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.samples, 10_000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = RankConfig { damping_factor: 1.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = RankConfig { samples: 0, ..Default::default() };
        assert!(config.validate().is_err());

        assert!(serde_yaml::from_str::<RankConfig>("dampening: 0.5\n").is_err());
    }
}
