//! Run configuration with YAML schema and validation.
//!
//! Mistake-proofing through type-safe structs, compile-time validation via
//! serde, and runtime semantic validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{PiError, PiResult};

/// Configuration for one convergence sweep.
///
/// Loaded from YAML files with schema validation, or assembled via
/// [`RunConfig::builder`]. All fields have sensible defaults, so an empty
/// YAML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Smallest sample size of the sweep.
    #[validate(range(min = 1))]
    #[serde(default = "default_min_samples")]
    pub min_samples: u64,

    /// Largest sample size of the sweep.
    #[validate(range(min = 1))]
    #[serde(default = "default_max_samples")]
    pub max_samples: u64,

    /// Number of sample sizes to test between the bounds.
    #[validate(range(min = 1))]
    #[serde(default = "default_points")]
    pub points: usize,

    /// Master seed for the random source.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Destination of the rendered convergence chart.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_min_samples() -> u64 {
    10
}

fn default_max_samples() -> u64 {
    100_000
}

fn default_points() -> usize {
    40
}

fn default_seed() -> u64 {
    42
}

fn default_output_path() -> PathBuf {
    PathBuf::from("estimation_of_pi.png")
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            min_samples: default_min_samples(),
            max_samples: default_max_samples(),
            points: default_points(),
            seed: default_seed(),
            output_path: default_output_path(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> PiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> PiResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Validate schema constraints and semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if any range constraint fails or the sweep bounds
    /// are inverted.
    pub fn validate_all(&self) -> PiResult<()> {
        self.validate()?;

        if self.min_samples > self.max_samples {
            return Err(PiError::InvalidRange {
                min: self.min_samples,
                max: self.max_samples,
            });
        }

        Ok(())
    }
}

/// Builder for [`RunConfig`].
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Set the smallest sample size.
    #[must_use]
    pub fn min_samples(mut self, min_samples: u64) -> Self {
        self.config.min_samples = min_samples;
        self
    }

    /// Set the largest sample size.
    #[must_use]
    pub fn max_samples(mut self, max_samples: u64) -> Self {
        self.config.max_samples = max_samples;
        self
    }

    /// Set the number of sample sizes to test.
    #[must_use]
    pub fn points(mut self, points: usize) -> Self {
        self.config.points = points;
        self
    }

    /// Set the master seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the chart destination.
    #[must_use]
    pub fn output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.config.output_path = output_path.into();
        self
    }

    /// Build the configuration. Constraints are checked by
    /// [`RunConfig::validate_all`] when the sweep runs.
    #[must_use]
    pub fn build(self) -> RunConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.min_samples, 10);
        assert_eq!(config.max_samples, 100_000);
        assert_eq!(config.points, 40);
        assert_eq!(config.seed, 42);
        assert_eq!(config.output_path, PathBuf::from("estimation_of_pi.png"));
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_empty_yaml_yields_defaults() -> PiResult<()> {
        let config = RunConfig::from_yaml("{}")?;
        assert_eq!(config, RunConfig::default());
        Ok(())
    }

    #[test]
    fn test_yaml_overrides() -> PiResult<()> {
        let yaml = r"
min_samples: 100
max_samples: 50000
points: 12
seed: 7
output_path: out/pi.png
";
        let config = RunConfig::from_yaml(yaml)?;
        assert_eq!(config.min_samples, 100);
        assert_eq!(config.max_samples, 50_000);
        assert_eq!(config.points, 12);
        assert_eq!(config.seed, 7);
        assert_eq!(config.output_path, PathBuf::from("out/pi.png"));
        Ok(())
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RunConfig::from_yaml("samples: 10");
        assert!(matches!(result, Err(PiError::YamlParse(_))));
    }

    #[test]
    fn test_zero_bound_rejected() {
        let result = RunConfig::from_yaml("min_samples: 0");
        assert!(matches!(result, Err(PiError::Validation(_))));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = RunConfig::builder().min_samples(1_000).max_samples(10).build();
        assert!(matches!(
            config.validate_all(),
            Err(PiError::InvalidRange { min: 1_000, max: 10 })
        ));
    }

    #[test]
    fn test_builder_round_trip() {
        let config = RunConfig::builder()
            .min_samples(10)
            .max_samples(1_000)
            .points(5)
            .seed(99)
            .output_path("chart.png")
            .build();

        assert_eq!(config.points, 5);
        assert_eq!(config.seed, 99);
        assert!(config.validate_all().is_ok());
    }
}
