//! Configuration structures for the classifier.
//!
//! This module defines the tunable parameters of the pipeline: the input
//! geometry expected by the model and the thresholds applied when ranking
//! scores. Configurations are plain serde structs so they can be loaded
//! from JSON files or assembled in code.

use crate::core::constants::{DEFAULT_INPUT_SIZE, DEFAULT_MAX_RESULTS, DEFAULT_SCORE_THRESHOLD};
use crate::core::errors::{ClassifyError, ClassifyResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Parameters controlling how raw scores become ranked recognitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// The minimum confidence a recognition must exceed to be emitted.
    ///
    /// The comparison is strict: a confidence exactly at the threshold is
    /// discarded.
    pub score_threshold: f32,

    /// The maximum number of recognitions returned per image.
    pub max_results: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl RankerConfig {
    /// Returns a copy with out-of-range values clamped to sane bounds.
    ///
    /// Thresholds outside [0.0, 1.0] are clamped and logged rather than
    /// rejected, so a sloppy config file degrades to a usable one.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();
        if !(0.0..=1.0).contains(&config.score_threshold) {
            warn!(
                "score_threshold {} out of range, clamping to [0.0, 1.0]",
                config.score_threshold
            );
            config.score_threshold = config.score_threshold.clamp(0.0, 1.0);
        }
        config
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClassifyResult<()> {
        if self.max_results == 0 {
            return Err(ClassifyError::config_error("max_results must be greater than 0"));
        }
        if !self.score_threshold.is_finite() {
            return Err(ClassifyError::config_error("score_threshold must be finite"));
        }
        Ok(())
    }
}

/// Top-level configuration for an [`ImageClassifier`](crate::ImageClassifier).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// The side length of the square input bitmap the model expects.
    pub input_size: u32,

    /// Ranking parameters.
    pub ranker: RankerConfig,

    /// Overrides the model's input tensor name.
    ///
    /// When `None`, the name is read from the model's own metadata.
    pub input_name: Option<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            input_size: DEFAULT_INPUT_SIZE,
            ranker: RankerConfig::default(),
            input_name: None,
        }
    }
}

impl ClassifierConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ClassifyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&content)
            .map_err(|e| ClassifyError::config_error(format!("failed to parse config: {e}")))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClassifyResult<()> {
        if self.input_size == 0 {
            return Err(ClassifyError::config_error("input_size must be greater than 0"));
        }
        self.ranker.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_model_family() {
        let config = ClassifierConfig::default();
        assert_eq!(config.input_size, 224);
        assert_eq!(config.ranker.max_results, 3);
        assert!((config.ranker.score_threshold - 0.1).abs() < f32::EPSILON);
        assert!(config.input_name.is_none());
    }

    #[test]
    fn sanitized_clamps_threshold() {
        let config = RankerConfig {
            score_threshold: 1.5,
            max_results: 3,
        };
        let sanitized = config.sanitized();
        assert!((sanitized.score_threshold - 1.0).abs() < f32::EPSILON);

        let config = RankerConfig {
            score_threshold: -0.2,
            max_results: 3,
        };
        assert_eq!(config.sanitized().score_threshold, 0.0);
    }

    #[test]
    fn sanitized_keeps_valid_threshold() {
        let config = RankerConfig::default();
        let sanitized = config.sanitized();
        assert!((sanitized.score_threshold - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn validate_rejects_zero_results() {
        let config = RankerConfig {
            score_threshold: 0.1,
            max_results: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_input_size() {
        let config = ClassifierConfig {
            input_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"input_size": 299, "ranker": {{"max_results": 5}}}}"#).unwrap();

        let config = ClassifierConfig::from_file(file.path()).unwrap();
        assert_eq!(config.input_size, 299);
        assert_eq!(config.ranker.max_results, 5);
        assert!((config.ranker.score_threshold - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(ClassifierConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn survives_a_json_round_trip() {
        let config = ClassifierConfig {
            input_size: 299,
            ranker: RankerConfig {
                score_threshold: 0.25,
                max_results: 5,
            },
            input_name: Some("serving_default_input".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: ClassifierConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.input_size, 299);
        assert_eq!(restored.ranker.max_results, 5);
        assert!((restored.ranker.score_threshold - 0.25).abs() < f32::EPSILON);
        assert_eq!(restored.input_name.as_deref(), Some("serving_default_input"));
    }
}
