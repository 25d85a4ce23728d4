//! Configuration for the detector and its normalization pipeline.
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it overrides:
//!
//! ```
//! use judol::config::DetectorConfig;
//!
//! let config: DetectorConfig =
//!     serde_json::from_str(r#"{ "decision_threshold": 0.6 }"#).unwrap();
//! assert_eq!(config.decision_threshold, 0.6);
//! assert_eq!(config.normalizer.max_repeat, 2);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{JudolError, Result};

/// Environment variable overriding [`DetectorConfig::model_path`].
pub const MODEL_PATH_ENV: &str = "JUDOL_MODEL_PATH";

/// Environment variable overriding [`DetectorConfig::decision_threshold`].
pub const THRESHOLD_ENV: &str = "JUDOL_THRESHOLD";

/// Default location of the persisted classifier artifact.
pub const DEFAULT_MODEL_PATH: &str = "model/judol_pipeline.json";

/// Similarity metric used by fuzzy domain correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Matching-block ratio `2*M / (|a| + |b|)`.
    #[default]
    SequenceRatio,
    /// `1 - distance / max(|a|, |b|)`.
    Levenshtein,
}

/// Tunables of the token normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Minimum length of a word rebuilt from single letters.
    pub rejoin_min_len: usize,
    /// Maximum length of a word rebuilt from single letters.
    pub rejoin_max_len: usize,
    /// Letters repeated more often than this are squeezed (digits exempt).
    pub max_repeat: usize,
    /// Minimum similarity for a fuzzy domain correction.
    pub fuzzy_threshold: f64,
    /// Minimum letters-only core length considered for fuzzy correction.
    pub fuzzy_min_core_len: usize,
    /// Capacity of the fuzzy-match memo. Zero disables caching.
    pub fuzzy_cache_capacity: usize,
    /// Similarity metric for fuzzy correction.
    pub similarity: SimilarityMetric,
    /// Drop Indonesian stop words after normalization.
    pub remove_stopwords: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            rejoin_min_len: 3,
            rejoin_max_len: 24,
            max_repeat: 2,
            fuzzy_threshold: 0.80,
            fuzzy_min_core_len: 3,
            fuzzy_cache_capacity: 1024,
            similarity: SimilarityMetric::SequenceRatio,
            remove_stopwords: false,
        }
    }
}

impl NormalizerConfig {
    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.rejoin_min_len == 0 || self.rejoin_min_len > self.rejoin_max_len {
            return Err(JudolError::invalid_config(format!(
                "rejoin length window {}..={} is empty",
                self.rejoin_min_len, self.rejoin_max_len
            )));
        }
        if self.max_repeat == 0 {
            return Err(JudolError::invalid_config("max_repeat must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(JudolError::invalid_config(format!(
                "fuzzy_threshold {} is outside [0, 1]",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }
}

/// Configuration of a [`SpamDetector`](crate::detector::SpamDetector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Path of the classifier artifact, loaded on first use.
    pub model_path: PathBuf,
    /// Positive-class probability at or above which a comment is labelled 1.
    pub decision_threshold: f64,
    /// Token normalizer tunables.
    pub normalizer: NormalizerConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            decision_threshold: 0.50,
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl DetectorConfig {
    /// Read a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: DetectorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `JUDOL_MODEL_PATH` / `JUDOL_THRESHOLD` applied.
    ///
    /// An unparsable threshold is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = DetectorConfig::default();
        config.apply_env();
        config
    }

    /// Apply environment overrides on top of the current values.
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(MODEL_PATH_ENV)
            && !path.trim().is_empty()
        {
            self.model_path = PathBuf::from(path);
        }
        if let Ok(raw) = std::env::var(THRESHOLD_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(value) if (0.0..=1.0).contains(&value) => self.decision_threshold = value,
                _ => log::warn!("ignoring {THRESHOLD_ENV}={raw:?}: not a probability"),
            }
        }
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(JudolError::invalid_config(format!(
                "decision_threshold {} is outside [0, 1]",
                self.decision_threshold
            )));
        }
        self.normalizer.validate()
    }
}
