//! The persisted classifier pipeline.
//!
//! A pipeline is an ordered list of named stages, each one a tagged
//! [`Stage`]. Stages are located by capability rather than by position:
//! [`ClassifierPipeline::feature_extractor`] and
//! [`ClassifierPipeline::linear_model`] first look for a stage whose name
//! hints at its role (`tfidf`, `clf`, ...) and fall back to the first stage
//! that has the capability.
//!
//! ```
//! use judol::ml::linear::LinearModel;
//! use judol::ml::pipeline::{ClassifierPipeline, NamedStage, Stage};
//! use judol::ml::tfidf::{TfidfVectorizer, VectorizerArtifact};
//!
//! let tfidf = TfidfVectorizer::new(VectorizerArtifact {
//!     vocabulary: vec!["slot".into(), "gacor".into()],
//!     ..Default::default()
//! })
//! .unwrap();
//! let pipeline = ClassifierPipeline::new(vec![
//!     NamedStage::new("tfidf", Stage::Tfidf(tfidf)),
//!     NamedStage::new("clf", Stage::LogisticRegression(LinearModel::new(vec![3.0, 3.0], -1.0))),
//! ]);
//! pipeline.validate().unwrap();
//! assert!(pipeline.predict_proba("slot gacor").unwrap() > 0.9);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{JudolError, Result};
use crate::ml::feature_union::FeatureUnion;
use crate::ml::linear::LinearModel;
use crate::ml::tfidf::TfidfVectorizer;
use crate::ml::{FeatureExtractor, LinearWeights};

/// Artifact format understood by this version of the crate.
pub const FORMAT_VERSION: u32 = 1;

/// Name fragments marking a feature-extraction stage.
pub const EXTRACTOR_HINTS: &[&str] = &["tfidf", "vect", "feature", "union"];

/// Name fragments marking the linear classifier stage.
pub const LINEAR_HINTS: &[&str] = &["clf", "svm", "log", "saga", "linear"];

/// A pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    FeatureUnion(FeatureUnion),
    Tfidf(TfidfVectorizer),
    LogisticRegression(LinearModel),
}

impl Stage {
    /// Short name of the stage type.
    pub fn kind(&self) -> &'static str {
        match self {
            Stage::FeatureUnion(_) => "feature_union",
            Stage::Tfidf(_) => "tfidf",
            Stage::LogisticRegression(_) => "logistic_regression",
        }
    }

    /// This stage as a feature extractor, if it is one.
    pub fn as_feature_extractor(&self) -> Option<&dyn FeatureExtractor> {
        match self {
            Stage::FeatureUnion(union) => Some(union as &dyn FeatureExtractor),
            Stage::Tfidf(tfidf) => Some(tfidf as &dyn FeatureExtractor),
            Stage::LogisticRegression(_) => None,
        }
    }

    /// This stage as linear weights, if it is one.
    pub fn as_linear_weights(&self) -> Option<&dyn LinearWeights> {
        match self {
            Stage::LogisticRegression(model) => Some(model as &dyn LinearWeights),
            _ => None,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Stage::FeatureUnion(union) => union.validate(),
            Stage::Tfidf(_) => Ok(()),
            Stage::LogisticRegression(model) => model.validate(),
        }
    }
}

/// A stage and the name it was fitted under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedStage {
    pub name: String,
    pub stage: Stage,
}

impl NamedStage {
    pub fn new<S: Into<String>>(name: S, stage: Stage) -> Self {
        Self {
            name: name.into(),
            stage,
        }
    }

    fn hinted(&self, hints: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        hints.iter().any(|hint| name.contains(hint))
    }
}

/// A fitted text classification pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierPipeline {
    pub format_version: u32,
    pub stages: Vec<NamedStage>,
}

impl ClassifierPipeline {
    /// Create a pipeline in the current format.
    pub fn new(stages: Vec<NamedStage>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            stages,
        }
    }

    /// Names of the stages, in order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name.as_str()).collect()
    }

    /// The stage that turns text into features.
    pub fn feature_extractor(&self) -> Option<&dyn FeatureExtractor> {
        self.stages
            .iter()
            .filter(|s| s.hinted(EXTRACTOR_HINTS))
            .find_map(|s| s.stage.as_feature_extractor())
            .or_else(|| {
                self.stages
                    .iter()
                    .find_map(|s| s.stage.as_feature_extractor())
            })
    }

    /// The stage holding the classifier weights.
    pub fn linear_model(&self) -> Option<&dyn LinearWeights> {
        self.stages
            .iter()
            .filter(|s| s.hinted(LINEAR_HINTS))
            .find_map(|s| s.stage.as_linear_weights())
            .or_else(|| self.stages.iter().find_map(|s| s.stage.as_linear_weights()))
    }

    /// Check that the pipeline can score text.
    pub fn validate(&self) -> Result<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(JudolError::invalid_model(format!(
                "unsupported format version {} (expected {FORMAT_VERSION})",
                self.format_version
            )));
        }
        for named in &self.stages {
            named.stage.validate().map_err(|e| {
                JudolError::invalid_model(format!("stage {:?}: {e}", named.name))
            })?;
        }

        let extractor = self
            .feature_extractor()
            .ok_or_else(|| JudolError::invalid_model("no feature extraction stage"))?;
        let model = self
            .linear_model()
            .ok_or_else(|| JudolError::invalid_model("no linear classifier stage"))?;
        if extractor.dimension() != model.coefficients().len() {
            return Err(JudolError::invalid_model(format!(
                "{} features but {} coefficients",
                extractor.dimension(),
                model.coefficients().len()
            )));
        }
        Ok(())
    }

    /// Probability that `clean_text` is gambling promotion.
    pub fn predict_proba(&self, clean_text: &str) -> Result<f64> {
        let extractor = self
            .feature_extractor()
            .ok_or_else(|| JudolError::invalid_model("no feature extraction stage"))?;
        let model = self
            .linear_model()
            .ok_or_else(|| JudolError::invalid_model("no linear classifier stage"))?;
        Ok(model.probability(&extractor.transform(clean_text)))
    }

    /// Write the pipeline as JSON, or as bincode for `.bin` / `.bincode`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = if is_binary_path(path) {
            bincode::serialize(self)?
        } else {
            serde_json::to_vec(self)?
        };
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Whether `path` names a bincode artifact.
pub fn is_binary_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("bin") | Some("bincode")
    )
}
