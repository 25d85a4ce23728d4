//! Sources of classifier pipelines.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{JudolError, Result};
use crate::ml::pipeline::{ClassifierPipeline, is_binary_path};

/// Something that can produce a validated [`ClassifierPipeline`].
pub trait ModelLoader: Send + Sync + Debug {
    /// Load and validate the pipeline.
    ///
    /// Failures are reported as [`JudolError::ModelUnavailable`].
    fn load(&self) -> Result<ClassifierPipeline>;

    /// Human-readable description of the source.
    fn describe(&self) -> String;
}

/// Loads a pipeline from disk.
///
/// `.bin` and `.bincode` files are decoded with bincode, anything else is
/// read as JSON.
#[derive(Debug, Clone)]
pub struct FileModelLoader {
    path: PathBuf,
}

impl FileModelLoader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ClassifierPipeline> {
        let bytes = std::fs::read(&self.path)?;
        debug!("read {} bytes from {}", bytes.len(), self.path.display());
        let pipeline: ClassifierPipeline = if is_binary_path(&self.path) {
            bincode::deserialize(&bytes)?
        } else {
            serde_json::from_slice(&bytes)?
        };
        pipeline.validate()?;
        Ok(pipeline)
    }
}

impl ModelLoader for FileModelLoader {
    fn load(&self) -> Result<ClassifierPipeline> {
        info!("Loading classifier from {}", self.path.display());
        let pipeline = self
            .read()
            .map_err(|e| JudolError::model_unavailable(&self.path, e.to_string()))?;
        info!(
            "Classifier loaded: stages {:?}",
            pipeline.stage_names()
        );
        Ok(pipeline)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Serves a pipeline that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticModelLoader {
    pipeline: ClassifierPipeline,
}

impl StaticModelLoader {
    pub fn new(pipeline: ClassifierPipeline) -> Self {
        Self { pipeline }
    }
}

impl ModelLoader for StaticModelLoader {
    fn load(&self) -> Result<ClassifierPipeline> {
        self.pipeline
            .validate()
            .map_err(|e| JudolError::model_unavailable("<memory>", e.to_string()))?;
        Ok(self.pipeline.clone())
    }

    fn describe(&self) -> String {
        "in-memory pipeline".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::linear::LinearModel;
    use crate::ml::pipeline::{NamedStage, Stage};
    use crate::ml::tfidf::{TfidfVectorizer, VectorizerArtifact};

    fn pipeline(coefficients: Vec<f64>) -> ClassifierPipeline {
        let tfidf = TfidfVectorizer::new(VectorizerArtifact {
            vocabulary: vec!["slot".into(), "gacor".into()],
            ..Default::default()
        })
        .unwrap();
        ClassifierPipeline::new(vec![
            NamedStage::new("tfidf", Stage::Tfidf(tfidf)),
            NamedStage::new("clf", Stage::LogisticRegression(LinearModel::new(coefficients, 0.0))),
        ])
    }

    #[test]
    fn test_file_loader_json_and_bincode() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["judol.json", "judol.bincode"] {
            let path = dir.path().join(name);
            pipeline(vec![1.0, 1.0]).save(&path).unwrap();

            let loader = FileModelLoader::new(&path);
            let loaded = loader.load().unwrap();
            assert_eq!(loaded.stage_names(), vec!["tfidf", "clf"]);
            assert!(loader.describe().contains(name));
        }
    }

    #[test]
    fn test_missing_file() {
        let loader = FileModelLoader::new("/nonexistent/judol.json");
        let err = loader.load().unwrap_err();
        assert!(err.is_model_unavailable());
    }

    #[test]
    fn test_corrupt_and_inconsistent_files() {
        let dir = tempfile::tempdir().unwrap();

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, b"{ not json").unwrap();
        assert!(FileModelLoader::new(&garbage).load().unwrap_err().is_model_unavailable());

        let mismatched = dir.path().join("mismatched.json");
        pipeline(vec![1.0]).save(&mismatched).unwrap();
        let err = FileModelLoader::new(&mismatched).load().unwrap_err();
        assert!(err.is_model_unavailable());
        assert!(err.to_string().contains("coefficients"));
    }

    #[test]
    fn test_static_loader() {
        assert!(StaticModelLoader::new(pipeline(vec![1.0, 2.0])).load().is_ok());
        assert!(
            StaticModelLoader::new(pipeline(vec![1.0]))
                .load()
                .unwrap_err()
                .is_model_unavailable()
        );
    }
}
