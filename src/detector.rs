//! Comment classification and per-token explanation.
//!
//! A [`SpamDetector`] owns a [`TextNormalizer`] and a classifier pipeline
//! that is loaded on first use and then shared, read-only, by every caller.
//! The fast path reads the loaded pipeline without locking; only the first
//! callers contend on a mutex, and exactly one of them performs the load.
//! A failed load is not remembered, so the next call tries again.
//!
//! ```no_run
//! use judol::config::DetectorConfig;
//! use judol::detector::SpamDetector;
//!
//! let detector = SpamDetector::new(DetectorConfig::from_env());
//! let result = detector.classify("SL0T G@COR hari ini m4xw!n").unwrap();
//! println!("{} ({:.2})", result.label, result.probability);
//! ```

use std::fmt;
use std::sync::{LazyLock, OnceLock};

use log::{debug, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;
use crate::config::DetectorConfig;
use crate::error::{JudolError, Result};
use crate::ml::loader::{FileModelLoader, ModelLoader};
use crate::ml::pipeline::ClassifierPipeline;
use crate::ml::{FeatureExtractor, LinearWeights};

/// Outcome of classifying one comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// 1 for gambling promotion, 0 otherwise.
    pub label: u8,
    /// Probability of the gambling-promotion class.
    pub probability: f64,
    /// The normalized text that was scored.
    pub canonical_text: String,
}

impl PredictionResult {
    fn blank(canonical_text: String) -> Self {
        Self {
            label: 0,
            probability: 0.0,
            canonical_text,
        }
    }

    /// Whether the comment was labelled as gambling promotion.
    pub fn is_judol(&self) -> bool {
        self.label == 1
    }

    /// `"JUDOL"` or `"NON-JUDOL"`.
    pub fn label_desc(&self) -> &'static str {
        if self.is_judol() { "JUDOL" } else { "NON-JUDOL" }
    }
}

/// How much one active feature pushed the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// The word term, without its feature union prefix.
    pub token: String,
    /// TF-IDF value of the feature in this comment.
    pub feature_weight: f64,
    /// Model coefficient of the feature.
    pub coefficient: f64,
    /// `feature_weight * coefficient`.
    pub contribution: f64,
}

/// A prediction together with the features behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationResult {
    /// The raw input text.
    pub text: String,
    pub prediction: PredictionResult,
    pub label_desc: String,
    /// Probability of the clean class.
    pub probability_non: f64,
    /// Active word features by descending absolute contribution.
    pub features: Vec<FeatureContribution>,
}

/// Normalizes comments and scores them with a lazily loaded classifier.
pub struct SpamDetector {
    config: DetectorConfig,
    normalizer: TextNormalizer,
    loader: Box<dyn ModelLoader>,
    pipeline: OnceLock<ClassifierPipeline>,
    load_lock: Mutex<()>,
}

impl fmt::Debug for SpamDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpamDetector")
            .field("config", &self.config)
            .field("loader", &self.loader.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl SpamDetector {
    /// Create a detector that loads its model from `config.model_path`.
    pub fn new(config: DetectorConfig) -> Self {
        let loader = FileModelLoader::new(config.model_path.clone());
        Self::with_loader(config, Box::new(loader))
    }

    /// Create a detector with a custom model source.
    pub fn with_loader(config: DetectorConfig, loader: Box<dyn ModelLoader>) -> Self {
        Self {
            normalizer: TextNormalizer::from_config(&config.normalizer),
            config,
            loader,
            pipeline: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Whether the classifier has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.pipeline.get().is_some()
    }

    /// Load the classifier now instead of on the first classification.
    pub fn warm_up(&self) -> Result<()> {
        self.pipeline().map(|_| ())
    }

    /// The loaded classifier, loading it if needed.
    pub fn pipeline(&self) -> Result<&ClassifierPipeline> {
        if let Some(pipeline) = self.pipeline.get() {
            return Ok(pipeline);
        }

        let _guard = self.load_lock.lock();
        if let Some(pipeline) = self.pipeline.get() {
            return Ok(pipeline);
        }
        match self.loader.load() {
            Ok(pipeline) => Ok(self.pipeline.get_or_init(|| pipeline)),
            Err(e) => {
                warn!("Classifier unavailable from {}: {e}", self.loader.describe());
                Err(e)
            }
        }
    }

    /// Normalize raw text.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Normalize and classify a raw comment.
    pub fn classify(&self, raw: &str) -> Result<PredictionResult> {
        self.predict_clean(self.normalize(raw))
    }

    /// Classify text that is already normalized.
    ///
    /// Blank text is labelled 0 with probability 0 without loading the model.
    pub fn predict_clean<S: Into<String>>(&self, clean: S) -> Result<PredictionResult> {
        let clean = clean.into();
        if clean.trim().is_empty() {
            return Ok(PredictionResult::blank(clean));
        }
        let probability = self.pipeline()?.predict_proba(&clean)?;
        Ok(PredictionResult {
            label: u8::from(probability >= self.config.decision_threshold),
            probability,
            canonical_text: clean,
        })
    }

    /// Classify a raw comment and list the word features behind the score.
    ///
    /// Problems while computing the feature list leave it empty; they never
    /// fail the classification itself.
    pub fn classify_and_explain(&self, raw: &str) -> Result<ExplanationResult> {
        let prediction = self.classify(raw)?;
        let features = if prediction.canonical_text.trim().is_empty() {
            Vec::new()
        } else {
            let pipeline = self.pipeline()?;
            match (pipeline.feature_extractor(), pipeline.linear_model()) {
                (Some(extractor), Some(model)) => {
                    explain_or_empty(extractor, model, &prediction.canonical_text)
                }
                _ => {
                    warn!("Explanation unavailable: pipeline lacks an extractor or a linear stage");
                    Vec::new()
                }
            }
        };
        debug!(
            "{} active word features for {:?}",
            features.len(),
            prediction.canonical_text
        );

        Ok(ExplanationResult {
            text: raw.to_string(),
            label_desc: prediction.label_desc().to_string(),
            probability_non: 1.0 - prediction.probability,
            prediction,
            features,
        })
    }
}

/// [`explain`], with any failure logged and turned into an empty list.
fn explain_or_empty(
    extractor: &dyn FeatureExtractor,
    model: &dyn LinearWeights,
    clean: &str,
) -> Vec<FeatureContribution> {
    explain(extractor, model, clean).unwrap_or_else(|e| {
        warn!("Explanation unavailable: {e}");
        Vec::new()
    })
}

/// Contributions of the non-zero word features of `clean`.
///
/// Columns produced by a `char` or `char_wb` analyzer are left out, whatever
/// the stage or union member is called. A validated [`ClassifierPipeline`]
/// describes every column it produces; an extractor that does not is
/// reported as an error.
fn explain(
    extractor: &dyn FeatureExtractor,
    model: &dyn LinearWeights,
    clean: &str,
) -> Result<Vec<FeatureContribution>> {
    let columns = extractor.columns();
    let coefficients = model.coefficients();
    let row = extractor.transform(clean);

    let mut features = Vec::with_capacity(row.nnz());
    for (index, value) in row.iter() {
        let Some(&coefficient) = coefficients.get(index) else {
            continue;
        };
        let column = columns.get(index).ok_or_else(|| {
            JudolError::explanation(format!(
                "column {index} is not described ({} columns)",
                columns.len()
            ))
        })?;
        if column.is_char_ngram() {
            continue;
        }
        features.push(FeatureContribution {
            token: column.term.clone(),
            feature_weight: value,
            coefficient,
            contribution: value * coefficient,
        });
    }
    features.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
    Ok(features)
}

static DEFAULT_DETECTOR: LazyLock<SpamDetector> =
    LazyLock::new(|| SpamDetector::new(DetectorConfig::from_env()));

/// The process-wide detector, configured from the environment.
pub fn default_detector() -> &'static SpamDetector {
    &DEFAULT_DETECTOR
}

/// Classify a raw comment with the process-wide detector.
pub fn classify(raw: &str) -> Result<PredictionResult> {
    DEFAULT_DETECTOR.classify(raw)
}

/// Classify and explain a raw comment with the process-wide detector.
pub fn classify_and_explain(raw: &str) -> Result<ExplanationResult> {
    DEFAULT_DETECTOR.classify_and_explain(raw)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::ml::feature_union::{FeatureUnion, UnionMember};
    use crate::ml::linear::LinearModel;
    use crate::ml::loader::StaticModelLoader;
    use crate::ml::pipeline::{NamedStage, Stage};
    use crate::ml::tfidf::{AnalyzerKind, TfidfVectorizer, VectorizerArtifact};

    fn word_pipeline() -> ClassifierPipeline {
        let tfidf = TfidfVectorizer::new(VectorizerArtifact {
            vocabulary: vec!["slot".into(), "gacor".into(), "maxwin".into(), "video".into()],
            ..Default::default()
        })
        .unwrap();
        ClassifierPipeline::new(vec![
            NamedStage::new("tfidf", Stage::Tfidf(tfidf)),
            NamedStage::new(
                "clf",
                Stage::LogisticRegression(LinearModel::new(vec![3.0, 4.0, 5.0, -3.0], -1.0)),
            ),
        ])
    }

    fn detector(pipeline: ClassifierPipeline) -> SpamDetector {
        SpamDetector::with_loader(
            DetectorConfig::default(),
            Box::new(StaticModelLoader::new(pipeline)),
        )
    }

    #[derive(Debug)]
    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl ModelLoader for CountingLoader {
        fn load(&self) -> Result<ClassifierPipeline> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(JudolError::model_unavailable("counting", "refused"))
            } else {
                Ok(word_pipeline())
            }
        }

        fn describe(&self) -> String {
            "counting".into()
        }
    }

    #[test]
    fn test_classify() {
        let detector = detector(word_pipeline());
        let spam = detector.classify("SL0T G@COR m4xw!n").unwrap();
        assert_eq!(spam.canonical_text, "slot gacor maxwin");
        assert_eq!(spam.label, 1);
        assert!(spam.probability > 0.9);

        let clean = detector.classify("video bagus sekali").unwrap();
        assert_eq!(clean.label, 0);
        assert!(clean.probability < 0.5);
    }

    #[test]
    fn test_blank_skips_model() {
        let calls = Arc::new(AtomicUsize::new(0));
        let detector = SpamDetector::with_loader(
            DetectorConfig::default(),
            Box::new(CountingLoader {
                calls: calls.clone(),
                fail: true,
            }),
        );
        let result = detector.classify("  🎰 !!! ").unwrap();
        assert_eq!(result.label, 0);
        assert_eq!(result.probability, 0.0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!detector.is_loaded());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let tfidf = TfidfVectorizer::new(VectorizerArtifact {
            vocabulary: vec!["halo".into()],
            ..Default::default()
        })
        .unwrap();
        let pipeline = ClassifierPipeline::new(vec![
            NamedStage::new("tfidf", Stage::Tfidf(tfidf)),
            NamedStage::new("clf", Stage::LogisticRegression(LinearModel::new(vec![0.0], 0.0))),
        ]);
        let result = detector(pipeline).classify("halo").unwrap();
        assert_eq!(result.probability, 0.5);
        assert_eq!(result.label, 1);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let detector = SpamDetector::with_loader(
            DetectorConfig::default(),
            Box::new(CountingLoader {
                calls: calls.clone(),
                fail: true,
            }),
        );
        assert!(detector.classify("slot").unwrap_err().is_model_unavailable());
        assert!(detector.classify("slot").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!detector.is_loaded());
    }

    #[test]
    fn test_single_load_under_concurrency() {
        let calls = Arc::new(AtomicUsize::new(0));
        let detector = SpamDetector::with_loader(
            DetectorConfig::default(),
            Box::new(CountingLoader {
                calls: calls.clone(),
                fail: false,
            }),
        );
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..20 {
                        detector.classify("slot gacor").unwrap();
                    }
                });
            }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(detector.is_loaded());
    }

    #[test]
    fn test_explanation_order_and_fields() {
        let detector = detector(word_pipeline());
        let result = detector.classify_and_explain("slot gacor video").unwrap();
        assert_eq!(result.text, "slot gacor video");
        assert_eq!(result.label_desc, "JUDOL");
        assert!((result.probability_non + result.prediction.probability - 1.0).abs() < 1e-12);

        let tokens: Vec<&str> = result.features.iter().map(|f| f.token.as_str()).collect();
        assert_eq!(tokens, vec!["gacor", "slot", "video"]);
        for feature in &result.features {
            assert!((feature.contribution - feature.feature_weight * feature.coefficient).abs() < 1e-12);
        }
        assert!(result.features[2].contribution < 0.0);
    }

    #[test]
    fn test_explanation_skips_char_features() {
        let word = TfidfVectorizer::new(VectorizerArtifact {
            vocabulary: vec!["slot".into(), "gacor".into()],
            ..Default::default()
        })
        .unwrap();
        let chars = TfidfVectorizer::new(VectorizerArtifact {
            analyzer: AnalyzerKind::CharWb,
            ngram_range: (2, 2),
            vocabulary: vec![" s".into(), "sl".into()],
            ..Default::default()
        })
        .unwrap();
        let pipeline = ClassifierPipeline::new(vec![
            NamedStage::new(
                "features",
                Stage::FeatureUnion(FeatureUnion::new(vec![
                    UnionMember::new("word", word),
                    UnionMember::new("char", chars),
                ])),
            ),
            NamedStage::new(
                "clf",
                Stage::LogisticRegression(LinearModel::new(vec![1.0, 2.0, 9.0, 9.0], 0.0)),
            ),
        ]);
        let result = detector(pipeline).classify_and_explain("slot").unwrap();
        assert_eq!(result.features.len(), 1);
        assert_eq!(result.features[0].token, "slot");
    }

    #[test]
    fn test_explanation_uses_analyzer_not_member_names() {
        let word = TfidfVectorizer::new(VectorizerArtifact {
            vocabulary: vec!["slot".into(), "gacor".into()],
            ..Default::default()
        })
        .unwrap();
        let chars = TfidfVectorizer::new(VectorizerArtifact {
            analyzer: AnalyzerKind::CharWb,
            ngram_range: (2, 2),
            vocabulary: vec![" s".into(), "sl".into()],
            ..Default::default()
        })
        .unwrap();
        let pipeline = ClassifierPipeline::new(vec![
            NamedStage::new(
                "union",
                Stage::FeatureUnion(FeatureUnion::new(vec![
                    UnionMember::new("words", word),
                    UnionMember::new("char_wb", chars),
                ])),
            ),
            NamedStage::new(
                "clf",
                Stage::LogisticRegression(LinearModel::new(vec![1.0, 2.0, 9.0, 9.0], 0.0)),
            ),
        ]);
        let result = detector(pipeline).classify_and_explain("slot").unwrap();
        let tokens: Vec<&str> = result.features.iter().map(|f| f.token.as_str()).collect();
        assert_eq!(tokens, vec!["slot"]);
    }

    #[test]
    fn test_explanation_of_char_only_pipeline() {
        let chars = TfidfVectorizer::new(VectorizerArtifact {
            analyzer: AnalyzerKind::CharWb,
            ngram_range: (2, 2),
            vocabulary: vec![" s".into(), "sl".into()],
            ..Default::default()
        })
        .unwrap();
        let pipeline = ClassifierPipeline::new(vec![
            NamedStage::new("tfidf", Stage::Tfidf(chars)),
            NamedStage::new(
                "clf",
                Stage::LogisticRegression(LinearModel::new(vec![3.0, 3.0], 0.0)),
            ),
        ]);
        let result = detector(pipeline).classify_and_explain("slot").unwrap();
        assert_eq!(result.prediction.label, 1);
        assert!(result.features.is_empty());
    }

    /// Extractor that transforms like its vectorizer but describes no columns.
    struct UndescribedExtractor(TfidfVectorizer);

    impl FeatureExtractor for UndescribedExtractor {
        fn transform(&self, text: &str) -> crate::ml::sparse::SparseVector {
            self.0.transform(text)
        }

        fn feature_names(&self) -> Vec<String> {
            Vec::new()
        }

        fn columns(&self) -> Vec<crate::ml::FeatureColumn> {
            Vec::new()
        }

        fn dimension(&self) -> usize {
            self.0.dimension()
        }
    }

    #[test]
    fn test_undescribed_columns_give_empty_explanation() {
        let extractor = UndescribedExtractor(
            TfidfVectorizer::new(VectorizerArtifact {
                vocabulary: vec!["slot".into(), "gacor".into()],
                ..Default::default()
            })
            .unwrap(),
        );
        let model = LinearModel::new(vec![1.0, 2.0], 0.0);

        assert!(matches!(
            explain(&extractor, &model, "slot gacor"),
            Err(JudolError::Explanation(_))
        ));
        assert!(explain_or_empty(&extractor, &model, "slot gacor").is_empty());
    }

    #[test]
    fn test_explain_blank() {
        let detector = detector(word_pipeline());
        let result = detector.classify_and_explain("").unwrap();
        assert_eq!(result.label_desc, "NON-JUDOL");
        assert_eq!(result.probability_non, 1.0);
        assert!(result.features.is_empty());
        assert!(!detector.is_loaded());
    }

    #[test]
    fn test_warm_up() {
        let detector = detector(word_pipeline());
        assert!(!detector.is_loaded());
        detector.warm_up().unwrap();
        assert!(detector.is_loaded());
    }
}
