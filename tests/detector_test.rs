//! Integration tests for the detector with on-disk and in-memory models.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use judol::config::DetectorConfig;
use judol::detector::SpamDetector;
use judol::error::{JudolError, Result};
use judol::ml::feature_union::{FeatureUnion, UnionMember};
use judol::ml::linear::LinearModel;
use judol::ml::loader::{FileModelLoader, ModelLoader, StaticModelLoader};
use judol::ml::pipeline::{ClassifierPipeline, NamedStage, Stage};
use judol::ml::tfidf::{AnalyzerKind, Norm, TfidfVectorizer, VectorizerArtifact};
use tempfile::TempDir;

/// A word + char_wb union in the shape of an exported scikit-learn pipeline.
fn union_pipeline() -> ClassifierPipeline {
    let word_terms = ["slot", "gacor", "maxwin", "hoki", "video", "bagus", "slot gacor"];
    let word = TfidfVectorizer::new(VectorizerArtifact {
        ngram_range: (1, 2),
        sublinear_tf: true,
        vocabulary: word_terms.iter().map(|s| s.to_string()).collect(),
        idf: Some(vec![1.5, 1.4, 1.9, 2.2, 1.2, 1.3, 2.5]),
        ..Default::default()
    })
    .unwrap();
    let char_terms = [" sl", "slo", "lot", "cor", "vid"];
    let chars = TfidfVectorizer::new(VectorizerArtifact {
        analyzer: AnalyzerKind::CharWb,
        ngram_range: (3, 3),
        sublinear_tf: true,
        vocabulary: char_terms.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    })
    .unwrap();

    ClassifierPipeline::new(vec![
        NamedStage::new(
            "features",
            Stage::FeatureUnion(FeatureUnion::new(vec![
                UnionMember::new("word", word),
                UnionMember::new("char", chars),
            ])),
        ),
        NamedStage::new(
            "clf",
            Stage::LogisticRegression(LinearModel::new(
                vec![2.5, 3.0, 3.5, 2.0, -2.5, -2.0, 1.0, 0.8, 0.8, 0.8, 0.6, -0.8],
                -1.2,
            )),
        ),
    ])
}

fn detector_for(path: &Path) -> SpamDetector {
    SpamDetector::new(DetectorConfig {
        model_path: path.to_path_buf(),
        ..Default::default()
    })
}

#[test]
fn test_json_model_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("judol_pipeline.json");
    union_pipeline().save(&path).unwrap();

    let detector = detector_for(&path);
    assert!(!detector.is_loaded());

    let spam = detector.classify("SL0T G@COR m4xw!n bosku").unwrap();
    assert_eq!(spam.label, 1);
    assert!(spam.probability > 0.5);
    assert!(detector.is_loaded());

    let clean = detector.classify("videonya bagus banget").unwrap();
    assert_eq!(clean.label, 0);
    assert!(clean.probability < 0.5);
}

#[test]
fn test_bincode_model_from_disk() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("model.json");
    let bin = dir.path().join("model.bin");
    union_pipeline().save(&json).unwrap();
    union_pipeline().save(&bin).unwrap();

    let text = "s l o t gacor hari ini";
    let from_json = detector_for(&json).classify(text).unwrap();
    let from_bin = detector_for(&bin).classify(text).unwrap();
    assert_eq!(from_json.label, from_bin.label);
    assert_eq!(from_json.canonical_text, from_bin.canonical_text);
    assert!((from_json.probability - from_bin.probability).abs() < 1e-9);
}

#[test]
fn test_missing_model() {
    let detector = detector_for(Path::new("/nonexistent/dir/judol.json"));
    let err = detector.classify("slot gacor").unwrap_err();
    assert!(err.is_model_unavailable());
    assert!(!detector.is_loaded());

    // Blank input never needs the model.
    let blank = detector.classify("   ").unwrap();
    assert_eq!(blank.label, 0);
    assert_eq!(blank.probability, 0.0);
}

#[test]
fn test_model_appearing_later_is_picked_up() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("late.json");
    let detector = detector_for(&path);

    assert!(detector.classify("slot gacor").is_err());
    union_pipeline().save(&path).unwrap();
    assert!(detector.classify("slot gacor").is_ok());
}

#[test]
fn test_explanation_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("judol_pipeline.json");
    union_pipeline().save(&path).unwrap();

    let result = detector_for(&path)
        .classify_and_explain("SLOT GACOR video")
        .unwrap();
    assert_eq!(result.label_desc, "JUDOL");
    assert!(!result.features.is_empty());
    for feature in &result.features {
        assert!(!feature.token.starts_with("word__"));
        assert!(!feature.token.contains("char__"));
    }
    let tokens: Vec<&str> = result.features.iter().map(|f| f.token.as_str()).collect();
    assert!(tokens.contains(&"slot gacor"));
    assert!(tokens.contains(&"video"));
    assert!(
        result
            .features
            .windows(2)
            .all(|w| w[0].contribution.abs() >= w[1].contribution.abs())
    );
}

#[test]
fn test_explanation_with_raw_counts() {
    let tfidf = TfidfVectorizer::new(VectorizerArtifact {
        vocabulary: vec!["slot".into(), "gacor".into()],
        norm: Norm::None,
        ..Default::default()
    })
    .unwrap();
    let pipeline = ClassifierPipeline::new(vec![
        NamedStage::new("tfidf", Stage::Tfidf(tfidf)),
        NamedStage::new(
            "clf",
            Stage::LogisticRegression(LinearModel::new(vec![1.0, 1.0], 0.0)),
        ),
    ]);
    let detector = SpamDetector::with_loader(
        DetectorConfig::default(),
        Box::new(StaticModelLoader::new(pipeline)),
    );
    let result = detector.classify_and_explain("slot slot gacor").unwrap();
    assert_eq!(result.features.len(), 2);
    assert_eq!(result.features[0].token, "slot");
    assert_eq!(result.features[0].feature_weight, 2.0);
}

#[derive(Debug)]
struct SlowCountingLoader {
    inner: FileModelLoader,
    calls: Arc<AtomicUsize>,
}

impl ModelLoader for SlowCountingLoader {
    fn load(&self) -> Result<ClassifierPipeline> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(std::time::Duration::from_millis(50));
        self.inner.load()
    }

    fn describe(&self) -> String {
        format!("slow {}", self.inner.describe())
    }
}

#[test]
fn test_concurrent_first_use_loads_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("judol_pipeline.json");
    union_pipeline().save(&path).unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let detector = SpamDetector::with_loader(
        DetectorConfig::default(),
        Box::new(SlowCountingLoader {
            inner: FileModelLoader::new(&path),
            calls: calls.clone(),
        }),
    );

    let results: Vec<u8> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let detector = &detector;
                scope.spawn(move || {
                    let text = if i % 2 == 0 { "slot gacor maxwin" } else { "video bagus" };
                    detector.classify(text).map(|r| r.label)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<std::result::Result<Vec<_>, JudolError>>()
            .unwrap()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(results.iter().filter(|&&l| l == 1).count(), 8);
}

#[derive(Debug)]
struct CountingStaticLoader {
    inner: StaticModelLoader,
    calls: Arc<AtomicUsize>,
}

impl ModelLoader for CountingStaticLoader {
    fn load(&self) -> Result<ClassifierPipeline> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.load()
    }

    fn describe(&self) -> String {
        format!("counting {}", self.inner.describe())
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let calls = Arc::new(AtomicUsize::new(0));
    let detector = SpamDetector::with_loader(
        DetectorConfig::default(),
        Box::new(CountingStaticLoader {
            inner: StaticModelLoader::new(union_pipeline()),
            calls: calls.clone(),
        }),
    );

    for _ in 0..5 {
        let blank = detector.classify("").unwrap();
        assert_eq!(blank.label, 0);
        assert_eq!(blank.probability, 0.0);
        assert_eq!(blank.canonical_text, "");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!detector.is_loaded());

    let text = "SL0T G@COR m4xw!n, videonya bagus";
    let first = detector.classify(text).unwrap();
    let first_explained = detector.classify_and_explain(text).unwrap();
    for _ in 0..10 {
        assert_eq!(detector.classify(text).unwrap(), first);
        assert_eq!(detector.classify_and_explain(text).unwrap(), first_explained);
    }
    assert_eq!(first_explained.prediction, first);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(detector.classify("").unwrap().probability, 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
