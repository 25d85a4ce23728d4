//! Integration tests for batch reports and keyword aggregation.

use judol::config::DetectorConfig;
use judol::detector::SpamDetector;
use judol::keywords::{KeywordAggregator, top_keywords};
use judol::ml::linear::LinearModel;
use judol::ml::loader::StaticModelLoader;
use judol::ml::pipeline::{ClassifierPipeline, NamedStage, Stage};
use judol::ml::tfidf::{TfidfVectorizer, VectorizerArtifact};
use judol::report::{RawComment, analyze_comments};

fn detector() -> SpamDetector {
    let tfidf = TfidfVectorizer::new(VectorizerArtifact {
        vocabulary: vec![
            "slot".into(),
            "gacor".into(),
            "maxwin".into(),
            "video".into(),
            "bagus".into(),
        ],
        ..Default::default()
    })
    .unwrap();
    let pipeline = ClassifierPipeline::new(vec![
        NamedStage::new("tfidf", Stage::Tfidf(tfidf)),
        NamedStage::new(
            "clf",
            Stage::LogisticRegression(LinearModel::new(vec![4.0, 4.0, 4.0, -4.0, -4.0], -0.1)),
        ),
    ]);
    SpamDetector::with_loader(
        DetectorConfig::default(),
        Box::new(StaticModelLoader::new(pipeline)),
    )
}

fn comment(id: &str, text: &str, published_at: Option<&str>) -> RawComment {
    RawComment {
        id: id.to_string(),
        author: format!("user{id}"),
        text: text.to_string(),
        published_at: published_at.map(str::to_string),
    }
}

#[test]
fn test_analyze_comments() {
    let comments = vec![
        comment("1", "SL0T G@COR hari ini", Some("2024-03-01T08:00:00Z")),
        comment("2", "videonya bagus", Some("not a date")),
        comment("3", "m4xw!n di slot", None),
        comment("4", "bagus video kak", None),
        comment("5", "halo semua", None),
        comment("6", "", None),
    ];

    let report = analyze_comments(&detector(), &comments).unwrap();
    let stats = &report.stats;

    assert_eq!(report.comments.len(), 6);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.judol_count, 2);
    assert_eq!(stats.clean_count, 4);

    // Order follows the input.
    let ids: Vec<&str> = report.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);

    assert!(report.comments[0].published_at.is_some());
    assert!(report.comments[1].published_at.is_none());

    assert_eq!(stats.top_keywords[0], ("slot".to_string(), 2));
    assert!(stats.top_keywords_negative.contains(&("bagus".to_string(), 2)));
    assert_eq!(stats.high_confidence_spam.len(), 2);
    assert_eq!(
        stats.sample_clean_comments,
        vec!["videonya bagus", "bagus video kak", "halo semua"]
    );

    // "halo semua" has no known term and scores just under 0.5.
    let unsure: Vec<&str> = stats.unsure_comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(unsure, vec!["5"]);
}

#[test]
fn test_empty_batch() {
    let report = analyze_comments(&detector(), &[]).unwrap();
    assert_eq!(report.stats.total, 0);
    assert!(report.stats.top_keywords.is_empty());
    assert!(report.stats.sample_clean_comments.is_empty());
}

#[test]
fn test_keyword_aggregation_over_normalized_text() {
    let detector = detector();
    let texts: Vec<String> = ["SL0T G@COR", "s l o t 8 8", "gacor!!", "halo"]
        .iter()
        .map(|t| detector.normalize(t))
        .collect();

    let top = top_keywords(&texts, 3);
    assert_eq!(top[0], ("gacor".to_string(), 2));

    let long = KeywordAggregator::with_min_len(5).top(&texts, 10);
    assert!(long.iter().all(|(term, _)| term.len() >= 5));
}
