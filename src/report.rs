//! Batch scoring of a comment thread.
//!
//! [`analyze_comments`] classifies every comment in parallel and summarizes
//! the results: class counts, the most frequent terms on each side, the most
//! confident positives, the comments the model is unsure about, and a few
//! clean samples.

use chrono::{DateTime, Utc};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::detector::SpamDetector;
use crate::error::Result;
use crate::keywords::top_keywords;

/// Keywords listed per class.
pub const TOP_KEYWORDS: usize = 30;

/// Positives listed by confidence.
pub const HIGH_CONFIDENCE_LIMIT: usize = 7;

/// Borderline comments listed.
pub const UNSURE_LIMIT: usize = 10;

/// Probability band, inclusive, considered borderline.
pub const UNSURE_BAND: (f64, f64) = (0.40, 0.60);

/// Clean comments sampled.
pub const CLEAN_SAMPLE_LIMIT: usize = 3;

/// A comment as retrieved from the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawComment {
    pub id: String,
    #[serde(default)]
    pub author: String,
    pub text: String,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub published_at: Option<String>,
}

impl RawComment {
    pub fn new<S: Into<String>>(id: S, author: S, text: S) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            text: text.into(),
            published_at: None,
        }
    }
}

/// A comment with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredComment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub canonical_text: String,
    pub label: u8,
    pub probability: f64,
    pub published_at: Option<DateTime<Utc>>,
}

/// Summary over a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total: usize,
    pub judol_count: usize,
    pub clean_count: usize,
    /// Frequent terms of the positive comments' canonical text.
    pub top_keywords: Vec<(String, usize)>,
    /// Frequent terms of the clean comments' canonical text.
    pub top_keywords_negative: Vec<(String, usize)>,
    pub high_confidence_spam: Vec<ScoredComment>,
    pub unsure_comments: Vec<ScoredComment>,
    /// Raw text of the first clean comments.
    pub sample_clean_comments: Vec<String>,
}

/// Every scored comment plus the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub comments: Vec<ScoredComment>,
    pub stats: BatchStats,
}

/// Parse an RFC 3339 timestamp, `None` when it is not one.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Score every comment and summarize the batch.
pub fn analyze_comments(detector: &SpamDetector, comments: &[RawComment]) -> Result<BatchReport> {
    let scored: Vec<ScoredComment> = comments
        .par_iter()
        .map(|comment| {
            let prediction = detector.classify(&comment.text)?;
            Ok(ScoredComment {
                id: comment.id.clone(),
                author: comment.author.clone(),
                text: comment.text.clone(),
                canonical_text: prediction.canonical_text,
                label: prediction.label,
                probability: prediction.probability,
                published_at: comment.published_at.as_deref().and_then(parse_timestamp),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let stats = summarize(&scored);
    info!(
        "Analyzed {} comments: {} judol, {} clean",
        stats.total, stats.judol_count, stats.clean_count
    );
    Ok(BatchReport {
        comments: scored,
        stats,
    })
}

/// Summary statistics of already-scored comments.
pub fn summarize(scored: &[ScoredComment]) -> BatchStats {
    let (positives, negatives): (Vec<&ScoredComment>, Vec<&ScoredComment>) =
        scored.iter().partition(|c| c.label == 1);

    let mut high_confidence_spam: Vec<ScoredComment> =
        positives.iter().map(|&c| c.clone()).collect();
    high_confidence_spam.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    high_confidence_spam.truncate(HIGH_CONFIDENCE_LIMIT);

    let (low, high) = UNSURE_BAND;
    let mut unsure_comments: Vec<ScoredComment> = scored
        .iter()
        .filter(|c| c.probability >= low && c.probability <= high)
        .cloned()
        .collect();
    unsure_comments.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    unsure_comments.truncate(UNSURE_LIMIT);

    BatchStats {
        total: scored.len(),
        judol_count: positives.len(),
        clean_count: negatives.len(),
        top_keywords: top_keywords(positives.iter().map(|c| &c.canonical_text), TOP_KEYWORDS),
        top_keywords_negative: top_keywords(
            negatives.iter().map(|c| &c.canonical_text),
            TOP_KEYWORDS,
        ),
        high_confidence_spam,
        unsure_comments,
        sample_clean_comments: negatives
            .iter()
            .take(CLEAN_SAMPLE_LIMIT)
            .map(|c| c.text.clone())
            .collect(),
    }
}
