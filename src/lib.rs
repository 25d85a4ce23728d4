//! # Judol
//!
//! Detection of gambling-promotion ("judi online") spam in user comments.
//!
//! ## Features
//!
//! - Canonicalization of adversarial text: unicode confusables, emoji
//!   letters and digits, leetspeak, spaced-out letters, noise such as URLs
//!   and mentions
//! - Token normalization with a domain lexicon and fuzzy correction
//! - Inference with persisted TF-IDF + logistic regression pipelines
//! - Per-token explanation of every score
//! - Keyword aggregation and batch reports over comment threads
//!
//! ```no_run
//! let result = judol::classify("G@COR bgt hari ini, m4xw!n di SL0T88").unwrap();
//! if result.label == 1 {
//!     println!("gambling promotion ({:.0}%)", result.probability * 100.0);
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod keywords;
pub mod ml;
pub mod report;
pub mod util;

pub use crate::analysis::canonicalizer::canonicalize;
pub use crate::analysis::normalizer::normalize;
pub use crate::detector::{classify, classify_and_explain, default_detector};
pub use crate::keywords::top_keywords;

pub mod prelude {
    pub use crate::analysis::normalizer::TextNormalizer;
    pub use crate::config::DetectorConfig;
    pub use crate::detector::{ExplanationResult, PredictionResult, SpamDetector};
    pub use crate::error::{JudolError, Result};
    pub use crate::keywords::KeywordAggregator;
    pub use crate::report::{RawComment, analyze_comments};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
