//! Inference side of the comment classifier.
//!
//! The classifier is a persisted, already-fitted pipeline: one or more TF-IDF
//! vectorizers (optionally joined in a [`FeatureUnion`](feature_union::FeatureUnion))
//! followed by a logistic regression. Nothing here trains; artifacts are
//! produced elsewhere and loaded through a [`ModelLoader`](loader::ModelLoader).
//!
//! Two narrow capabilities are all the detector and the explainer need from
//! a pipeline stage, and they are modelled as traits so stages can be probed
//! for them:
//!
//! - [`FeatureExtractor`]: text to a sparse feature row, plus feature names
//!   and the analyzer behind every column;
//! - [`LinearWeights`]: a coefficient vector and an intercept.

pub mod feature_union;
pub mod linear;
pub mod loader;
pub mod pipeline;
pub mod sparse;
pub mod tfidf;

use crate::ml::linear::sigmoid;
use crate::ml::sparse::SparseVector;
use crate::ml::tfidf::AnalyzerKind;

/// What one feature column counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureColumn {
    /// The vocabulary term, without any union member prefix.
    pub term: String,
    /// Analyzer that produced the term.
    pub analyzer: AnalyzerKind,
}

impl FeatureColumn {
    pub fn new<S: Into<String>>(term: S, analyzer: AnalyzerKind) -> Self {
        Self {
            term: term.into(),
            analyzer,
        }
    }

    /// Whether the column counts character n-grams (`char` or `char_wb`).
    pub fn is_char_ngram(&self) -> bool {
        matches!(self.analyzer, AnalyzerKind::Char | AnalyzerKind::CharWb)
    }
}

/// A stage that turns text into a sparse feature row.
pub trait FeatureExtractor: Send + Sync {
    /// Compute the feature row of `text`.
    fn transform(&self, text: &str) -> SparseVector;

    /// Name of every column, in column order.
    fn feature_names(&self) -> Vec<String>;

    /// Term and analyzer of every column, in column order.
    fn columns(&self) -> Vec<FeatureColumn>;

    /// Number of columns.
    fn dimension(&self) -> usize;
}

/// A stage carrying the weights of a binary linear model.
pub trait LinearWeights: Send + Sync {
    /// One coefficient per feature column.
    fn coefficients(&self) -> &[f64];

    /// Bias term.
    fn intercept(&self) -> f64;

    /// Signed distance to the decision boundary.
    fn decision_function(&self, features: &SparseVector) -> f64 {
        features.dot(self.coefficients()) + self.intercept()
    }

    /// Probability of the positive class.
    fn probability(&self, features: &SparseVector) -> f64 {
        sigmoid(self.decision_function(features))
    }
}
