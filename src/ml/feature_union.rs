//! Concatenation of several vectorizers into one feature space.
//!
//! Columns of each member follow those of the previous one, and every
//! feature name is prefixed with its member's name: a union of `word` and
//! `char` vectorizers yields names like `word__gacor` and `char__ ga`.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{JudolError, Result};
use crate::ml::{FeatureColumn, FeatureExtractor};
use crate::ml::sparse::SparseVector;
use crate::ml::tfidf::TfidfVectorizer;

/// Separator between member name and term in feature names.
pub const NAME_SEPARATOR: &str = "__";

/// One member of a [`FeatureUnion`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionMember {
    pub name: String,
    pub vectorizer: TfidfVectorizer,
    /// Multiplier applied to this member's columns.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl UnionMember {
    pub fn new<S: Into<String>>(name: S, vectorizer: TfidfVectorizer) -> Self {
        Self {
            name: name.into(),
            vectorizer,
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Several vectorizers side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureUnion {
    pub transformers: Vec<UnionMember>,
}

impl FeatureUnion {
    pub fn new(transformers: Vec<UnionMember>) -> Self {
        Self { transformers }
    }

    /// Reject empty unions, duplicate member names and non-finite weights.
    pub fn validate(&self) -> Result<()> {
        if self.transformers.is_empty() {
            return Err(JudolError::invalid_model("feature union has no transformers"));
        }
        let mut seen = AHashSet::new();
        for member in &self.transformers {
            if !seen.insert(member.name.as_str()) {
                return Err(JudolError::invalid_model(format!(
                    "duplicate feature union member {:?}",
                    member.name
                )));
            }
            if let Some(weight) = member.weight
                && !weight.is_finite()
            {
                return Err(JudolError::invalid_model(format!(
                    "feature union member {:?} has a non-finite weight",
                    member.name
                )));
            }
        }
        Ok(())
    }
}

impl FeatureExtractor for FeatureUnion {
    fn transform(&self, text: &str) -> SparseVector {
        let mut row = SparseVector::zeros(0);
        for member in &self.transformers {
            let mut part = member.vectorizer.transform(text);
            if let Some(weight) = member.weight {
                part.scale(weight);
            }
            row.concat(&part);
        }
        row
    }

    fn feature_names(&self) -> Vec<String> {
        self.transformers
            .iter()
            .flat_map(|member| {
                member
                    .vectorizer
                    .feature_names()
                    .into_iter()
                    .map(move |term| format!("{}{NAME_SEPARATOR}{term}", member.name))
            })
            .collect()
    }

    fn columns(&self) -> Vec<FeatureColumn> {
        self.transformers
            .iter()
            .flat_map(|member| member.vectorizer.columns())
            .collect()
    }

    fn dimension(&self) -> usize {
        self.transformers
            .iter()
            .map(|member| member.vectorizer.dimension())
            .sum()
    }
}
