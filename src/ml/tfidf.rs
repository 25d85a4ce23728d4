//! TF-IDF vectorizer for text feature extraction.
//!
//! Inference-only and compatible with scikit-learn's `TfidfVectorizer`: the
//! same analyzers (`word`, `char_wb`, `char`), n-gram enumeration, sublinear
//! term frequency, idf weighting and row normalization, so a fitted
//! vocabulary and idf vector exported from Python reproduce its features.

use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{JudolError, Result};
use crate::ml::{FeatureColumn, FeatureExtractor};
use crate::ml::sparse::SparseVector;

/// Default word token pattern: two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// How a document is cut into terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    /// Word n-grams over [`DEFAULT_TOKEN_PATTERN`] matches.
    #[default]
    Word,
    /// Character n-grams inside space-padded words.
    CharWb,
    /// Character n-grams over the whole text.
    Char,
}

/// Row normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    L1,
    #[default]
    L2,
    None,
}

/// Serialized form of a fitted vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerArtifact {
    pub analyzer: AnalyzerKind,
    pub ngram_range: (usize, usize),
    pub lowercase: bool,
    pub binary: bool,
    pub sublinear_tf: bool,
    pub norm: Norm,
    /// Terms in column order.
    pub vocabulary: Vec<String>,
    /// Inverse document frequencies in column order; `None` disables idf.
    pub idf: Option<Vec<f64>>,
}

impl Default for VectorizerArtifact {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerKind::Word,
            ngram_range: (1, 1),
            lowercase: true,
            binary: false,
            sublinear_tf: false,
            norm: Norm::L2,
            vocabulary: Vec::new(),
            idf: None,
        }
    }
}

/// A fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VectorizerArtifact", into = "VectorizerArtifact")]
pub struct TfidfVectorizer {
    artifact: VectorizerArtifact,
    index: AHashMap<String, usize>,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    /// Build a vectorizer from its fitted state.
    pub fn new(artifact: VectorizerArtifact) -> Result<Self> {
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(JudolError::invalid_model(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }
        if artifact.vocabulary.is_empty() {
            return Err(JudolError::invalid_model("vectorizer has an empty vocabulary"));
        }
        if let Some(idf) = &artifact.idf {
            if idf.len() != artifact.vocabulary.len() {
                return Err(JudolError::invalid_model(format!(
                    "idf has {} entries for {} terms",
                    idf.len(),
                    artifact.vocabulary.len()
                )));
            }
            if idf.iter().any(|w| !w.is_finite()) {
                return Err(JudolError::invalid_model("idf contains non-finite values"));
            }
        }

        let mut index = AHashMap::with_capacity(artifact.vocabulary.len());
        for (column, term) in artifact.vocabulary.iter().enumerate() {
            if index.insert(term.clone(), column).is_some() {
                return Err(JudolError::invalid_model(format!(
                    "duplicate vocabulary term {term:?}"
                )));
            }
        }

        Ok(Self {
            artifact,
            index,
            token_pattern: Regex::new(DEFAULT_TOKEN_PATTERN)?,
        })
    }

    /// The fitted state.
    pub fn artifact(&self) -> &VectorizerArtifact {
        &self.artifact
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.artifact.vocabulary.len()
    }

    /// Column of `term`, if it is in the vocabulary.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Cut a document into terms, vocabulary or not.
    pub fn analyze(&self, document: &str) -> Vec<String> {
        let document = if self.artifact.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };
        let (min_n, max_n) = self.artifact.ngram_range;
        match self.artifact.analyzer {
            AnalyzerKind::Word => {
                let tokens: Vec<&str> = self
                    .token_pattern
                    .find_iter(&document)
                    .map(|m| m.as_str())
                    .collect();
                word_ngrams(&tokens, min_n, max_n)
            }
            AnalyzerKind::CharWb => char_wb_ngrams(&document, min_n, max_n),
            AnalyzerKind::Char => char_ngrams(&document, min_n, max_n),
        }
    }
}

impl TryFrom<VectorizerArtifact> for TfidfVectorizer {
    type Error = JudolError;

    fn try_from(artifact: VectorizerArtifact) -> Result<Self> {
        Self::new(artifact)
    }
}

impl From<TfidfVectorizer> for VectorizerArtifact {
    fn from(vectorizer: TfidfVectorizer) -> Self {
        vectorizer.artifact
    }
}

impl FeatureExtractor for TfidfVectorizer {
    fn transform(&self, text: &str) -> SparseVector {
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for term in self.analyze(text) {
            if let Some(column) = self.column(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut features = SparseVector::from_pairs(self.vocabulary_size(), counts);
        let artifact = &self.artifact;
        if artifact.binary {
            features.map_values(|_, _| 1.0);
        }
        if artifact.sublinear_tf {
            features.map_values(|_, tf| tf.ln() + 1.0);
        }
        if let Some(idf) = &artifact.idf {
            features.map_values(|column, tf| tf * idf[column]);
        }

        let norm = match artifact.norm {
            Norm::L1 => features.l1_norm(),
            Norm::L2 => features.l2_norm(),
            Norm::None => 1.0,
        };
        if norm > 0.0 && norm != 1.0 {
            features.scale(1.0 / norm);
        }
        features
    }

    fn feature_names(&self) -> Vec<String> {
        self.artifact.vocabulary.clone()
    }

    fn columns(&self) -> Vec<FeatureColumn> {
        self.artifact
            .vocabulary
            .iter()
            .map(|term| FeatureColumn::new(term.as_str(), self.artifact.analyzer))
            .collect()
    }

    fn dimension(&self) -> usize {
        self.vocabulary_size()
    }
}

/// Replace runs of two or more whitespace characters with one space.
fn collapse_whitespace(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_whitespace() {
            let start = i;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            if i - start >= 2 {
                out.push(' ');
            } else {
                out.push(chars[start]);
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn word_ngrams(tokens: &[&str], min_n: usize, max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for n in min_n..=max_n.min(tokens.len()) {
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}

fn char_wb_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let text = collapse_whitespace(text);
    let mut grams = Vec::new();
    for word in text.split_whitespace() {
        let padded: Vec<char> = std::iter::once(' ')
            .chain(word.chars())
            .chain(std::iter::once(' '))
            .collect();
        let len = padded.len();
        for n in min_n..=max_n {
            let mut offset = 0;
            grams.push(padded[offset..(offset + n).min(len)].iter().collect());
            while offset + n < len {
                offset += 1;
                grams.push(padded[offset..offset + n].iter().collect());
            }
            // A word shorter than n is counted once.
            if offset == 0 {
                break;
            }
        }
    }
    grams
}

fn char_ngrams(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    let chars: Vec<char> = collapse_whitespace(text).chars().collect();
    let mut grams = Vec::new();
    for n in min_n..=max_n.min(chars.len()) {
        for window in chars.windows(n) {
            grams.push(window.iter().collect());
        }
    }
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer(analyzer: AnalyzerKind, ngram_range: (usize, usize), vocab: &[&str]) -> TfidfVectorizer {
        TfidfVectorizer::new(VectorizerArtifact {
            analyzer,
            ngram_range,
            vocabulary: vocab.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_word_analyzer() {
        let v = vectorizer(AnalyzerKind::Word, (1, 2), &["slot"]);
        assert_eq!(
            v.analyze("Slot gacor a 88"),
            vec!["slot", "gacor", "88", "slot gacor", "gacor 88"]
        );
    }

    #[test]
    fn test_char_wb_analyzer() {
        let v = vectorizer(AnalyzerKind::CharWb, (2, 3), &["x"]);
        assert_eq!(
            v.analyze("ab c"),
            vec![" a", "ab", "b ", " ab", "ab ", " c", "c ", " c "]
        );
        // A word shorter than n is counted once, then larger n are skipped.
        let v = vectorizer(AnalyzerKind::CharWb, (4, 5), &["x"]);
        assert_eq!(v.analyze("c"), vec![" c "]);
    }

    #[test]
    fn test_char_analyzer() {
        let v = vectorizer(AnalyzerKind::Char, (1, 2), &["x"]);
        assert_eq!(v.analyze("ab  c"), vec!["a", "b", " ", "c", "ab", "b ", " c"]);
    }

    #[test]
    fn test_transform_l2() {
        let v = vectorizer(AnalyzerKind::Word, (1, 1), &["slot", "gacor", "halo"]);
        let x = v.transform("slot slot gacor");
        let norm = (4.0f64 + 1.0).sqrt();
        assert!((x.get(0) - 2.0 / norm).abs() < 1e-12);
        assert!((x.get(1) - 1.0 / norm).abs() < 1e-12);
        assert_eq!(x.get(2), 0.0);
        assert!((x.l2_norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_sublinear_idf_l1() {
        let v = TfidfVectorizer::new(VectorizerArtifact {
            vocabulary: vec!["slot".into(), "gacor".into()],
            idf: Some(vec![2.0, 1.0]),
            sublinear_tf: true,
            norm: Norm::L1,
            ..Default::default()
        })
        .unwrap();
        let x = v.transform("slot slot gacor");
        let slot = (2.0f64.ln() + 1.0) * 2.0;
        let gacor = 1.0;
        assert!((x.get(0) - slot / (slot + gacor)).abs() < 1e-12);
        assert!((x.get(1) - gacor / (slot + gacor)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_unknown_terms() {
        let v = vectorizer(AnalyzerKind::Word, (1, 1), &["slot"]);
        let x = v.transform("halo dunia");
        assert!(x.is_empty());
        assert_eq!(x.dimension(), 1);
    }

    #[test]
    fn test_invalid_artifacts() {
        assert!(TfidfVectorizer::new(VectorizerArtifact::default()).is_err());
        assert!(
            TfidfVectorizer::new(VectorizerArtifact {
                vocabulary: vec!["a".into(), "a".into()],
                ..Default::default()
            })
            .is_err()
        );
        assert!(
            TfidfVectorizer::new(VectorizerArtifact {
                vocabulary: vec!["a".into()],
                idf: Some(vec![1.0, 2.0]),
                ..Default::default()
            })
            .is_err()
        );
        assert!(
            TfidfVectorizer::new(VectorizerArtifact {
                vocabulary: vec!["a".into()],
                ngram_range: (2, 1),
                ..Default::default()
            })
            .is_err()
        );
    }

    #[test]
    fn test_serde_validates() {
        let ok = r#"{"analyzer":"word","vocabulary":["slot","gacor"],"idf":[1.5,1.2]}"#;
        let v: TfidfVectorizer = serde_json::from_str(ok).unwrap();
        assert_eq!(v.column("gacor"), Some(1));

        let bad = r#"{"vocabulary":["slot"],"idf":[1.0,2.0]}"#;
        assert!(serde_json::from_str::<TfidfVectorizer>(bad).is_err());
    }
}
