//! Most frequent terms across a set of texts.
//!
//! Texts are cut into runs of ASCII letters and digits (case-insensitive),
//! terms are counted over the whole set, and ranked by count with ties
//! broken by first appearance.
//!
//! ```
//! use judol::keywords::top_keywords;
//!
//! let texts = ["slot gacor", "Gacor maxwin", "slot gacor 88"];
//! let top = top_keywords(&texts, 2);
//! assert_eq!(top, vec![("gacor".to_string(), 3), ("slot".to_string(), 2)]);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Counts terms across texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordAggregator {
    /// Terms shorter than this (in bytes) are ignored.
    pub min_len: usize,
}

impl Default for KeywordAggregator {
    fn default() -> Self {
        Self { min_len: 1 }
    }
}

impl KeywordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_len(min_len: usize) -> Self {
        Self { min_len }
    }

    /// The terms of one text, lowercased, in order of appearance.
    pub fn terms<'a>(&self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        let min_len = self.min_len;
        text.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(move |term| !term.is_empty() && term.len() >= min_len)
            .map(|term| term.to_ascii_lowercase())
    }

    /// The `n` most frequent terms with their counts.
    pub fn top<I, S>(&self, texts: I, n: usize) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // term -> (count, first seen)
        let mut counts: AHashMap<String, (usize, usize)> = AHashMap::new();
        let mut seen = 0;
        for text in texts {
            for term in self.terms(text.as_ref()) {
                let entry = counts.entry(term).or_insert_with(|| {
                    seen += 1;
                    (0, seen)
                });
                entry.0 += 1;
            }
        }

        let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
        ranked
            .into_iter()
            .take(n)
            .map(|(term, (count, _))| (term, count))
            .collect()
    }
}

/// The `n` most frequent terms of `texts`, counting every term.
pub fn top_keywords<I, S>(texts: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    KeywordAggregator::default().top(texts, n)
}
