//! Literal string mapping, used for the homoglyph and punctuation tables.

use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{JudolError, Result};

/// Replaces every occurrence of a key with its mapped value.
///
/// Overlapping keys resolve to the longest match.
#[derive(Debug, Clone)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
    name: &'static str,
}

impl MappingCharFilter {
    /// Build a filter from `(from, to)` pairs.
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        // Later duplicates win, the same way a map literal behaves.
        pairs.reverse();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs.dedup_by(|a, b| a.0 == b.0);

        let (keys, replacements): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| JudolError::analysis(format!("mapping automaton: {e}")))?;

        Ok(Self {
            ac,
            replacements,
            name: "mapping",
        })
    }

    /// Set the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Whether the mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
