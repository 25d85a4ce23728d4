//! Fuzzy correction of digit-infixed tokens toward the domain lexicon.
//!
//! Only tokens with a digit wedged between letters (`m4xw7n`) are
//! considered. Their letters-only core is compared with every domain word in
//! lexicon order and the most similar one wins; earlier words win ties. The
//! correction is applied when the similarity reaches the threshold and the
//! core is anchored to the candidate by its first letter or its last two.

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;

use crate::analysis::lexicon::DOMAIN_WORDS;
use crate::config::{NormalizerConfig, SimilarityMetric};

/// Whether `token` contains a letter, one or more digits, then a letter.
pub fn has_infix_digits(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;
    while i + 2 < bytes.len() {
        if bytes[i].is_ascii_lowercase() && bytes[i + 1].is_ascii_digit() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j < bytes.len() && bytes[j].is_ascii_lowercase() {
                return true;
            }
            i = j;
        } else {
            i += 1;
        }
    }
    false
}

/// Best domain-word match for a letters-only core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainMatch {
    /// The closest domain word, if any scored above zero.
    pub word: Option<&'static str>,
    /// Its similarity to the core.
    pub ratio: f64,
}

/// Fuzzy matcher with a bounded memo of past lookups.
#[derive(Debug)]
pub struct FuzzyMatcher {
    threshold: f64,
    min_core_len: usize,
    metric: SimilarityMetric,
    capacity: usize,
    cache: RwLock<AHashMap<String, DomainMatch>>,
}

impl FuzzyMatcher {
    /// Create a matcher with the default tunables.
    pub fn new() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }

    /// Create a matcher from normalizer configuration.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self {
            threshold: config.fuzzy_threshold,
            min_core_len: config.fuzzy_min_core_len,
            metric: config.similarity,
            capacity: config.fuzzy_cache_capacity,
            cache: RwLock::new(AHashMap::new()),
        }
    }

    /// Scan the lexicon for the word most similar to `core`.
    pub fn best_match(&self, core: &str) -> DomainMatch {
        if let Some(found) = self.cache.read().get(core) {
            return *found;
        }

        let mut best = DomainMatch {
            word: None,
            ratio: 0.0,
        };
        for &candidate in DOMAIN_WORDS {
            let ratio = self.metric.similarity(core, candidate);
            if ratio > best.ratio {
                best = DomainMatch {
                    word: Some(candidate),
                    ratio,
                };
            }
        }

        if self.capacity > 0 {
            let mut cache = self.cache.write();
            if cache.len() >= self.capacity {
                debug!("fuzzy match cache full ({} entries), clearing", cache.len());
                cache.clear();
            }
            cache.insert(core.to_string(), best);
        }
        best
    }

    /// Correct `token` to a domain word, or return it unchanged.
    pub fn correct(&self, token: &str) -> String {
        let lowered = token.to_ascii_lowercase();
        if !has_infix_digits(&lowered) {
            return token.to_string();
        }

        let core: String = lowered.chars().filter(|c| c.is_ascii_lowercase()).collect();
        if core.len() < self.min_core_len {
            return token.to_string();
        }

        let found = self.best_match(&core);
        if let Some(word) = found.word
            && found.ratio >= self.threshold
            && (core.as_bytes()[0] == word.as_bytes()[0] || core.ends_with(last_two(word)))
        {
            return word.to_string();
        }
        token.to_string()
    }

    /// Number of memoized cores.
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn last_two(word: &str) -> &str {
    &word[word.len().saturating_sub(2)..]
}
