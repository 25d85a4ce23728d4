//! Stop filter implementation.
//!
//! Removes common function words that carry no signal for the classifier.
//! The default list is Indonesian, the language of the comments this crate
//! is built for.
//!
//! # Examples
//!
//! ```
//! use judol::analysis::token::{IntoTokenStream, Token};
//! use judol::analysis::token_filter::Filter;
//! use judol::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("yang", 0), Token::new("gacor", 1), Token::new("di", 2)];
//! let result: Vec<_> = filter.filter(tokens.into_token_stream()).collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "gacor");
//! assert_eq!(result[0].position, 0);
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::lexicon::stopwords::INDONESIAN_STOP_WORDS;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// A filter that removes stop words from the token stream.
///
/// Matching is case-insensitive. Surviving tokens are renumbered.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove, lowercased.
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the Indonesian stop words.
    pub fn new() -> Self {
        Self::from_words(INDONESIAN_STOP_WORDS.iter().copied())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words.into_iter().map(|w| w.to_lowercase()).collect()),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
