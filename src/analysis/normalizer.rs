//! The full text normalization pipeline.
//!
//! [`TextNormalizer`] runs the [`Canonicalizer`], splits the canonical text
//! with a tokenizer and passes the tokens through the token filters:
//!
//! ```text
//! raw text -> char filters -> whitespace tokenizer
//!          -> letter rejoin -> plesetan -> (stop words) -> clean text
//! ```
//!
//! # Examples
//!
//! ```
//! use judol::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new();
//! assert_eq!(normalizer.normalize("MAXW!N GACOOR!!"), "maxwin gacor");
//! assert_eq!(normalizer.normalize("s l o t 8 8 g4c0r"), "slot88 gacor");
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::canonicalizer::Canonicalizer;
use crate::analysis::token::{Token, join_tokens};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::plesetan::PlesetanFilter;
use crate::analysis::token_filter::rejoin::LetterRejoinFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::config::NormalizerConfig;

/// Canonicalizer, tokenizer and token filters chained together.
#[derive(Clone)]
pub struct TextNormalizer {
    canonicalizer: Canonicalizer,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl TextNormalizer {
    /// Create the standard pipeline with default tunables.
    pub fn new() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }

    /// Create the standard pipeline from configuration.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        let mut normalizer = Self::with_tokenizer(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LetterRejoinFilter::with_window(
                config.rejoin_min_len,
                config.rejoin_max_len,
            )))
            .add_filter(Arc::new(PlesetanFilter::from_config(config)));
        if config.remove_stopwords {
            normalizer = normalizer.add_filter(Arc::new(StopFilter::new()));
        }
        normalizer
    }

    /// A pipeline with the standard canonicalizer, the given tokenizer and
    /// no token filters.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            canonicalizer: Canonicalizer::new(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a token filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Replace the canonicalizer.
    pub fn with_canonicalizer(mut self, canonicalizer: Canonicalizer) -> Self {
        self.canonicalizer = canonicalizer;
        self
    }

    /// Get the token filters used by this pipeline.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Canonicalize raw text without tokenizing it.
    pub fn canonicalize(&self, raw: &str) -> String {
        self.canonicalizer.canonicalize(Some(raw))
    }

    /// Tokenize and normalize text that is already canonical.
    pub fn analyze_canonical(&self, canonical: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(canonical);
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }
        tokens.filter(|t| !t.is_empty()).collect()
    }

    /// Raw text to normalized tokens.
    pub fn analyze(&self, raw: &str) -> Vec<Token> {
        self.analyze_canonical(&self.canonicalize(raw))
    }

    /// Raw text to the clean text consumed by the classifier.
    pub fn normalize(&self, raw: &str) -> String {
        join_tokens(&self.analyze(raw))
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_NORMALIZER: LazyLock<TextNormalizer> = LazyLock::new(TextNormalizer::new);

/// Normalize raw text with the shared default pipeline.
pub fn normalize(raw: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenKind;

    #[test]
    fn test_leet_glyph_words() {
        let normalizer = TextNormalizer::new();
        let clean = normalizer.normalize("MAXW!N GACOOR!!");
        let tokens: Vec<&str> = clean.split(' ').collect();
        assert!(tokens.contains(&"maxwin"));
        assert!(tokens.contains(&"gacor"));
    }

    #[test]
    fn test_spaced_and_leet() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("S L O T  g@cor 8 8 8"), "slot gacor 888");
        assert_eq!(normalizer.normalize("m4ksvin hari ini"), "maxwin hari ini");
    }

    #[test]
    fn test_token_kinds() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.analyze("gacor 777 mona4d halo");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Domain,
                TokenKind::Digits,
                TokenKind::AlnumCode,
                TokenKind::Word
            ]
        );
    }

    #[test]
    fn test_empty() {
        let normalizer = TextNormalizer::new();
        assert!(normalizer.analyze("").is_empty());
        assert_eq!(normalizer.normalize("🎰🎰 !!"), "");
    }

    #[test]
    fn test_stopwords_optional() {
        let text = "slot yang gacor";
        assert_eq!(TextNormalizer::new().normalize(text), "slot yang gacor");

        let config = NormalizerConfig {
            remove_stopwords: true,
            ..Default::default()
        };
        assert_eq!(TextNormalizer::from_config(&config).normalize(text), "slot gacor");
    }

    #[test]
    fn test_stable_on_own_output() {
        let normalizer = TextNormalizer::new();
        for raw in ["MAXW!N GACOOR!!", "s l o t 8 8", "Ｄｅｐｏ 50rb bonus 100%"] {
            let once = normalizer.normalize(raw);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_shared_normalize() {
        assert_eq!(normalize("h0kiii"), "hoki");
    }
}
