//! Raw text to canonical text.
//!
//! The [`Canonicalizer`] chains the char filters in a fixed order:
//!
//! 1. Emoji and enclosed alphanumerics folded to ASCII
//! 2. Accent stripping and homoglyph folding
//! 3. Dash, quote and zero-width normalization
//! 4. Noise removal: URLs, mentions, timestamps, brackets
//! 5. Hard separators and wedged symbols
//! 6. to 9. Symbol stripping, transliteration, lowercasing and reduction to
//!    `[0-9a-z@!$%]` with single spaces
//!
//! Canonicalization is total. A stage that cannot be built is logged and left
//! out of the chain; no stage fails at run time.
//!
//! # Examples
//!
//! ```
//! use judol::analysis::canonicalizer::Canonicalizer;
//!
//! let canonicalizer = Canonicalizer::new();
//! assert_eq!(canonicalizer.canonicalize(Some("Ｓ.Ｌ.Ｏ.Ｔ  ⓖⓐⓒⓞⓡ")), "s l o t gacor");
//! assert_eq!(canonicalizer.canonicalize(None), "");
//! ```

use std::sync::{Arc, LazyLock};

use log::warn;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::ascii_fold::AsciiFoldCharFilter;
use crate::analysis::char_filter::confusable::ConfusableCharFilter;
use crate::analysis::char_filter::emoji::EmojiFoldCharFilter;
use crate::analysis::char_filter::intraword::IntrawordSymbolCharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::{
    BRACKET_PATTERN, MENTION_PATTERN, MENTION_REPLACEMENT, PatternReplaceCharFilter, TIMESTAMP_PATTERN,
    URL_PATTERN,
};
use crate::analysis::lexicon::confusables::{APOSTROPHES, DASHES, INVISIBLES};
use crate::error::Result;

/// An ordered chain of char filters.
#[derive(Clone)]
pub struct Canonicalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Canonicalizer {
    /// Create the standard canonicalization chain.
    pub fn new() -> Self {
        let mut canonicalizer = Self::empty()
            .add_char_filter(Arc::new(EmojiFoldCharFilter::new()))
            .add_char_filter(Arc::new(ConfusableCharFilter::new()));

        canonicalizer.try_add("punctuation", punctuation_filter());
        canonicalizer.try_add(
            "urls",
            PatternReplaceCharFilter::new(URL_PATTERN, " ").map(|f| f.with_name("urls")),
        );
        canonicalizer.try_add(
            "mentions",
            PatternReplaceCharFilter::new(MENTION_PATTERN, MENTION_REPLACEMENT)
                .map(|f| f.with_name("mentions")),
        );
        canonicalizer.try_add(
            "timestamps",
            PatternReplaceCharFilter::new(TIMESTAMP_PATTERN, " ").map(|f| f.with_name("timestamps")),
        );
        canonicalizer.try_add(
            "brackets",
            PatternReplaceCharFilter::new(BRACKET_PATTERN, "").map(|f| f.with_name("brackets")),
        );

        canonicalizer
            .add_char_filter(Arc::new(IntrawordSymbolCharFilter::new()))
            .add_char_filter(Arc::new(AsciiFoldCharFilter::new()))
    }

    /// A chain with no filters. Output is only trimmed.
    pub fn empty() -> Self {
        Self {
            char_filters: Vec::new(),
        }
    }

    /// Append a char filter.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    fn try_add<F: CharFilter + 'static>(&mut self, stage: &str, filter: Result<F>) {
        match filter {
            Ok(filter) => self.char_filters.push(Arc::new(filter)),
            Err(e) => warn!("skipping canonicalization stage {stage}: {e}"),
        }
    }

    /// The char filters in application order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Canonicalize `text`. `None` and empty input give an empty string.
    pub fn canonicalize(&self, text: Option<&str>) -> String {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return String::new();
        };

        let mut filtered = text.to_string();
        for char_filter in &self.char_filters {
            filtered = char_filter.filter(&filtered);
        }
        filtered.trim().to_string()
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn punctuation_filter() -> Result<MappingCharFilter> {
    let pairs = DASHES
        .iter()
        .map(|&d| (d, "-"))
        .chain(APOSTROPHES.iter().map(|&q| (q, "'")))
        .chain(INVISIBLES.iter().map(|&z| (z, "")));
    Ok(MappingCharFilter::new(pairs)?.with_name("punctuation"))
}

static DEFAULT_CANONICALIZER: LazyLock<Canonicalizer> = LazyLock::new(Canonicalizer::new);

/// Canonicalize with the shared standard chain.
pub fn canonicalize(text: &str) -> String {
    DEFAULT_CANONICALIZER.canonicalize(Some(text))
}
