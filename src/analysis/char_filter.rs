//! Char filter implementations for text canonicalization.
//!
//! Char filters rewrite the raw string before it is split into tokens. The
//! [`Canonicalizer`](crate::analysis::canonicalizer::Canonicalizer) runs them
//! in a fixed order; each one is total and never fails, so the chain as a
//! whole cannot fail either.
//!
//! # Available Filters
//!
//! - [`emoji::EmojiFoldCharFilter`] - Emoji and enclosed alphanumerics to ASCII
//! - [`confusable::ConfusableCharFilter`] - Accent stripping and homoglyph folding
//! - [`mapping::MappingCharFilter`] - Literal string replacement
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`intraword::IntrawordSymbolCharFilter`] - Separator and wedged-symbol handling
//! - [`ascii_fold::AsciiFoldCharFilter`] - Final reduction to the canonical alphabet
//!
//! # Examples
//!
//! ```
//! use judol::analysis::char_filter::CharFilter;
//! use judol::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"-+", " ").unwrap();
//! assert_eq!(filter.filter("slot-gacor"), "slot gacor");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod ascii_fold;
pub mod confusable;
pub mod emoji;
pub mod intraword;
pub mod mapping;
pub mod pattern_replace;
