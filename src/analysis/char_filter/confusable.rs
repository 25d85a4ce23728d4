//! Accent stripping and homoglyph folding.

use log::warn;
use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

use super::CharFilter;
use super::mapping::MappingCharFilter;
use crate::analysis::lexicon::confusables::HOMOGLYPHS;

/// Decomposes compatibility forms, removes nonspacing marks, recomposes, and
/// then replaces look-alike characters from other scripts with ASCII.
///
/// `"Ƅоnսѕ"` and `"bónus"` both become `"bonus"`.
#[derive(Debug, Clone)]
pub struct ConfusableCharFilter {
    homoglyphs: Option<MappingCharFilter>,
}

impl ConfusableCharFilter {
    /// Create a filter using the built-in homoglyph table.
    pub fn new() -> Self {
        let homoglyphs = match MappingCharFilter::new(HOMOGLYPHS.iter().copied()) {
            Ok(filter) => Some(filter.with_name("homoglyph")),
            Err(e) => {
                warn!("homoglyph table unavailable, folding accents only: {e}");
                None
            }
        };
        Self { homoglyphs }
    }

    /// Strip diacritics without applying the homoglyph table.
    pub fn strip_marks(input: &str) -> String {
        input
            .nfkd()
            .filter(|&ch| get_general_category(ch) != GeneralCategory::NonspacingMark)
            .nfkc()
            .collect()
    }
}

impl Default for ConfusableCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for ConfusableCharFilter {
    fn filter(&self, input: &str) -> String {
        let stripped = Self::strip_marks(input);
        match &self.homoglyphs {
            Some(mapping) => mapping.filter(&stripped),
            None => stripped,
        }
    }

    fn name(&self) -> &'static str {
        "confusable"
    }
}
