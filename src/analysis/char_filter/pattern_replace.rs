//! Regex-based replacement, used for noise removal (URLs, mentions,
//! timestamps, brackets).

use regex::Regex;

use super::CharFilter;
use crate::error::Result;

/// A char filter that replaces every match of a pattern.
///
/// The replacement may reference capture groups (`$1`, `${name}`).
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        })
    }

    /// Set the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// URLs with an explicit scheme or a `www.` prefix.
pub const URL_PATTERN: &str = r"(?i)https?://\S+|www\.\S+";

/// `@handle` not glued to a preceding word character. The leading context is
/// captured and written back, since the regex engine has no look-behind.
pub const MENTION_PATTERN: &str = r"(^|[^A-Za-z0-9_])@[A-Za-z0-9_-]+";

/// Replacement for [`MENTION_PATTERN`].
pub const MENTION_REPLACEMENT: &str = "${1} ";

/// Clock-style timestamps such as `12:30` or `1:02:59`.
pub const TIMESTAMP_PATTERN: &str =
    r"\b(?:[01]?\d|2[0-3])\s*[:：;]\s*[0-5]\d(?:\s*[:：;]\s*[0-5]\d)?\b";

/// ASCII brackets plus CJK and fullwidth corner/lenticular/tortoise forms.
pub const BRACKET_PATTERN: &str = r"[\[\]{}()【】［］〔〕｢｣「」『』〈〉《》（）｛｝]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_urls() {
        let filter = PatternReplaceCharFilter::new(URL_PATTERN, " ").unwrap();
        assert_eq!(
            filter.filter("daftar https://bit.ly/x1 atau www.gacor.id sekarang"),
            "daftar   atau   sekarang"
        );
        assert_eq!(filter.filter("HTTP://X.COM"), " ");
    }

    #[test]
    fn test_mentions_keep_context() {
        let filter = PatternReplaceCharFilter::new(MENTION_PATTERN, MENTION_REPLACEMENT).unwrap();
        assert_eq!(filter.filter("@admin halo"), "  halo");
        assert_eq!(filter.filter("cek @slot_88 ya"), "cek   ya");
        // Glued to a word character: not a mention.
        assert_eq!(filter.filter("m@xwin"), "m@xwin");
    }

    #[test]
    fn test_timestamps() {
        let filter = PatternReplaceCharFilter::new(TIMESTAMP_PATTERN, " ").unwrap();
        assert_eq!(filter.filter("menit 12:30 lucu"), "menit   lucu");
        assert_eq!(filter.filter("1:02:59"), " ");
        assert_eq!(filter.filter("99:99"), "99:99");
    }

    #[test]
    fn test_brackets_removed_without_space() {
        let filter = PatternReplaceCharFilter::new(BRACKET_PATTERN, "").unwrap();
        assert_eq!(filter.filter("slot(gacor)【88】"), "slotgacor88");
    }
}
