//! Final reduction to the canonical alphabet.
//!
//! Drops symbol and control characters, transliterates the remaining
//! non-ASCII letters and digits, lowercases, and keeps only `[0-9a-z@!$%]`
//! separated by single spaces.

use unicode_general_category::{GeneralCategory, get_general_category};

use super::CharFilter;

/// Symbols that survive into canonical text.
pub const RETAINED_SYMBOLS: &[char] = &['@', '!', '$', '%'];

/// Whether `ch` may appear in canonical text (space excluded).
pub fn is_canonical_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_ascii_lowercase() || RETAINED_SYMBOLS.contains(&ch)
}

fn is_symbol_or_other(ch: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(ch),
        MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
            | Control
            | Format
            | Surrogate
            | PrivateUse
            | Unassigned
    )
}

/// A char filter producing canonical text from pre-cleaned input.
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldCharFilter;

impl AsciiFoldCharFilter {
    /// Create a new ASCII fold filter.
    pub fn new() -> Self {
        AsciiFoldCharFilter
    }

    /// Drop symbol and control characters, keeping the retained symbols.
    /// Whitespace controls such as newlines become spaces.
    pub fn strip_symbols(input: &str) -> String {
        input
            .chars()
            .filter_map(|ch| {
                if ch.is_whitespace() {
                    Some(' ')
                } else if RETAINED_SYMBOLS.contains(&ch) || !is_symbol_or_other(ch) {
                    Some(ch)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Transliterate non-ASCII letters and digits; anything else, or a
    /// character with no transliteration, is left as is.
    pub fn transliterate(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            if !ch.is_ascii() && ch.is_alphanumeric() {
                match deunicode::deunicode_char(ch) {
                    Some(ascii) => out.push_str(ascii),
                    None => out.push(ch),
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Keep canonical characters, turn everything else into single spaces
    /// and trim.
    pub fn keep_canonical(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut pending_space = false;
        for ch in input.chars() {
            if is_canonical_char(ch) {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            } else {
                pending_space = true;
            }
        }
        out
    }
}

impl CharFilter for AsciiFoldCharFilter {
    fn filter(&self, input: &str) -> String {
        let stripped = Self::strip_symbols(input);
        let ascii = Self::transliterate(&stripped);
        Self::keep_canonical(&ascii.to_lowercase())
    }

    fn name(&self) -> &'static str {
        "ascii_fold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_dropped() {
        assert_eq!(AsciiFoldCharFilter::strip_symbols("slot😀88©"), "slot88");
        assert_eq!(AsciiFoldCharFilter::strip_symbols("ca$h 100%"), "ca$h 100%");
        assert_eq!(AsciiFoldCharFilter::strip_symbols("a\nb\tc"), "a b c");
        assert_eq!(AsciiFoldCharFilter::strip_symbols("a\u{0007}b"), "ab");
    }

    #[test]
    fn test_transliterate() {
        assert_eq!(AsciiFoldCharFilter::transliterate("Straße"), "Strasse");
        assert_eq!(AsciiFoldCharFilter::transliterate("ßlot + x"), "sslot + x");
    }

    #[test]
    fn test_keep_canonical() {
        assert_eq!(AsciiFoldCharFilter::keep_canonical("  a##b  c "), "a b c");
        assert_eq!(AsciiFoldCharFilter::keep_canonical("###"), "");
    }

    #[test]
    fn test_filter() {
        let filter = AsciiFoldCharFilter::new();
        assert_eq!(filter.filter("SLOT  Gacor™ 88"), "slot gacor 88");
        assert_eq!(filter.filter("MAXW!N"), "maxw!n");
        assert_eq!(filter.filter("Ærø"), "aero");
    }
}
