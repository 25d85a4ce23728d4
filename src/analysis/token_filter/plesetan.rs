//! Plesetan (obfuscated spelling) normalization.
//!
//! Each token goes through, stopping at the first step that settles it:
//!
//! 1. digit-only tokens are kept;
//! 2. known spellings resolve through the substitution table;
//! 3. letter+digit codes (`mona4d`, `88slot`) are kept;
//!
//! and otherwise leet glyphs are mapped, the substitution table consulted,
//! repeats squeezed, the token fuzzily corrected toward the domain lexicon,
//! and the substitution table consulted once more.

use crate::analysis::lexicon::{infix_glyph, leet, substitute};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::fuzzy::FuzzyMatcher;
use crate::config::NormalizerConfig;

/// Whether `token` is letters followed by digits or digits followed by
/// letters, and nothing else.
pub fn is_alnum_code(token: &str) -> bool {
    let bytes = token.as_bytes();
    let Some(first) = bytes.first() else {
        return false;
    };
    let leading_alpha = first.is_ascii_alphabetic();
    let split = bytes
        .iter()
        .position(|b| b.is_ascii_alphabetic() != leading_alpha)
        .unwrap_or(bytes.len());
    let (head, tail) = bytes.split_at(split);

    let head_ok = head
        .iter()
        .all(|b| if leading_alpha { b.is_ascii_alphabetic() } else { b.is_ascii_digit() });
    let tail_ok = !tail.is_empty()
        && tail
            .iter()
            .all(|b| if leading_alpha { b.is_ascii_digit() } else { b.is_ascii_alphabetic() });
    head_ok && tail_ok
}

/// Replace leet glyphs with the letters they stand for.
///
/// Tokens ending in `4d` (lottery codes) are returned as is. Digit runs of
/// two or more are kept; a glyph from [`infix_glyph`] is only mapped between
/// two letters.
pub fn map_leet(token: &str) -> String {
    if token.to_ascii_lowercase().ends_with("4d") {
        return token.to_string();
    }

    let chars: Vec<char> = token.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(token.len());
    let mut i = 0;

    while i < n {
        let ch = chars[i];

        if ch.is_ascii_digit() {
            let mut j = i + 1;
            while j < n && chars[j].is_ascii_digit() {
                j += 1;
            }
            if j - i >= 2 {
                out.extend(&chars[i..j]);
            } else {
                out.push(leet(ch).unwrap_or(ch));
            }
            i = j;
            continue;
        }

        let infix = i > 0
            && i + 1 < n
            && chars[i - 1].is_ascii_alphabetic()
            && chars[i + 1].is_ascii_alphabetic();
        let mapped = match infix_glyph(ch) {
            Some(letter) if infix => letter,
            _ => leet(ch).unwrap_or(ch),
        };
        out.push(mapped);
        i += 1;
    }
    out
}

/// Limit runs of the same character to `max_repeat`. Digit runs are kept.
pub fn squeeze_repeats(token: &str, max_repeat: usize) -> String {
    let mut out = String::with_capacity(token.len());
    let mut prev = None;
    let mut count = 0;
    for ch in token.chars() {
        if prev == Some(ch) {
            count += 1;
            if count <= max_repeat || ch.is_ascii_digit() {
                out.push(ch);
            }
        } else {
            prev = Some(ch);
            count = 1;
            out.push(ch);
        }
    }
    out
}

fn substitute_or(token: String) -> String {
    match substitute(&token) {
        Some(canonical) => canonical.to_string(),
        None => token,
    }
}

/// A filter that resolves obfuscated spellings.
#[derive(Debug)]
pub struct PlesetanFilter {
    max_repeat: usize,
    fuzzy: FuzzyMatcher,
}

impl PlesetanFilter {
    /// Create a filter with the default tunables.
    pub fn new() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }

    /// Create a filter from normalizer configuration.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self {
            max_repeat: config.max_repeat,
            fuzzy: FuzzyMatcher::from_config(config),
        }
    }

    /// The fuzzy matcher used for domain correction.
    pub fn fuzzy(&self) -> &FuzzyMatcher {
        &self.fuzzy
    }

    /// Normalize a single token.
    pub fn normalize_token(&self, token: &str) -> String {
        let token = token.to_lowercase();

        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            return token;
        }
        if let Some(canonical) = substitute(&token) {
            return canonical.to_string();
        }
        if is_alnum_code(&token) {
            return token;
        }

        let token = substitute_or(map_leet(&token));
        let token = squeeze_repeats(&token, self.max_repeat);
        let token = self.fuzzy.correct(&token);
        substitute_or(token)
    }
}

impl Default for PlesetanFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for PlesetanFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let normalized: Vec<Token> = tokens
            .map(|token| token.with_text(self.normalize_token(&token.text)))
            .collect();
        Box::new(normalized.into_iter())
    }

    fn name(&self) -> &'static str {
        "plesetan"
    }
}
