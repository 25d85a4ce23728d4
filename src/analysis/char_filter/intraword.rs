//! Separator and wedged-symbol handling.
//!
//! Runs of hard separators become a single space. Any other symbol run
//! wedged directly between two word characters is deleted, which re-fuses
//! words split with punctuation (`g*a*c*o*r` → `gacor`). Remaining symbol
//! runs become a single space.
//!
//! A lone `!`, `@` or `$` between two letters is left in place for the
//! token normalizer only when the word it sits in reads as a gambling term
//! (`maxw!n`, `m@xwin`, `ca$ino`). Everywhere else it is punctuation, so
//! `mantap!keren` still splits into two words.

use super::CharFilter;
use crate::analysis::lexicon::reads_as_domain_term;

/// Characters that always separate words.
pub const HARD_SEPARATORS: &[char] = &[
    '/', '|', '\\', ':', ';', '~', '_', '.', ',', '-', '!', '(', ')', '[', ']', '{', '}', '<', '>',
    '=', '+', '"', '\'',
];

/// Glyphs that can stand for a letter inside a domain term.
pub const LEET_GLYPHS: &[char] = &['!', '@', '$'];

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// The alphanumeric-and-glyph run around `chars[i]`.
fn glued_word(chars: &[char], i: usize) -> String {
    let glued = |ch: &char| ch.is_alphanumeric() || LEET_GLYPHS.contains(ch);
    let start = chars[..i]
        .iter()
        .rposition(|ch| !glued(ch))
        .map_or(0, |p| p + 1);
    let end = chars[i..]
        .iter()
        .position(|ch| !glued(ch))
        .map_or(chars.len(), |p| i + p);
    chars[start..end].iter().collect()
}

/// A char filter that splits on separators and re-fuses symbol-split words.
#[derive(Clone, Debug)]
pub struct IntrawordSymbolCharFilter {
    protect_leet_glyphs: bool,
}

impl IntrawordSymbolCharFilter {
    /// Create a new filter that keeps leet glyphs inside domain terms.
    pub fn new() -> Self {
        Self {
            protect_leet_glyphs: true,
        }
    }

    /// Whether a lone `!`, `@` or `$` between letters of a domain term is
    /// kept.
    pub fn with_leet_protection(mut self, protect: bool) -> Self {
        self.protect_leet_glyphs = protect;
        self
    }

    fn is_protected(&self, chars: &[char], i: usize) -> bool {
        self.protect_leet_glyphs
            && LEET_GLYPHS.contains(&chars[i])
            && i > 0
            && i + 1 < chars.len()
            && chars[i - 1].is_alphabetic()
            && chars[i + 1].is_alphabetic()
            && reads_as_domain_term(&glued_word(chars, i))
    }

    /// Replace every run of hard separators with one space.
    fn split_separators(&self, chars: &[char]) -> Vec<char> {
        let mut out = Vec::with_capacity(chars.len());
        let mut in_run = false;
        for (i, &ch) in chars.iter().enumerate() {
            if HARD_SEPARATORS.contains(&ch) && !self.is_protected(chars, i) {
                if !in_run {
                    out.push(' ');
                    in_run = true;
                }
            } else {
                out.push(ch);
                in_run = false;
            }
        }
        out
    }

    /// Delete symbol runs between word characters; space out the rest.
    fn fuse_symbols(&self, chars: &[char]) -> String {
        let mut out = String::with_capacity(chars.len());
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            if is_word_char(ch) || ch.is_whitespace() {
                out.push(ch);
                i += 1;
                continue;
            }

            let start = i;
            while i < chars.len() && !is_word_char(chars[i]) && !chars[i].is_whitespace() {
                i += 1;
            }

            let wedged = start > 0
                && i < chars.len()
                && is_word_char(chars[start - 1])
                && is_word_char(chars[i]);
            if wedged {
                if i - start == 1 && self.is_protected(chars, start) {
                    out.push(ch);
                }
            } else if !out.ends_with(char::is_whitespace)
                && chars.get(i).is_none_or(|next| !next.is_whitespace())
            {
                out.push(' ');
            }
        }
        out
    }
}

impl Default for IntrawordSymbolCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for IntrawordSymbolCharFilter {
    fn filter(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let separated = self.split_separators(&chars);
        self.fuse_symbols(&separated).trim().to_string()
    }

    fn name(&self) -> &'static str {
        "intraword_symbol"
    }
}
