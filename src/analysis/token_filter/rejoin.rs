//! Letter-rejoining filter.
//!
//! Spam is often spaced out one letter at a time (`s l o t 8 8`). A run of
//! single-letter tokens that spells something pronounceable is merged back
//! into one word, taking a directly following digit run along as a suffix
//! (`slot88`). Runs of standalone digit tokens are merged as well (`8 8 8`
//! becomes `888`).

use crate::analysis::lexicon::is_vowel;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

fn is_single_letter(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// A filter that merges letter-spaced words and split digit runs.
#[derive(Clone, Debug)]
pub struct LetterRejoinFilter {
    min_len: usize,
    max_len: usize,
}

impl LetterRejoinFilter {
    /// Create a filter accepting merged words of 3 to 24 characters.
    pub fn new() -> Self {
        Self::with_window(3, 24)
    }

    /// Create a filter with a custom length window. `min_len` is also the
    /// shortest letter run considered for merging.
    pub fn with_window(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    /// Rejoin a list of token texts.
    pub fn rejoin<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let n = tokens.len();
        let mut out = Vec::with_capacity(n);
        let mut i = 0;

        while i < n {
            let mut j = i;
            while j < n && is_single_letter(tokens[j].as_ref()) {
                j += 1;
            }

            if j - i >= self.min_len {
                let mut word: String = tokens[i..j]
                    .iter()
                    .map(|t| t.as_ref().to_ascii_lowercase())
                    .collect();
                let mut k = j;
                while k < n && is_digits(tokens[k].as_ref()) {
                    word.push_str(tokens[k].as_ref());
                    k += 1;
                }

                let len = word.len();
                if word.chars().any(is_vowel) && (self.min_len..=self.max_len).contains(&len) {
                    out.push(word);
                    i = k;
                    continue;
                }
            }

            if is_digits(tokens[i].as_ref()) {
                let mut k = i;
                let mut digits = String::new();
                while k < n && is_digits(tokens[k].as_ref()) {
                    digits.push_str(tokens[k].as_ref());
                    k += 1;
                }
                out.push(digits);
                i = k;
                continue;
            }

            out.push(tokens[i].as_ref().to_string());
            i += 1;
        }
        out
    }
}

impl Default for LetterRejoinFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LetterRejoinFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let texts: Vec<String> = tokens.map(|t| t.text).collect();
        let rejoined: Vec<Token> = self
            .rejoin(&texts)
            .into_iter()
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect();
        Box::new(rejoined.into_iter())
    }

    fn name(&self) -> &'static str {
        "letter_rejoin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(text: &str) -> String {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        LetterRejoinFilter::new().rejoin(&tokens).join(" ")
    }

    #[test]
    fn test_letter_run_merged() {
        assert_eq!(rejoin("s l o t gacor"), "slot gacor");
        assert_eq!(rejoin("main g a c o r yuk"), "main gacor yuk");
    }

    #[test]
    fn test_digit_suffix_absorbed() {
        assert_eq!(rejoin("s l o t 8 8"), "slot88");
        assert_eq!(rejoin("s l o t 88 7 x"), "slot887 x");
    }

    #[test]
    fn test_short_or_vowelless_runs_left_split() {
        assert_eq!(rejoin("a b"), "a b");
        assert_eq!(rejoin("x y z"), "x y z");
        assert_eq!(rejoin("w d 1"), "w d 1");
    }

    #[test]
    fn test_standalone_digits_merged() {
        assert_eq!(rejoin("deposit 1 0 0 rb"), "deposit 100 rb");
        assert_eq!(rejoin("7 77"), "777");
    }

    #[test]
    fn test_length_window() {
        let long: Vec<String> = "abcdefghijklmnopqrstuvwxyz"
            .chars()
            .map(String::from)
            .collect();
        let out = LetterRejoinFilter::new().rejoin(&long);
        // 26 letters exceed the window; the first is left alone and the
        // remaining 25 are retried from the next letter onwards.
        assert_eq!(out[0], "a");
        assert_eq!(out[1], "b");
        assert_eq!(out[2], "cdefghijklmnopqrstuvwxyz");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_custom_window() {
        let filter = LetterRejoinFilter::with_window(4, 5);
        assert_eq!(filter.rejoin(&["s", "l", "o", "t"]), vec!["slot"]);
        assert_eq!(filter.rejoin(&["b", "e", "t"]), vec!["b", "e", "t"]);
    }

    #[test]
    fn test_positions_renumbered() {
        let tokens = vec![
            Token::new("g", 0),
            Token::new("a", 1),
            Token::new("c", 2),
            Token::new("o", 3),
            Token::new("r", 4),
            Token::new("88", 5),
            Token::new("yuk", 6),
        ];
        let out: Vec<Token> = LetterRejoinFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .collect();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "gacor88");
        assert_eq!(out[1].text, "yuk");
        assert_eq!(out[1].position, 1);
    }
}
