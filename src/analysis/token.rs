//! Token types for text analysis.
//!
//! A [`Token`] is one space-delimited unit of canonical text. Its
//! [`TokenKind`] is recomputed whenever a filter rewrites the text, so the
//! kind always describes the current spelling.
//!
//! # Examples
//!
//! ```
//! use judol::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("gacor", 0);
//! assert_eq!(token.kind, TokenKind::Domain);
//!
//! let token = token.with_text("togel4d");
//! assert_eq!(token.kind, TokenKind::AlnumCode);
//! assert_eq!(token.position, 0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::is_domain_word;

/// What a token looks like after normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A canonical gambling-domain term (`maxwin`, `gacor`, ...).
    Domain,
    /// Digits only.
    Digits,
    /// Letters and digits together, such as a lottery code (`mona4d`).
    AlnumCode,
    /// Anything else.
    Word,
}

impl TokenKind {
    /// Classify a token text.
    pub fn of(text: &str) -> Self {
        if is_domain_word(text) {
            TokenKind::Domain
        } else if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            TokenKind::Digits
        } else if text.chars().any(|c| c.is_ascii_digit())
            && text.chars().any(|c| c.is_ascii_alphabetic())
        {
            TokenKind::AlnumCode
        } else {
            TokenKind::Word
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Domain => "domain",
            TokenKind::Digits => "digits",
            TokenKind::AlnumCode => "alnum_code",
            TokenKind::Word => "word",
        };
        f.write_str(name)
    }
}

/// A single unit of canonical text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text.
    pub text: String,

    /// Position in the token stream (0-based).
    pub position: usize,

    /// Classification of `text`.
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        Token {
            kind: TokenKind::of(&text),
            text,
            position,
        }
    }

    /// A copy of this token with different text, reclassified.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token::new(text, self.position)
    }

    /// A copy of this token at a different position.
    pub fn with_position(&self, position: usize) -> Self {
        Token {
            position,
            ..self.clone()
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Join token texts with single spaces.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
