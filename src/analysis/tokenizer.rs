//! Tokenizers split canonical text into tokens.
//!
//! # Examples
//!
//! ```
//! use judol::analysis::tokenizer::Tokenizer;
//! use judol::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("slot gacor").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

pub mod whitespace;
