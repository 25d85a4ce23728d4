//! Token filters that undo evasion tricks on a token stream.
//!
//! # Available Filters
//!
//! - [`rejoin::LetterRejoinFilter`] - Re-fuses letter-spaced words (`s l o t`)
//! - [`plesetan::PlesetanFilter`] - Substitutions, leetspeak, repeat squeezing
//!   and fuzzy domain correction
//! - [`stop::StopFilter`] - Removes stop words
//!
//! Filters never fail. A filter that cannot improve a token passes it on
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use judol::analysis::token::{IntoTokenStream, Token};
//! use judol::analysis::token_filter::Filter;
//! use judol::analysis::token_filter::rejoin::LetterRejoinFilter;
//!
//! let filter = LetterRejoinFilter::new();
//! let tokens = vec![Token::new("s", 0), Token::new("l", 1), Token::new("o", 2), Token::new("t", 3)];
//! let rejoined: Vec<_> = filter.filter(tokens.into_token_stream()).collect();
//!
//! assert_eq!(rejoined.len(), 1);
//! assert_eq!(rejoined[0].text, "slot");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

pub mod fuzzy;
pub mod plesetan;
pub mod rejoin;
pub mod stop;
