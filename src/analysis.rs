//! Text analysis: canonicalization, tokenization and evasion-correcting
//! token filters.
//!
//! The pieces compose into a [`normalizer::TextNormalizer`], which turns a
//! raw comment into the clean text the classifier consumes.

pub mod canonicalizer;
pub mod char_filter;
pub mod lexicon;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
