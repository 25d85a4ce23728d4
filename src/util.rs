//! Shared utility modules.

pub mod levenshtein;
pub mod similarity;
