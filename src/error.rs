//! Error types for the judol library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`JudolError`] enum. Text normalization never fails; the only errors a
//! caller normally sees come from loading the classifier artifact or from
//! reading configuration.
//!
//! # Examples
//!
//! ```
//! use judol::error::{JudolError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JudolError::invalid_config("decision_threshold must be within [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for judol operations.
#[derive(Error, Debug)]
pub enum JudolError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The classifier artifact could not be loaded. Not recoverable for the
    /// current call; classification cannot proceed without a model.
    #[error("Model unavailable ({}): {reason}", path.display())]
    ModelUnavailable { path: PathBuf, reason: String },

    /// The artifact was read but its stages are inconsistent.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Analysis-related errors (automaton or pattern construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explanation could not be computed from the pipeline stages.
    #[error("Explanation error: {0}")]
    Explanation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary artifact decoding errors
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Regex compilation errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with JudolError.
pub type Result<T> = std::result::Result<T, JudolError>;

impl JudolError {
    /// Create a new model-unavailable error.
    pub fn model_unavailable<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        JudolError::ModelUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid model error.
    pub fn invalid_model<S: Into<String>>(msg: S) -> Self {
        JudolError::InvalidModel(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JudolError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        JudolError::InvalidConfig(msg.into())
    }

    /// Create a new explanation error.
    pub fn explanation<S: Into<String>>(msg: S) -> Self {
        JudolError::Explanation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JudolError::Other(msg.into())
    }

    /// Whether this error means the classifier could not be loaded.
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, JudolError::ModelUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = JudolError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = JudolError::invalid_model("no linear stage");
        assert_eq!(error.to_string(), "Invalid model: no linear stage");

        let error = JudolError::invalid_config("bad threshold");
        assert_eq!(error.to_string(), "Invalid configuration: bad threshold");
    }

    #[test]
    fn test_model_unavailable_display() {
        let error = JudolError::model_unavailable("model/x.json", "file not found");
        assert!(error.is_model_unavailable());
        assert_eq!(
            error.to_string(),
            "Model unavailable (model/x.json): file not found"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let judol_error = JudolError::from(io_error);

        match judol_error {
            JudolError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
        assert!(!JudolError::other("x").is_model_unavailable());
    }

    #[test]
    fn test_decode_error_conversions() {
        let json_error = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        assert!(matches!(JudolError::from(json_error), JudolError::Json(_)));

        let regex_error = regex::Regex::new("(").unwrap_err();
        assert!(matches!(JudolError::from(regex_error), JudolError::Regex(_)));
    }
}
