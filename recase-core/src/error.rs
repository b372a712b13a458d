//! Error types for the recase pipeline

use thiserror::Error;

/// recase error types
#[derive(Debug, Error)]
pub enum RecaseError {
    /// No explicit input format was given and the filename extension is
    /// unrecognized or absent.
    #[error("Unsupported input format, must be yaml or json")]
    UnsupportedFormat,
    /// Input is a stream and no explicit input format was given; a stream
    /// has no filename to sniff.
    #[error("No input format was specified")]
    MissingInputFormat,
    /// Neither an input file nor an input stream was supplied.
    #[error("No input stream is specified")]
    MissingInput,
    /// Neither an output file nor an output stream was supplied.
    #[error("No output stream is specified")]
    MissingOutput,
    /// Transformation name is not one of the recognized operations.
    #[error("Unknown transformation: {0}")]
    UnknownTransformation(String),
    /// Document element cannot be case-folded because it is not a string.
    #[error("Type mismatch: element {index} is not a string")]
    TypeMismatch {
        /// Zero-based position of the offending element.
        index: usize,
    },
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RecaseError>;
