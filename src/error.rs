//! Error types for schemalens.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SchemaLensError`] enum. "Nothing to correct" and "no relevant table" are
//! ordinary results and never surface here; errors are reserved for input that
//! is structurally invalid (a malformed schema document, a bad configuration,
//! an unreadable file).
//!
//! # Examples
//!
//! ```
//! use schemalens::error::{SchemaLensError, Result};
//!
//! fn check_threshold(threshold: f64) -> Result<f64> {
//!     if !threshold.is_finite() {
//!         return Err(SchemaLensError::invalid_argument("threshold must be finite"));
//!     }
//!     Ok(threshold)
//! }
//!
//! assert!(check_threshold(0.1).is_ok());
//! assert!(check_threshold(f64::NAN).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for schemalens operations.
#[derive(Error, Debug)]
pub enum SchemaLensError {
    /// I/O errors (reading schema or config files, terminal interaction)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Schema documents that do not have the expected shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SchemaLensError.
pub type Result<T> = std::result::Result<T, SchemaLensError>;

impl SchemaLensError {
    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        SchemaLensError::Schema(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SchemaLensError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SchemaLensError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SchemaLensError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SchemaLensError::Config(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SchemaLensError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
