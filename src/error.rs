//! Error types for the synquery library.
//!
//! All errors are represented by the [`SynqueryError`] enum. Fallible
//! operations return the crate-wide [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use synquery::error::{Result, SynqueryError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynqueryError::synonym("source unavailable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for synquery operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the string-payload
/// variants. Pluggable synonym sources written against `anyhow` convert into
/// this type with `?`.
#[derive(Error, Debug)]
pub enum SynqueryError {
    /// Text analysis errors (tokenizer construction, invalid patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Synonym source, loader, or dictionary errors
    #[error("Synonym error: {0}")]
    Synonym(String),

    /// Query construction errors
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors from external collaborators
    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

impl SynqueryError {
    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SynqueryError::Analysis(msg.into())
    }

    /// Create a synonym error.
    pub fn synonym<S: Into<String>>(msg: S) -> Self {
        SynqueryError::Synonym(msg.into())
    }

    /// Create a query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        SynqueryError::Query(msg.into())
    }
}

/// A specialized Result type for synquery operations.
pub type Result<T> = std::result::Result<T, SynqueryError>;
