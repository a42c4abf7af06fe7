//! Query tokenization.
//!
//! Splits a raw query string into bare words and double-quoted phrases.
//! Backslash escapes are stripped, whitespace runs are collapsed, bare
//! `AND`/`OR` operator tokens are discarded, and the sequence is capped at
//! [`MAX_QUERY_TERMS`] tokens. Tokenization is deterministic and never fails
//! on malformed input.
//!
//! # Examples
//!
//! ```
//! use synquery::analysis::QueryTokenizer;
//!
//! let tokenizer = QueryTokenizer::default();
//! let tokens = tokenizer.tokenize(r#"find "machine learning" AND cats"#);
//! assert_eq!(tokens, vec!["find", "\"machine learning\"", "cats"]);
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SynqueryError};

/// Maximum number of tokens produced for a single query.
pub const MAX_QUERY_TERMS: usize = 50;

/// Default token pattern: a double-quoted phrase (word characters,
/// whitespace, apostrophes, and hyphens inside the quotes) or a bare run of
/// word characters and hyphens. `\w` is Unicode-aware, so digits and
/// diacritics are covered.
const DEFAULT_TOKEN_PATTERN: &str = r#""[\w\s'’-]+"|[\w-]+"#;

lazy_static! {
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
}

/// A regex-based query tokenizer.
///
/// Unlike an indexing tokenizer this one preserves double-quoted phrases as
/// single tokens (quotes included) so that exact-phrase synonym keys can be
/// probed later.
#[derive(Clone, Debug)]
pub struct QueryTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl QueryTokenizer {
    /// Create a new query tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a new query tokenizer with a custom token pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SynqueryError::analysis(format!("Invalid token pattern: {e}")))?;

        Ok(QueryTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize a raw query string.
    ///
    /// Returns at most [`MAX_QUERY_TERMS`] tokens in input order. Empty or
    /// whitespace-only input yields an empty vector.
    pub fn tokenize(&self, query: &str) -> Vec<String> {
        let unescaped = query.replace('\\', "");
        let collapsed = WHITESPACE_RUN.replace_all(&unescaped, " ");
        let trimmed = collapsed.trim();

        self.pattern
            .find_iter(trimmed)
            .map(|m| m.as_str())
            .filter(|token| *token != "AND" && *token != "OR")
            .take(MAX_QUERY_TERMS)
            .map(|token| token.to_string())
            .collect()
    }
}

impl Default for QueryTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}
