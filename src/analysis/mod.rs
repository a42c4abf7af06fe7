//! Text analysis for query expansion.
//!
//! This module turns a raw query string into the token sequence the
//! expansion engine operates on, and provides the small text predicates the
//! rest of the pipeline shares (quote/parenthesis detection, multi-term
//! checks, query escaping).

pub mod text;
pub mod tokenizer;

// Re-export commonly used types
pub use text::{contains_multiple_terms, escape_query, is_parenthesized, is_quoted};
pub use tokenizer::{MAX_QUERY_TERMS, QueryTokenizer};
