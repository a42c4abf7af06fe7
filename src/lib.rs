//! # Synquery
//!
//! Synonym-aware query expansion for boolean search queries.
//!
//! ## Features
//!
//! - Query string tokenization with phrase and operator handling
//! - Bidirectional synonym dictionaries built from paginated sources
//! - TTL-based dictionary caching per language-tag set
//! - Phrase expansion into residual and synonym clauses
//! - Relevance boosting over whole-query match variants
//! - Fuzzy and wildcard query variants

pub mod analysis;
pub mod error;
pub mod expand;
pub mod query;
pub mod rewrite;
pub mod synonym;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
