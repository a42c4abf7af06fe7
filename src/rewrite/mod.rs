//! Query rewriting pipeline.
//!
//! [`QueryRewriter`] is the synonym-aware entry point: it replaces the
//! driving free-text clause of a query with a boolean composition of a
//! residual clause and an expanded clause. [`RelevanceBooster`],
//! [`FuzzyRewriter`], and [`WildcardRewriter`] attach optional precision
//! and recall clauses afterwards.

pub mod fuzzy;
pub mod relevance;
pub mod rewriter;
pub mod wildcard;

// Re-export commonly used types
pub use fuzzy::{FuzzyConfig, FuzzyRewriter};
pub use relevance::{RelevanceBooster, RelevanceConfig, RelevanceField};
pub use rewriter::{
    MAX_QUERIES_FOR_MATCH, QueryRewriter, RewriteResult, RewriteState, RewriterConfig,
};
pub use wildcard::{WildcardConfig, WildcardRewriter};
