//! Combinatorial phrase expansion.
//!
//! Home of [`PhraseExpander`], which walks every contiguous token
//! sub-sequence of a query, probes the synonym dictionary, and produces the
//! residual query, the expanded OR-group fragments, and the whole-query
//! match variants.

pub mod expander;

// Re-export commonly used types
pub use expander::{ExpansionResult, MAX_SYNONYM_LOOKUPS, PhraseExpander};
