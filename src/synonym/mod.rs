//! Synonym acquisition and storage.
//!
//! This module covers the path from a remote synonym listing to an
//! in-memory lookup table: the record data model, the pluggable
//! [`SynonymSource`] trait, the fail-open paginated [`SynonymLoader`], the
//! flattening [`SynonymDictionaryBuilder`], and the TTL-bound
//! [`SynonymCache`] that shares immutable dictionary snapshots.

pub mod cache;
pub mod dictionary;
pub mod loader;
pub mod record;
pub mod source;

// Re-export commonly used types
pub use cache::SynonymCache;
pub use dictionary::{SynonymDictionary, SynonymDictionaryBuilder};
pub use loader::{DEFAULT_BATCH_SIZE, SynonymLoader};
pub use record::{SynonymPage, SynonymRecord};
pub use source::{InMemorySynonymSource, SynonymSource};
