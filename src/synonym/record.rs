//! Synonym record data model.

use serde::{Deserialize, Serialize};

/// One curated synonym mapping as delivered by a synonym source.
///
/// The `phrase` side may hold several comma-separated alternatives that all
/// map to `synonym_phrase`. A bidirectional record also maps the synonym
/// phrase back to each alternative.
///
/// # Examples
///
/// ```
/// use synquery::synonym::SynonymRecord;
///
/// let record = SynonymRecord::new("7, siffran sju", "seven")
///     .with_bidirectional(true)
///     .with_language_tags(vec!["sv".to_string()]);
/// assert!(record.bidirectional);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRecord {
    /// The phrase(s) to match; comma-separated alternatives allowed
    pub phrase: String,
    /// The phrase the alternatives map to
    pub synonym_phrase: String,
    /// Whether the mapping also applies in the reverse direction
    #[serde(default)]
    pub bidirectional: bool,
    /// Language tags the mapping is scoped to; empty means unscoped
    #[serde(default)]
    pub language_tags: Vec<String>,
}

impl SynonymRecord {
    /// Create a unidirectional, unscoped record.
    pub fn new(phrase: impl Into<String>, synonym_phrase: impl Into<String>) -> Self {
        SynonymRecord {
            phrase: phrase.into(),
            synonym_phrase: synonym_phrase.into(),
            bidirectional: false,
            language_tags: Vec::new(),
        }
    }

    /// Set whether the mapping applies in both directions.
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// Set the language tags the mapping is scoped to.
    pub fn with_language_tags(mut self, language_tags: Vec<String>) -> Self {
        self.language_tags = language_tags;
        self
    }
}

/// One page of a synonym listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymPage {
    /// The records on this page
    pub hits: Vec<SynonymRecord>,
}

impl SynonymPage {
    /// Create a page from a batch of records.
    pub fn new(hits: Vec<SynonymRecord>) -> Self {
        SynonymPage { hits }
    }
}
