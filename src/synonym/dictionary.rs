//! Synonym dictionary construction and lookup.
//!
//! A [`SynonymDictionaryBuilder`] flattens raw [`SynonymRecord`]s into
//! normalized lookup entries and publishes them as an immutable
//! [`SynonymDictionary`] snapshot. Snapshots are cheap to share behind an
//! `Arc` and are replaced wholesale when the listing is re-fetched; they are
//! never mutated in place.
//!
//! Keys are lowercased and trimmed at build time. Synonym values keep their
//! original casing and insertion order, with exact duplicates skipped, so a
//! fixed snapshot always enumerates synonyms in the same order.

use ahash::AHashMap;

use crate::analysis::contains_multiple_terms;
use crate::synonym::record::SynonymRecord;

/// An immutable phrase-to-synonyms lookup table.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    entries: AHashMap<String, Vec<String>>,
}

impl SynonymDictionary {
    /// Look up the synonyms for a phrase key.
    ///
    /// Keys are stored lowercased; callers lowercase the candidate phrase
    /// before probing.
    pub fn get(&self, phrase: &str) -> Option<&[String]> {
        self.entries.get(phrase).map(|synonyms| synonyms.as_slice())
    }

    /// Whether a phrase key is present.
    pub fn contains_key(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    /// Number of phrase keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates flattened synonym entries and publishes an immutable
/// snapshot.
///
/// The accumulator is private to the builder; readers only ever see the
/// finished [`SynonymDictionary`].
#[derive(Debug, Default)]
pub struct SynonymDictionaryBuilder {
    entries: AHashMap<String, Vec<String>>,
}

impl SynonymDictionaryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten one record into lookup entries.
    ///
    /// The record's phrase may hold several comma-separated alternatives.
    /// Every multi-term key also gets a double-quoted variant so quoted
    /// phrase tokens probe successfully, and a bidirectional record inserts
    /// the reverse mapping under the same rules.
    pub fn add_record(&mut self, record: &SynonymRecord) {
        for alternative in record.phrase.split(',') {
            let alternative = alternative.trim();
            if alternative.is_empty() {
                continue;
            }
            self.add_pair(alternative, &record.synonym_phrase);
            if record.bidirectional {
                self.add_pair(&record.synonym_phrase, alternative);
            }
        }
    }

    /// Insert one phrase-to-synonym entry, plus the quoted variant when the
    /// phrase spans multiple terms.
    pub fn add_pair(&mut self, phrase: &str, synonym: &str) {
        let phrase = phrase.trim();
        let synonym = synonym.trim();
        if phrase.is_empty() || synonym.is_empty() {
            return;
        }
        self.insert(phrase, synonym);
        if contains_multiple_terms(phrase) {
            self.insert(&format!("\"{phrase}\""), synonym);
        }
    }

    fn insert(&mut self, phrase: &str, synonym: &str) {
        let key = phrase.to_lowercase();
        // A key never maps to itself.
        if key == synonym.to_lowercase() {
            return;
        }
        let synonyms = self.entries.entry(key).or_default();
        if !synonyms.iter().any(|existing| existing == synonym) {
            synonyms.push(synonym.to_string());
        }
    }

    /// Publish the accumulated entries as an immutable snapshot.
    pub fn build(self) -> SynonymDictionary {
        SynonymDictionary {
            entries: self.entries,
        }
    }

    /// Build a dictionary straight from a record batch.
    pub fn from_records(records: &[SynonymRecord]) -> SynonymDictionary {
        let mut builder = Self::new();
        for record in records {
            builder.add_record(record);
        }
        builder.build()
    }
}
