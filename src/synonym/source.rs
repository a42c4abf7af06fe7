//! Pluggable synonym sources.

use crate::error::Result;
use crate::synonym::record::{SynonymPage, SynonymRecord};

/// A paginated source of synonym records.
///
/// Implementations wrap whatever service holds the curated mappings: an
/// admin index, a REST endpoint, or a fixture in tests. Errors are surfaced
/// per page; [`SynonymLoader`](crate::synonym::SynonymLoader) turns them
/// into fail-open partial results.
pub trait SynonymSource: Send + Sync {
    /// Fetch one page of records matching the given language tags.
    ///
    /// `offset` is the absolute record offset of the page; a page with fewer
    /// than `batch_size` hits (including zero) is the last one.
    fn list(
        &self,
        batch_size: usize,
        offset: usize,
        language_tags: &[String],
    ) -> Result<SynonymPage>;

    /// Whether the backing service exposes a synonym listing at all.
    fn supports_synonyms(&self) -> bool {
        true
    }

    /// Get the name of this source.
    fn name(&self) -> &'static str;
}

/// A source backed by an in-memory record list.
///
/// Useful for tests and for deployments whose synonym list ships with the
/// application. Records are filtered by language tag: a record with no tags
/// matches any request, and an empty request matches every record.
#[derive(Debug, Clone, Default)]
pub struct InMemorySynonymSource {
    records: Vec<SynonymRecord>,
}

impl InMemorySynonymSource {
    /// Create a source over a fixed record list.
    pub fn new(records: Vec<SynonymRecord>) -> Self {
        InMemorySynonymSource { records }
    }

    fn matches(record: &SynonymRecord, language_tags: &[String]) -> bool {
        if language_tags.is_empty() || record.language_tags.is_empty() {
            return true;
        }
        record
            .language_tags
            .iter()
            .any(|tag| language_tags.contains(tag))
    }
}

impl SynonymSource for InMemorySynonymSource {
    fn list(
        &self,
        batch_size: usize,
        offset: usize,
        language_tags: &[String],
    ) -> Result<SynonymPage> {
        let hits = self
            .records
            .iter()
            .filter(|record| Self::matches(record, language_tags))
            .skip(offset)
            .take(batch_size)
            .cloned()
            .collect();
        Ok(SynonymPage::new(hits))
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(phrase: &str, synonym: &str, tags: &[&str]) -> SynonymRecord {
        SynonymRecord::new(phrase, synonym)
            .with_language_tags(tags.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_in_memory_pagination() {
        let source = InMemorySynonymSource::new(vec![
            SynonymRecord::new("1", "one"),
            SynonymRecord::new("2", "two"),
            SynonymRecord::new("3", "three"),
        ]);

        let page = source.list(2, 0, &[]).unwrap();
        assert_eq!(page.hits.len(), 2);
        let page = source.list(2, 2, &[]).unwrap();
        assert_eq!(page.hits.len(), 1);
        assert_eq!(page.hits[0].phrase, "3");
        let page = source.list(2, 4, &[]).unwrap();
        assert!(page.hits.is_empty());
    }

    #[test]
    fn test_in_memory_language_filter() {
        let source = InMemorySynonymSource::new(vec![
            tagged("7", "seven", &["en"]),
            tagged("7", "sju", &["sv"]),
            SynonymRecord::new("ml", "machine learning"),
        ]);

        let en = vec!["en".to_string()];
        let page = source.list(10, 0, &en).unwrap();
        let phrases: Vec<_> = page.hits.iter().map(|r| r.synonym_phrase.as_str()).collect();
        // Untagged records match any request.
        assert_eq!(phrases, vec!["seven", "machine learning"]);

        let page = source.list(10, 0, &[]).unwrap();
        assert_eq!(page.hits.len(), 3);
    }

    #[test]
    fn test_source_name_and_support() {
        let source = InMemorySynonymSource::default();
        assert_eq!(source.name(), "in_memory");
        assert!(source.supports_synonyms());
    }
}
