//! Paginated synonym loading with bounded retries.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::synonym::record::SynonymRecord;
use crate::synonym::source::SynonymSource;

/// Default page size when listing records from a source.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Attempts per page before loading is abandoned.
const MAX_PAGE_ATTEMPTS: u32 = 3;

/// Fetches the full synonym listing for a set of language tags, page by
/// page.
///
/// Loading is fail-open: a failing page is retried in place (no backoff),
/// and a page that exhausts its attempts abandons the run, returning
/// whatever was accumulated so far. An empty result is valid, never an
/// error.
#[derive(Clone)]
pub struct SynonymLoader {
    source: Arc<dyn SynonymSource>,
    batch_size: usize,
}

impl SynonymLoader {
    /// Create a loader over a source with the default batch size.
    pub fn new(source: Arc<dyn SynonymSource>) -> Self {
        SynonymLoader {
            source,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the page size (minimum 1).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Get the configured page size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Whether the underlying source exposes a synonym listing.
    pub fn supports_synonyms(&self) -> bool {
        self.source.supports_synonyms()
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Load every record the source holds for the given language tags.
    ///
    /// A page with fewer hits than the batch size terminates the listing;
    /// so does a page failing [`MAX_PAGE_ATTEMPTS`] times in a row.
    pub fn load(&self, language_tags: &[String]) -> Vec<SynonymRecord> {
        let mut records = Vec::new();
        let mut offset = 0;
        let mut attempts = 0u32;

        loop {
            match self.source.list(self.batch_size, offset, language_tags) {
                Ok(page) => {
                    attempts = 0;
                    let hits = page.hits.len();
                    records.extend(page.hits);
                    debug!(
                        "Fetched {hits} synonym records from {} at offset {offset}",
                        self.source.name()
                    );
                    if hits < self.batch_size {
                        break;
                    }
                    offset += self.batch_size;
                }
                Err(e) => {
                    attempts += 1;
                    if attempts >= MAX_PAGE_ATTEMPTS {
                        warn!(
                            "Abandoning synonym load from {} at offset {offset} after \
                             {attempts} attempts ({e}); keeping {} records",
                            self.source.name(),
                            records.len()
                        );
                        break;
                    }
                    debug!("Retrying synonym page at offset {offset}: {e}");
                }
            }
        }

        records
    }
}

impl fmt::Debug for SynonymLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynonymLoader")
            .field("source", &self.source.name())
            .field("batch_size", &self.batch_size)
            .finish()
    }
}
