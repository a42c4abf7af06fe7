//! Integration tests for the synonym load, cache, and rewrite pipeline

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use synquery::error::{Result, SynqueryError};
use synquery::query::{BooleanOperator, Occur, QueryNode, QueryStringQuery};
use synquery::rewrite::{QueryRewriter, RewriteState};
use synquery::synonym::{
    InMemorySynonymSource, SynonymCache, SynonymLoader, SynonymPage, SynonymRecord, SynonymSource,
};

/// Counts listing calls so cache behavior is observable from the outside.
struct CountingSource {
    inner: InMemorySynonymSource,
    calls: AtomicUsize,
}

impl CountingSource {
    fn new(records: Vec<SynonymRecord>) -> Self {
        CountingSource {
            inner: InMemorySynonymSource::new(records),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SynonymSource for CountingSource {
    fn list(
        &self,
        batch_size: usize,
        offset: usize,
        language_tags: &[String],
    ) -> Result<SynonymPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list(batch_size, offset, language_tags)
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// Fails the first `failures_left` listing calls, then delegates.
struct FlakySource {
    inner: InMemorySynonymSource,
    failures_left: Mutex<u32>,
}

impl FlakySource {
    fn new(records: Vec<SynonymRecord>, failures: u32) -> Self {
        FlakySource {
            inner: InMemorySynonymSource::new(records),
            failures_left: Mutex::new(failures),
        }
    }
}

impl SynonymSource for FlakySource {
    fn list(
        &self,
        batch_size: usize,
        offset: usize,
        language_tags: &[String],
    ) -> Result<SynonymPage> {
        let mut left = self.failures_left.lock();
        if *left > 0 {
            *left -= 1;
            return Err(SynqueryError::synonym("synonym backend unavailable"));
        }
        drop(left);
        self.inner.list(batch_size, offset, language_tags)
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

fn sample_records() -> Vec<SynonymRecord> {
    vec![
        SynonymRecord::new("7", "seven"),
        SynonymRecord::new("7", "sju"),
        SynonymRecord::new("machine learning", "ml").with_bidirectional(true),
    ]
}

#[test]
fn test_rewrite_pipeline_end_to_end() {
    let source = Arc::new(InMemorySynonymSource::new(sample_records()));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source), SynonymCache::new());

    let input = QueryStringQuery::new("find 7 cats")
        .with_analyzer("english")
        .with_fields(vec!["title".to_string(), "body".to_string()])
        .with_phrase_slop(1);
    let result = rewriter.rewrite(input.into(), &[]);
    assert_eq!(result.state, RewriteState::Rewritten);

    let bool_query = result.query.as_bool().unwrap();
    let shoulds = bool_query.clauses_by_occur(Occur::Should);
    assert_eq!(shoulds.len(), 2);

    // The residual clause keeps the unmatched terms and the match variants.
    let residual = shoulds[0].query.as_query_string().unwrap();
    assert_eq!(residual.query, "find cats");
    assert_eq!(residual.raw_query.as_deref(), Some("find 7 cats"));
    assert_eq!(residual.analyzer.as_deref(), Some("english"));
    assert_eq!(residual.fields, vec!["title".to_string(), "body".to_string()]);
    assert_eq!(residual.phrase_slop, Some(1));
    assert_eq!(residual.minimum_should_match.as_deref(), Some("1"));
    assert!(residual.auto_generate_phrase_queries);
    assert_eq!(
        residual.queries_for_match.as_deref(),
        Some(
            &[
                "find 7 cats".to_string(),
                "find seven cats".to_string(),
                "find sju cats".to_string(),
            ][..]
        )
    );

    // The expanded clause matches original or synonym with one required group.
    let expanded = shoulds[1].query.as_query_string().unwrap();
    assert_eq!(expanded.query, "(7) (seven OR sju)");
    assert_eq!(expanded.analyzer.as_deref(), Some("english"));
    assert_eq!(expanded.minimum_should_match.as_deref(), Some("1"));
    assert!(expanded.queries_for_match.is_none());
}

#[test]
fn test_multi_term_key_expands_whole_query() {
    let source = Arc::new(InMemorySynonymSource::new(sample_records()));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source), SynonymCache::new());

    let result = rewriter.rewrite(QueryStringQuery::new("Machine Learning").into(), &[]);
    assert_eq!(result.state, RewriteState::Rewritten);

    let bool_query = result.query.as_bool().unwrap();
    let shoulds = bool_query.clauses_by_occur(Occur::Should);
    // Both terms matched, so no residual clause is attached.
    assert_eq!(shoulds.len(), 1);
    assert_eq!(
        shoulds[0].query.as_query_string().unwrap().query,
        "((Machine AND Learning)) (ml)"
    );

    // The reverse direction resolves through the bidirectional entry.
    let source = Arc::new(InMemorySynonymSource::new(sample_records()));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source), SynonymCache::new());
    let result = rewriter.rewrite(QueryStringQuery::new("ml").into(), &[]);
    let bool_query = result.query.as_bool().unwrap();
    let shoulds = bool_query.clauses_by_occur(Occur::Should);
    assert_eq!(
        shoulds[0].query.as_query_string().unwrap().query,
        "(ml) ((machine AND learning))"
    );
}

#[test]
fn test_dictionary_load_is_cached_across_rewrites() {
    let source = Arc::new(CountingSource::new(sample_records()));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source.clone()), SynonymCache::new());

    for _ in 0..5 {
        let result = rewriter.rewrite(QueryStringQuery::new("find 7").into(), &[]);
        assert_eq!(result.state, RewriteState::Rewritten);
    }

    // One short page serves every rewrite within the TTL.
    assert_eq!(source.calls(), 1);
}

#[test]
fn test_cache_keys_ignore_language_tag_order() {
    let source = Arc::new(CountingSource::new(sample_records()));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source.clone()), SynonymCache::new());

    let tags_a = ["sv".to_string(), "en".to_string()];
    let tags_b = ["en".to_string(), "sv".to_string()];
    rewriter.rewrite(QueryStringQuery::new("find 7").into(), &tags_a);
    rewriter.rewrite(QueryStringQuery::new("find 7").into(), &tags_b);
    assert_eq!(source.calls(), 1, "reordered tags should share a dictionary");

    rewriter.rewrite(QueryStringQuery::new("find 7").into(), &["en".to_string()]);
    assert_eq!(source.calls(), 2, "a different tag set loads separately");
}

#[test]
fn test_language_tags_filter_synonyms() {
    let records = vec![
        SynonymRecord::new("7", "sju").with_language_tags(vec!["sv".to_string()]),
        SynonymRecord::new("7", "seven").with_language_tags(vec!["en".to_string()]),
        SynonymRecord::new("7", "vii"),
    ];
    let source = Arc::new(InMemorySynonymSource::new(records));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source), SynonymCache::new());

    let result = rewriter.rewrite(QueryStringQuery::new("find 7").into(), &["en".to_string()]);
    let bool_query = result.query.as_bool().unwrap();
    let shoulds = bool_query.clauses_by_occur(Occur::Should);
    // The Swedish synonym is filtered out; the untagged one applies everywhere.
    assert_eq!(
        shoulds[1].query.as_query_string().unwrap().query,
        "(7) (seven OR vii)"
    );
}

#[test]
fn test_transient_failures_retry_within_page() {
    // Two failures, then the page loads; the rewrite still expands.
    let source = Arc::new(FlakySource::new(sample_records(), 2));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source), SynonymCache::new());

    let result = rewriter.rewrite(QueryStringQuery::new("find 7").into(), &[]);
    assert_eq!(result.state, RewriteState::Rewritten);
}

#[test]
fn test_exhausted_source_degrades_to_residual_only() {
    // Every attempt fails; the query survives without synonym clauses.
    let source = Arc::new(FlakySource::new(sample_records(), u32::MAX));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source), SynonymCache::new());

    let input = QueryStringQuery::new("find 7 cats")
        .with_default_operator(BooleanOperator::And);
    let result = rewriter.rewrite(input.into(), &[]);
    assert_eq!(result.state, RewriteState::Failed);

    let bool_query = result.query.as_bool().unwrap();
    let shoulds = bool_query.clauses_by_occur(Occur::Should);
    assert_eq!(shoulds.len(), 1);
    let residual = shoulds[0].query.as_query_string().unwrap();
    assert_eq!(residual.query, "find 7 cats");
    assert_eq!(residual.minimum_should_match.as_deref(), Some("100%"));
}

#[test]
fn test_partial_pages_still_expand() {
    // Batch size 1 forces one page per record; a mid-stream failure burst
    // after the first page leaves a partial dictionary behind.
    let records = vec![
        SynonymRecord::new("7", "seven"),
        SynonymRecord::new("cats", "felines"),
    ];
    let source = Arc::new(FlakySourceAfterFirstPage::new(records));
    let rewriter = QueryRewriter::new(
        SynonymLoader::new(source).with_batch_size(1),
        SynonymCache::new(),
    );

    let result = rewriter.rewrite(QueryStringQuery::new("find 7 cats").into(), &[]);
    assert_eq!(result.state, RewriteState::Rewritten);

    let bool_query = result.query.as_bool().unwrap();
    let shoulds = bool_query.clauses_by_occur(Occur::Should);
    // Only the first record made it into the dictionary.
    assert_eq!(shoulds[0].query.as_query_string().unwrap().query, "find cats");
    assert_eq!(
        shoulds[1].query.as_query_string().unwrap().query,
        "(7) (seven)"
    );
}

/// Serves offset 0, then fails every later page.
struct FlakySourceAfterFirstPage {
    inner: InMemorySynonymSource,
}

impl FlakySourceAfterFirstPage {
    fn new(records: Vec<SynonymRecord>) -> Self {
        FlakySourceAfterFirstPage {
            inner: InMemorySynonymSource::new(records),
        }
    }
}

impl SynonymSource for FlakySourceAfterFirstPage {
    fn list(
        &self,
        batch_size: usize,
        offset: usize,
        language_tags: &[String],
    ) -> Result<SynonymPage> {
        if offset > 0 {
            return Err(SynqueryError::synonym("synonym backend unavailable"));
        }
        self.inner.list(batch_size, offset, language_tags)
    }

    fn name(&self) -> &'static str {
        "first_page_only"
    }
}

#[test]
fn test_rewritten_tree_round_trips_through_json() -> Result<()> {
    let source = Arc::new(InMemorySynonymSource::new(sample_records()));
    let rewriter = QueryRewriter::new(SynonymLoader::new(source), SynonymCache::new());

    let result = rewriter.rewrite(QueryStringQuery::new("find 7 cats").into(), &[]);
    let encoded = serde_json::to_string(&result.query)?;
    let decoded: QueryNode = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, result.query);
    Ok(())
}
