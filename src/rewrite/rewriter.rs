//! Synonym-aware query rewriting.

use std::sync::Arc;

use chrono::Duration;
use log::{debug, warn};

use crate::analysis::{QueryTokenizer, escape_query};
use crate::expand::PhraseExpander;
use crate::query::{BoolQuery, BooleanOperator, Occur, QueryNode, QueryStringQuery};
use crate::synonym::{SynonymCache, SynonymDictionary, SynonymDictionaryBuilder, SynonymLoader};

/// Maximum whole-query match variants attached to the residual clause.
pub const MAX_QUERIES_FOR_MATCH: usize = 3;

/// Tunables for the rewriter.
#[derive(Debug, Clone)]
pub struct RewriterConfig {
    /// How long a built dictionary snapshot stays fresh.
    pub cache_ttl: Duration,
    /// Cap on the match variants carried to relevance boosting.
    pub max_match_variants: usize,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        RewriterConfig {
            cache_ttl: Duration::hours(1),
            max_match_variants: MAX_QUERIES_FOR_MATCH,
        }
    }
}

/// Terminal state of one rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteState {
    /// The query passed through untouched.
    NoExpansion,
    /// Synonym-aware clauses were attached.
    Rewritten,
    /// No dictionary was available; only the residual clause was attached.
    Failed,
}

/// The outcome of one rewrite pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteResult {
    /// The resulting query tree.
    pub query: QueryNode,
    /// What the pass did.
    pub state: RewriteState,
}

impl RewriteResult {
    fn untouched(query: QueryNode) -> Self {
        RewriteResult {
            query,
            state: RewriteState::NoExpansion,
        }
    }
}

/// Rewrites free-text queries into synonym-aware boolean compositions.
///
/// The driving clause is located (the query itself, or the first `Should`
/// clause of an existing composition), tokenized, and expanded against the
/// cached dictionary for the request's language tags. The clause is then
/// replaced by a composition of a residual clause over the unmatched terms
/// and an expanded clause over the synonym fragments; every other clause of
/// the input is carried over unchanged.
///
/// Rewriting is fail-open end to end: a source that cannot be listed, an
/// empty dictionary, or a query with nothing to expand all leave the
/// caller with a usable query.
pub struct QueryRewriter {
    loader: SynonymLoader,
    cache: SynonymCache,
    tokenizer: QueryTokenizer,
    expander: PhraseExpander,
    config: RewriterConfig,
}

impl QueryRewriter {
    /// Create a rewriter over a loader and a cache.
    pub fn new(loader: SynonymLoader, cache: SynonymCache) -> Self {
        QueryRewriter {
            loader,
            cache,
            tokenizer: QueryTokenizer::default(),
            expander: PhraseExpander::new(),
            config: RewriterConfig::default(),
        }
    }

    /// Set the rewriter configuration.
    pub fn with_config(mut self, config: RewriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: QueryTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the phrase expander.
    pub fn with_expander(mut self, expander: PhraseExpander) -> Self {
        self.expander = expander;
        self
    }

    /// Rewrite a query for the given language tags.
    pub fn rewrite(&self, query: QueryNode, language_tags: &[String]) -> RewriteResult {
        if !self.loader.supports_synonyms() {
            warn!(
                "Synonym source {} exposes no synonym listing; leaving query untouched",
                self.loader.source_name()
            );
            return RewriteResult::untouched(query);
        }

        let Some(current) = query.first_query_string().cloned() else {
            debug!("No free-text clause to expand; leaving query untouched");
            return RewriteResult::untouched(query);
        };

        if current.query.trim().is_empty() {
            return RewriteResult::untouched(query);
        }

        let terms = self.tokenizer.tokenize(&current.query);
        if terms.is_empty() {
            return RewriteResult::untouched(query);
        }

        let dictionary = self.dictionary_for(language_tags);
        let expansion = self.expander.expand(&terms, &dictionary);

        let mut composed = BoolQuery::new();

        if !expansion.non_expanded_query.is_empty() {
            let variants: Vec<String> = expansion
                .match_variants
                .iter()
                .take(self.config.max_match_variants)
                .cloned()
                .collect();
            let residual = current
                .derive_clause(escape_query(&expansion.non_expanded_query))
                .with_auto_generate_phrase_queries(true)
                .with_minimum_should_match(residual_min_should_match(&current))
                .with_queries_for_match(variants);
            composed.add_should(residual.into());
        }

        if !expansion.expanded_query.is_empty() {
            let expanded = current
                .derive_clause(escape_query(&expansion.expanded_query))
                .with_minimum_should_match("1");
            composed.add_should(expanded.into());
        }

        if composed.is_empty() {
            return RewriteResult::untouched(query);
        }

        debug!(
            "Attached residual clause {:?} and expanded clause {:?} for synonyms",
            expansion.non_expanded_query, expansion.expanded_query
        );

        // Carry over every clause except the replaced one.
        if let QueryNode::Bool(existing) = query {
            let mut replaced = false;
            for clause in existing.into_clauses() {
                if !replaced && clause.occur == Occur::Should {
                    replaced = true;
                    continue;
                }
                composed.add_clause(clause);
            }
        }

        let state = if dictionary.is_empty() {
            RewriteState::Failed
        } else {
            RewriteState::Rewritten
        };

        RewriteResult {
            query: QueryNode::Bool(composed),
            state,
        }
    }

    fn dictionary_for(&self, language_tags: &[String]) -> Arc<SynonymDictionary> {
        let key = SynonymCache::cache_key(language_tags);
        let loaded = self
            .cache
            .get_or_load(&key, Some(self.config.cache_ttl), || {
                let records = self.loader.load(language_tags);
                Ok(SynonymDictionaryBuilder::from_records(&records))
            });
        match loaded {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!("Synonym dictionary load failed ({e}); continuing without synonyms");
                Arc::new(SynonymDictionary::default())
            }
        }
    }
}

/// Residual-clause minimum-should-match: an explicit value on the input
/// wins; an `And` default operator requires every term; otherwise a single
/// term suffices.
fn residual_min_should_match(current: &QueryStringQuery) -> String {
    match (&current.minimum_should_match, current.default_operator) {
        (Some(value), _) if !value.is_empty() => value.clone(),
        (_, BooleanOperator::And) => "100%".to_string(),
        _ => "1".to_string(),
    }
}
