//! Relevance boosting over rewritten queries.
//!
//! After synonym rewriting the residual clause carries the whole-query
//! match variants. This module turns each variant into phrase and prefix
//! clauses over the caller's fields so that documents matching the query
//! as a connected phrase rank above bag-of-words matches.

use log::debug;

use crate::analysis::QueryTokenizer;
use crate::query::{BoolQuery, PhrasePrefixQuery, PhraseQuery, PrefixQuery, QueryNode};

/// A field targeted by relevance boosting.
///
/// Exact phrase clauses run against the analyzed field. Phrase-prefix
/// and prefix clauses run against its lowercased (not analyzed)
/// counterpart so that partial words are not stemmed away.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceField {
    /// Field name with full analysis applied.
    pub analyzed: String,
    /// Field name with lowercasing only.
    pub lowercase: String,
}

impl RelevanceField {
    pub fn new(analyzed: impl Into<String>, lowercase: impl Into<String>) -> Self {
        RelevanceField {
            analyzed: analyzed.into(),
            lowercase: lowercase.into(),
        }
    }
}

/// Boost factors and term limits for relevance clauses.
#[derive(Debug, Clone)]
pub struct RelevanceConfig {
    /// Boost for full-phrase matches.
    pub phrase_boost: f32,
    /// Boost for phrase matches where the last term is a prefix.
    pub phrase_prefix_boost: f32,
    /// Boost for single-term prefix matches.
    pub prefix_boost: f32,
    /// Variants longer than this many terms are truncated.
    pub max_terms: usize,
    /// Single terms must be longer than this to get a prefix clause.
    pub min_term_len: usize,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        RelevanceConfig {
            phrase_boost: 10.0,
            phrase_prefix_boost: 5.0,
            prefix_boost: 0.5,
            max_terms: 10,
            min_term_len: 2,
        }
    }
}

/// Attaches phrase and prefix boosting clauses for each match variant.
pub struct RelevanceBooster {
    fields: Vec<RelevanceField>,
    tokenizer: QueryTokenizer,
    config: RelevanceConfig,
}

impl RelevanceBooster {
    /// Create a booster over the given fields.
    pub fn new(fields: Vec<RelevanceField>) -> Self {
        RelevanceBooster {
            fields,
            tokenizer: QueryTokenizer::default(),
            config: RelevanceConfig::default(),
        }
    }

    /// Set the boost configuration.
    pub fn with_config(mut self, config: RelevanceConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach boosting clauses for the query's match variants.
    ///
    /// Queries without a free-text clause come back unchanged. A query
    /// that was never rewritten is boosted on its own text.
    pub fn boost(&self, query: QueryNode) -> QueryNode {
        let Some(current) = query.first_query_string().cloned() else {
            return query;
        };

        let variants = current
            .queries_for_match
            .clone()
            .unwrap_or_else(|| vec![current.query.clone()]);

        let mut composed = match query {
            QueryNode::Bool(existing) => existing,
            other => {
                let mut wrapper = BoolQuery::new();
                wrapper.add_should(other);
                wrapper
            }
        };

        let mut attached = 0usize;
        for variant in &variants {
            let terms = self.tokenizer.tokenize(variant);
            let terms = &terms[..terms.len().min(self.config.max_terms)];
            if terms.is_empty() {
                continue;
            }

            if let [term] = terms {
                if term.chars().count() > self.config.min_term_len {
                    for field in &self.fields {
                        composed.add_should(
                            PrefixQuery::new(field.lowercase.clone(), term.to_lowercase())
                                .with_boost(self.config.prefix_boost)
                                .into(),
                        );
                        attached += 1;
                    }
                }
                continue;
            }

            let joined = terms.join(" ");
            for field in &self.fields {
                composed.add_should(
                    PhraseQuery::new(field.analyzed.clone(), joined.clone())
                        .with_boost(self.config.phrase_boost)
                        .into(),
                );
                composed.add_should(
                    PhrasePrefixQuery::new(field.lowercase.clone(), joined.to_lowercase())
                        .with_boost(self.config.phrase_prefix_boost)
                        .into(),
                );
                attached += 2;
            }
        }

        debug!(
            "Attached {attached} relevance clauses over {} variants",
            variants.len()
        );
        QueryNode::Bool(composed)
    }
}
