//! Fuzzy matching over free-text clauses.

use log::debug;

use crate::analysis::{QueryTokenizer, is_parenthesized, is_quoted};
use crate::query::{BoolQuery, QueryNode, QueryStringQuery};

/// Limits and weighting for fuzzy clauses.
#[derive(Debug, Clone)]
pub struct FuzzyConfig {
    /// Boost for the fuzzy clause.
    pub boost: f32,
    /// At most this many terms get a fuzzy marker.
    pub max_terms: usize,
    /// Terms must be longer than this to fuzz.
    pub min_term_len: usize,
    /// Terms longer than this are left exact.
    pub max_term_len: usize,
    /// Leading characters required to match exactly.
    pub prefix_length: u32,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        FuzzyConfig {
            boost: 0.4,
            max_terms: 3,
            min_term_len: 2,
            max_term_len: 16,
            prefix_length: 3,
        }
    }
}

/// Attaches a fuzzy variant of the driving free-text clause.
///
/// Terms within the configured length band are suffixed with `~` and
/// re-issued as a low-boost clause over the given fields. Quoted and
/// parenthesized queries are left alone; fuzzing inside an expression
/// the backend parses structurally would change its meaning.
pub struct FuzzyRewriter {
    fields: Vec<String>,
    tokenizer: QueryTokenizer,
    config: FuzzyConfig,
}

impl FuzzyRewriter {
    /// Create a fuzzy rewriter over the given fields.
    pub fn new(fields: Vec<String>) -> Self {
        FuzzyRewriter {
            fields,
            tokenizer: QueryTokenizer::default(),
            config: FuzzyConfig::default(),
        }
    }

    /// Set the fuzzy configuration.
    pub fn with_config(mut self, config: FuzzyConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a fuzzy clause for the query's free text.
    pub fn apply(&self, query: QueryNode) -> QueryNode {
        let Some(current) = query.first_query_string().cloned() else {
            return query;
        };

        let text = current.query.trim();
        if text.is_empty() || is_parenthesized(text) || is_quoted(text) {
            return query;
        }

        let fuzzed: Vec<String> = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|term| {
                let len = term.chars().count();
                len > self.config.min_term_len && len <= self.config.max_term_len
            })
            .take(self.config.max_terms)
            .map(|term| format!("{term}~"))
            .collect();
        if fuzzed.is_empty() {
            return query;
        }

        let clause = QueryStringQuery::new(fuzzed.join(" "))
            .with_fields(self.fields.clone())
            .with_default_operator(current.default_operator)
            .with_minimum_should_match(
                current
                    .minimum_should_match
                    .clone()
                    .unwrap_or_else(|| "100%".to_string()),
            )
            .with_fuzzy_prefix_length(self.config.prefix_length)
            .with_boost(self.config.boost);

        debug!("Attached fuzzy clause {:?}", clause.query);

        let mut composed = match query {
            QueryNode::Bool(existing) => existing,
            other => {
                let mut wrapper = BoolQuery::new();
                wrapper.add_should(other);
                wrapper
            }
        };
        composed.add_should(clause.into());
        QueryNode::Bool(composed)
    }
}
