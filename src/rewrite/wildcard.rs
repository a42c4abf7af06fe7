//! Wildcard matching over free-text clauses.

use log::debug;

use crate::analysis::{QueryTokenizer, is_parenthesized, is_quoted};
use crate::query::{BoolQuery, QueryNode, QueryStringQuery};

/// Limits and weighting for wildcard clauses.
#[derive(Debug, Clone)]
pub struct WildcardConfig {
    /// Boost for the wildcard clause.
    pub boost: f32,
    /// At most this many terms get a wildcard marker.
    pub max_terms: usize,
    /// Terms must be longer than this to expand.
    pub min_term_len: usize,
    /// Match inside words as well as at their start.
    pub double_sided: bool,
}

impl Default for WildcardConfig {
    fn default() -> Self {
        WildcardConfig {
            boost: 0.2,
            max_terms: 3,
            min_term_len: 2,
            double_sided: false,
        }
    }
}

/// Attaches a wildcard variant of the driving free-text clause.
///
/// Terms are suffixed with `*` (or wrapped in `*` on both sides when
/// `double_sided` is set) and re-issued as a low-boost clause. The same
/// structural guards as fuzzy rewriting apply.
pub struct WildcardRewriter {
    fields: Vec<String>,
    tokenizer: QueryTokenizer,
    config: WildcardConfig,
}

impl WildcardRewriter {
    /// Create a wildcard rewriter over the given fields.
    pub fn new(fields: Vec<String>) -> Self {
        WildcardRewriter {
            fields,
            tokenizer: QueryTokenizer::default(),
            config: WildcardConfig::default(),
        }
    }

    /// Set the wildcard configuration.
    pub fn with_config(mut self, config: WildcardConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a wildcard clause for the query's free text.
    pub fn apply(&self, query: QueryNode) -> QueryNode {
        let Some(current) = query.first_query_string().cloned() else {
            return query;
        };

        let text = current.query.trim();
        if text.is_empty() || is_parenthesized(text) || is_quoted(text) {
            return query;
        }

        let expanded: Vec<String> = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|term| term.chars().count() > self.config.min_term_len)
            .take(self.config.max_terms)
            .map(|term| {
                if self.config.double_sided {
                    format!("*{term}*")
                } else {
                    format!("{term}*")
                }
            })
            .collect();
        if expanded.is_empty() {
            return query;
        }

        let clause = QueryStringQuery::new(expanded.join(" "))
            .with_fields(self.fields.clone())
            .with_default_operator(current.default_operator)
            .with_minimum_should_match(
                current
                    .minimum_should_match
                    .clone()
                    .unwrap_or_else(|| "100%".to_string()),
            )
            .with_boost(self.config.boost);

        debug!("Attached wildcard clause {:?}", clause.query);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Occur;

    fn body_rewriter() -> WildcardRewriter {
        WildcardRewriter::new(vec!["body".to_string()])
    }

    fn last_should_text(query: &QueryNode) -> QueryStringQuery {
        let bool_query = query.as_bool().unwrap();
        let shoulds = bool_query.clauses_by_occur(Occur::Should);
        shoulds
            .last()
            .and_then(|clause| clause.query.as_query_string())
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_wildcard_suffixes_terms() {
        let result = body_rewriter().apply(QueryStringQuery::new("finding cats").into());
        let clause = last_should_text(&result);
        assert_eq!(clause.query, "finding* cats*");
        assert_eq!(clause.fields, vec!["body".to_string()]);
        assert_eq!(clause.boost, Some(0.2));
        assert_eq!(clause.minimum_should_match.as_deref(), Some("100%"));
    }

    #[test]
    fn test_wildcard_double_sided() {
        let rewriter = body_rewriter().with_config(WildcardConfig {
            double_sided: true,
            ..WildcardConfig::default()
        });
        let result = rewriter.apply(QueryStringQuery::new("finding cats").into());
        assert_eq!(last_should_text(&result).query, "*finding* *cats*");
    }

    #[test]
    fn test_wildcard_caps_and_filters_terms() {
        let result = body_rewriter().apply(QueryStringQuery::new("ab one two three four").into());
        assert_eq!(last_should_text(&result).query, "one* two* three*");
    }

    #[test]
    fn test_wildcard_leaves_structured_text_alone() {
        for text in ["\"find cats\"", "(find cats)", "", "ab"] {
            let input: QueryNode = QueryStringQuery::new(text).into();
            let result = body_rewriter().apply(input.clone());
            assert_eq!(result, input, "expected {text:?} to pass through");
        }
    }
}
