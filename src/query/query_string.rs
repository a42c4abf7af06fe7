//! Free-text query clause and its carried settings.

use serde::{Deserialize, Serialize};

/// Default boolean operator applied between query terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOperator {
    /// Any term may match.
    #[default]
    Or,
    /// Every term must match.
    And,
}

/// A free-text query and the settings it carries through rewriting.
///
/// Clauses derived during rewriting inherit the analyzer, field, boost, and
/// slop settings of the clause they came from. `queries_for_match`
/// transports the whole-query match variants to downstream relevance
/// boosting; `minimum_should_match` holds the backend's count-or-percentage
/// string (for example `"1"` or `"100%"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryStringQuery {
    /// The query text
    pub query: String,
    /// The raw, pre-rewrite query text
    pub raw_query: Option<String>,
    /// Operator applied between terms when the query writes none
    pub default_operator: BooleanOperator,
    /// Analyzer name
    pub analyzer: Option<String>,
    /// Field searched when none is qualified in the query
    pub default_field: Option<String>,
    /// Fields searched, with any boost annotations the caller encoded
    pub fields: Vec<String>,
    /// Boost factor for the whole clause
    pub boost: Option<f32>,
    /// Phrase slop applied to quoted phrases
    pub phrase_slop: Option<u32>,
    /// Whether adjacent terms are matched as generated phrases
    pub auto_generate_phrase_queries: bool,
    /// Prefix length preserved by fuzzy matching
    pub fuzzy_prefix_length: Option<u32>,
    /// Minimum number or percentage of optional terms that must match
    pub minimum_should_match: Option<String>,
    /// Whole-query match variants for relevance boosting
    pub queries_for_match: Option<Vec<String>>,
}

impl QueryStringQuery {
    /// Create a query over the given text with default settings.
    pub fn new(query: impl Into<String>) -> Self {
        QueryStringQuery {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the default operator.
    pub fn with_default_operator(mut self, operator: BooleanOperator) -> Self {
        self.default_operator = operator;
        self
    }

    /// Set the raw query text.
    pub fn with_raw_query(mut self, raw_query: impl Into<String>) -> Self {
        self.raw_query = Some(raw_query.into());
        self
    }

    /// Set the analyzer name.
    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Set the default field.
    pub fn with_default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = Some(field.into());
        self
    }

    /// Set the searched fields.
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Set the clause boost.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the phrase slop.
    pub fn with_phrase_slop(mut self, slop: u32) -> Self {
        self.phrase_slop = Some(slop);
        self
    }

    /// Set whether adjacent terms are matched as generated phrases.
    pub fn with_auto_generate_phrase_queries(mut self, enabled: bool) -> Self {
        self.auto_generate_phrase_queries = enabled;
        self
    }

    /// Set the fuzzy prefix length.
    pub fn with_fuzzy_prefix_length(mut self, length: u32) -> Self {
        self.fuzzy_prefix_length = Some(length);
        self
    }

    /// Set the minimum-should-match value.
    pub fn with_minimum_should_match(mut self, value: impl Into<String>) -> Self {
        self.minimum_should_match = Some(value.into());
        self
    }

    /// Set the whole-query match variants.
    pub fn with_queries_for_match(mut self, variants: Vec<String>) -> Self {
        self.queries_for_match = Some(variants);
        self
    }

    /// Derive a sibling clause over new query text.
    ///
    /// The derived clause records this clause's raw query (falling back to
    /// its query text, so provenance survives partial rewrites), copies the
    /// analyzer, fields, boost, and slop settings, resets the operator to
    /// `Or` (term optionality is expressed through minimum-should-match
    /// instead), and starts without a minimum-should-match value or match
    /// variants.
    pub fn derive_clause(&self, query: impl Into<String>) -> Self {
        QueryStringQuery {
            query: query.into(),
            raw_query: self
                .raw_query
                .clone()
                .or_else(|| Some(self.query.clone())),
            default_operator: BooleanOperator::Or,
            analyzer: self.analyzer.clone(),
            default_field: self.default_field.clone(),
            fields: self.fields.clone(),
            boost: self.boost,
            phrase_slop: self.phrase_slop,
            auto_generate_phrase_queries: false,
            fuzzy_prefix_length: self.fuzzy_prefix_length,
            minimum_should_match: None,
            queries_for_match: None,
        }
    }
}
