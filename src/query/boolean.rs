//! Boolean query composition.

use serde::{Deserialize, Serialize};

use crate::query::QueryNode;

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

/// A clause in a boolean query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolClause {
    /// The query for this clause.
    pub query: QueryNode,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BoolClause {
    /// Create a new boolean clause.
    pub fn new(query: QueryNode, occur: Occur) -> Self {
        BoolClause { query, occur }
    }

    /// Create a MUST clause.
    pub fn must(query: QueryNode) -> Self {
        BoolClause::new(query, Occur::Must)
    }

    /// Create a SHOULD clause.
    pub fn should(query: QueryNode) -> Self {
        BoolClause::new(query, Occur::Should)
    }

    /// Create a MUST_NOT clause.
    pub fn must_not(query: QueryNode) -> Self {
        BoolClause::new(query, Occur::MustNot)
    }
}

/// A boolean query that combines sub-queries with boolean logic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolQuery {
    /// The clauses in this boolean query.
    clauses: Vec<BoolClause>,
    /// Minimum number or percentage of should clauses that must match.
    minimum_should_match: Option<String>,
    /// The boost factor for this query.
    boost: Option<f32>,
}

impl BoolQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BoolClause) {
        self.clauses.push(clause);
    }

    /// Add a MUST clause.
    pub fn add_must(&mut self, query: QueryNode) {
        self.add_clause(BoolClause::must(query));
    }

    /// Add a SHOULD clause.
    pub fn add_should(&mut self, query: QueryNode) {
        self.add_clause(BoolClause::should(query));
    }

    /// Add a MUST_NOT clause.
    pub fn add_must_not(&mut self, query: QueryNode) {
        self.add_clause(BoolClause::must_not(query));
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Set the minimum-should-match value.
    pub fn with_minimum_should_match(mut self, value: impl Into<String>) -> Self {
        self.minimum_should_match = Some(value.into());
        self
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BoolClause] {
        &self.clauses
    }

    /// Consume the query, yielding its clauses.
    pub fn into_clauses(self) -> Vec<BoolClause> {
        self.clauses
    }

    /// Get the minimum-should-match value.
    pub fn minimum_should_match(&self) -> Option<&str> {
        self.minimum_should_match.as_deref()
    }

    /// Get the boost factor.
    pub fn boost(&self) -> Option<f32> {
        self.boost
    }

    /// Check if this query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Get clauses by occurrence type.
    pub fn clauses_by_occur(&self, occur: Occur) -> Vec<&BoolClause> {
        self.clauses
            .iter()
            .filter(|clause| clause.occur == occur)
            .collect()
    }

    /// Get the first SHOULD clause, if any.
    pub fn first_should(&self) -> Option<&BoolClause> {
        self.clauses
            .iter()
            .find(|clause| clause.occur == Occur::Should)
    }
}
