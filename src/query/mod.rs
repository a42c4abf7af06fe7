//! Query model for synonym-aware rewriting.
//!
//! The engine inspects and produces a small, closed set of query shapes,
//! modeled as the [`QueryNode`] sum type so rewriting code matches
//! exhaustively instead of downcasting. The caller owns serialization to
//! its backend's wire format; every shape derives `Serialize` and
//! `Deserialize` so the tree is transportable.

pub mod boolean;
pub mod phrase;
pub mod query_string;

pub use boolean::{BoolClause, BoolQuery, Occur};
pub use phrase::{DEFAULT_PHRASE_SLOP, PhrasePrefixQuery, PhraseQuery, PrefixQuery};
pub use query_string::{BooleanOperator, QueryStringQuery};

use serde::{Deserialize, Serialize};

/// Any query shape the rewriting pipeline produces or inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryNode {
    /// A free-text query string with carried settings.
    QueryString(QueryStringQuery),
    /// A boolean composition of sub-queries.
    Bool(BoolQuery),
    /// An exact phrase clause.
    Phrase(PhraseQuery),
    /// A phrase clause whose final term matches as a prefix.
    PhrasePrefix(PhrasePrefixQuery),
    /// A single-term prefix clause.
    Prefix(PrefixQuery),
}

impl QueryNode {
    /// View this node as a query-string query, if it is one.
    pub fn as_query_string(&self) -> Option<&QueryStringQuery> {
        match self {
            QueryNode::QueryString(query) => Some(query),
            _ => None,
        }
    }

    /// View this node as a boolean query, if it is one.
    pub fn as_bool(&self) -> Option<&BoolQuery> {
        match self {
            QueryNode::Bool(query) => Some(query),
            _ => None,
        }
    }

    /// Locate the free-text clause driving this query: the node itself, or
    /// the first `Should` clause of a boolean composition.
    pub fn first_query_string(&self) -> Option<&QueryStringQuery> {
        match self {
            QueryNode::QueryString(query) => Some(query),
            QueryNode::Bool(bool_query) => bool_query
                .first_should()
                .and_then(|clause| clause.query.as_query_string()),
            QueryNode::Phrase(_) | QueryNode::PhrasePrefix(_) | QueryNode::Prefix(_) => None,
        }
    }
}

impl From<QueryStringQuery> for QueryNode {
    fn from(query: QueryStringQuery) -> Self {
        QueryNode::QueryString(query)
    }
}

impl From<BoolQuery> for QueryNode {
    fn from(query: BoolQuery) -> Self {
        QueryNode::Bool(query)
    }
}

impl From<PhraseQuery> for QueryNode {
    fn from(query: PhraseQuery) -> Self {
        QueryNode::Phrase(query)
    }
}

impl From<PhrasePrefixQuery> for QueryNode {
    fn from(query: PhrasePrefixQuery) -> Self {
        QueryNode::PhrasePrefix(query)
    }
}

impl From<PrefixQuery> for QueryNode {
    fn from(query: PrefixQuery) -> Self {
        QueryNode::Prefix(query)
    }
}
