//! Exact and prefix phrase clauses used for relevance boosting.

use serde::{Deserialize, Serialize};

/// Default slop for exact phrase matching.
pub const DEFAULT_PHRASE_SLOP: u32 = 2;

/// A clause that matches documents containing an exact phrase in one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseQuery {
    /// The field to match in.
    pub field: String,
    /// The phrase text.
    pub value: String,
    /// Maximum allowed distance between the phrase terms.
    pub slop: u32,
    /// The boost factor for this clause.
    pub boost: Option<f32>,
}

impl PhraseQuery {
    /// Create a phrase clause with the default slop.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        PhraseQuery {
            field: field.into(),
            value: value.into(),
            slop: DEFAULT_PHRASE_SLOP,
            boost: None,
        }
    }

    /// Set the slop.
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }
}

/// A phrase clause whose final term matches as a prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhrasePrefixQuery {
    /// The field to match in.
    pub field: String,
    /// The phrase text.
    pub value: String,
    /// The boost factor for this clause.
    pub boost: Option<f32>,
}

impl PhrasePrefixQuery {
    /// Create a phrase-prefix clause.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        PhrasePrefixQuery {
            field: field.into(),
            value: value.into(),
            boost: None,
        }
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }
}

/// A clause that matches documents whose field value starts with a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixQuery {
    /// The field to match in.
    pub field: String,
    /// The prefix text.
    pub value: String,
    /// The boost factor for this clause.
    pub boost: Option<f32>,
}

impl PrefixQuery {
    /// Create a prefix clause.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        PrefixQuery {
            field: field.into(),
            value: value.into(),
            boost: None,
        }
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }
}
