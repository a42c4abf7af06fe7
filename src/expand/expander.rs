//! Sub-sequence enumeration and synonym fragment construction.

use crate::analysis::{contains_multiple_terms, is_quoted};
use crate::synonym::dictionary::SynonymDictionary;

/// Lookup ceiling: sub-sequences whose end index exceeds this bound are
/// never probed, so dictionary lookups stay bounded for long queries.
pub const MAX_SYNONYM_LOOKUPS: usize = 50;

/// The outcome of expanding one token sequence against a dictionary
/// snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionResult {
    /// The original terms that did not participate in any synonym match,
    /// re-joined in order. Empty when every position was matched.
    pub non_expanded_query: String,
    /// Space-joined `(original) (synonyms...)` fragments, one per
    /// dictionary hit. Empty when nothing matched.
    pub expanded_query: String,
    /// Whole-query variants: the full original query first, then one entry
    /// per (hit, synonym) pair with the matched span substituted. Consumers
    /// cap this list.
    pub match_variants: Vec<String>,
}

/// Enumerates contiguous token sub-sequences and expands dictionary hits.
///
/// For terms `t0..tn`, every window `[s, s+c)` with `s + c` at most
/// [`MAX_SYNONYM_LOOKUPS`] is joined, lowercased, and probed. Each hit
/// contributes one fragment and one variant per synonym, and blanks its
/// positions out of the residual; overlapping hits blank the union. The
/// result is deterministic for a fixed dictionary snapshot.
#[derive(Debug, Clone)]
pub struct PhraseExpander {
    max_lookups: usize,
}

impl PhraseExpander {
    /// Create an expander with the default lookup ceiling.
    pub fn new() -> Self {
        PhraseExpander {
            max_lookups: MAX_SYNONYM_LOOKUPS,
        }
    }

    /// Set the lookup ceiling.
    pub fn with_max_lookups(mut self, max_lookups: usize) -> Self {
        self.max_lookups = max_lookups;
        self
    }

    /// Get the lookup ceiling.
    pub fn max_lookups(&self) -> usize {
        self.max_lookups
    }

    /// Expand a token sequence against a dictionary snapshot.
    pub fn expand(&self, terms: &[String], dictionary: &SynonymDictionary) -> ExpansionResult {
        if terms.is_empty() {
            return ExpansionResult {
                non_expanded_query: String::new(),
                expanded_query: String::new(),
                match_variants: Vec::new(),
            };
        }

        let full_query = terms.join(" ");
        let mut match_variants = vec![full_query.clone()];

        if dictionary.is_empty() {
            return ExpansionResult {
                non_expanded_query: full_query,
                expanded_query: String::new(),
                match_variants,
            };
        }

        let mut non_expanded_terms: Vec<String> = terms.to_vec();
        let mut expanded_fragments: Vec<String> = Vec::new();

        for start in 0..terms.len() {
            for count in 1..=(terms.len() - start) {
                // Window ends only grow, so the ceiling cuts the inner loop.
                if start + count > self.max_lookups {
                    break;
                }

                let candidate = terms[start..start + count].join(" ");
                let Some(synonyms) = dictionary.get(&candidate.to_lowercase()) else {
                    continue;
                };

                expanded_fragments.push(expand_phrase(&candidate, synonyms));

                let prefix = terms[..start].join(" ");
                let suffix = terms[start + count..].join(" ");
                for synonym in synonyms {
                    let variant = format!("{prefix} {synonym} {suffix}");
                    match_variants.push(variant.trim().to_string());
                }

                for blanked in &mut non_expanded_terms[start..start + count] {
                    blanked.clear();
                }
            }
        }

        let non_expanded_query = non_expanded_terms
            .iter()
            .filter(|term| !term.is_empty())
            .map(|term| term.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        ExpansionResult {
            non_expanded_query,
            expanded_query: expanded_fragments.join(" "),
            match_variants,
        }
    }
}

impl Default for PhraseExpander {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one dictionary hit as `(original) (syn1 OR syn2 ...)`.
///
/// The original phrase and every synonym that spans multiple terms without
/// being quoted is AND-joined and parenthesized first, so the backend
/// requires all of its terms. Synonym fragments are deduplicated with
/// insertion order kept.
fn expand_phrase(phrase: &str, synonyms: &[String]) -> String {
    let mut alternatives: Vec<String> = Vec::new();
    for synonym in synonyms {
        let fragment = and_join(synonym);
        if !alternatives.contains(&fragment) {
            alternatives.push(fragment);
        }
    }
    format!("({}) ({})", and_join(phrase), alternatives.join(" OR "))
}

fn and_join(phrase: &str) -> String {
    if !is_quoted(phrase) && contains_multiple_terms(phrase) {
        format!("({})", phrase.replace(' ', " AND "))
    } else {
        phrase.to_string()
    }
}
