//! Text predicates and escaping shared across the expansion pipeline.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Query-string metacharacters that can hijack backend parsing. Parentheses
    // and double quotes are deliberately absent: the rewriter's own output
    // grammar uses them.
    static ref ESCAPE_TARGET: Regex =
        Regex::new(r"[\\+\-!:^~*?/]").expect("Escape pattern should be valid");
}

/// Whether the text is wrapped in double quotes.
pub fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// Whether the text is wrapped in parentheses.
pub fn is_parenthesized(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('(') && text.ends_with(')')
}

/// Whether the text consists of more than one whitespace-separated term.
pub fn contains_multiple_terms(text: &str) -> bool {
    text.split_whitespace().count() > 1
}

/// Backslash-escape query-string metacharacters so rewritten clause text is
/// taken literally by the backend parser.
pub fn escape_query(text: &str) -> String {
    ESCAPE_TARGET.replace_all(text, r"\$0").into_owned()
}
