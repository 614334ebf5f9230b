//! Flatten per-field search results into the suggestion list.
//!
//! A document can match on several fields. The list keeps one entry per
//! `href`, at the position of its first occurrence when walking the field
//! groups in order, and stops at the display limit.

#[cfg(test)]
#[path = "suggest_test.rs"]
mod suggest_test;

use std::collections::HashSet;

use serde::Serialize;

use crate::consts::{MAX_RESULTS_PER_FIELD, MAX_SUGGESTIONS};
use crate::index::{DocumentIndex, FieldMatches};

/// A rendered search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub href: String,
    pub title: String,
    pub description: String,
}

/// De-duplicate `results` by href, first occurrence wins, keeping at most `max`.
#[must_use]
pub fn flatten(results: &[FieldMatches<'_>], max: usize) -> Vec<Suggestion> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for hit in results.iter().flat_map(|group| group.hits.iter()) {
        if out.len() == max {
            break;
        }
        if seen.insert(hit.doc.href.as_str()) {
            out.push(Suggestion {
                href: hit.doc.href.clone(),
                title: hit.doc.title.clone(),
                description: hit.doc.description.clone(),
            });
        }
    }
    out
}

/// Suggestions for `query` with the standard per-field and display limits.
#[must_use]
pub fn suggest(index: &DocumentIndex, query: &str) -> Vec<Suggestion> {
    flatten(&index.search(query, MAX_RESULTS_PER_FIELD), MAX_SUGGESTIONS)
}
