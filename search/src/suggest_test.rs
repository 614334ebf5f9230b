use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::doc::{Document, DocumentSet};

fn doc(id: u32, href: &str, title: &str, description: &str, content: &str) -> Document {
    Document {
        id,
        href: href.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        content: content.to_owned(),
    }
}

fn index_of(docs: Vec<Document>) -> DocumentIndex {
    DocumentIndex::new(&DocumentSet::new(docs).unwrap())
}

fn hrefs(list: &[Suggestion]) -> Vec<&str> {
    list.iter().map(|s| s.href.as_str()).collect()
}

// =============================================================
// suggest
// =============================================================

#[test]
fn suggest_orders_title_matches_before_description_matches() {
    let index = index_of(vec![
        doc(0, "/a", "Alpha guide", "intro", "alpha content"),
        doc(1, "/b", "Beta", "alpha mentioned here", "other"),
    ]);
    let list = suggest(&index, "alpha");
    assert_eq!(hrefs(&list), vec!["/a", "/b"]);
    assert_eq!(list[0].title, "Alpha guide");
    assert_eq!(list[0].description, "intro");
    assert_eq!(list[1].title, "Beta");
}

#[test]
fn suggest_lists_a_document_once_when_several_fields_match() {
    let index = index_of(vec![doc(0, "/a", "Lambda", "lambda functions", "lambda runtime")]);
    let list = suggest(&index, "lambda");
    assert_eq!(hrefs(&list), vec!["/a"]);
}

#[test]
fn suggest_dedupes_distinct_documents_sharing_an_href() {
    let index = index_of(vec![
        doc(0, "/same", "Queue", "", ""),
        doc(1, "/same", "Queue copy", "", ""),
    ]);
    let list = suggest(&index, "queue");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Queue");
}

#[test]
fn suggest_stops_at_display_limit() {
    let docs = (0..5)
        .map(|i| doc(i, &format!("/t{i}"), "topic", "", ""))
        .chain((5..10).map(|i| doc(i, &format!("/d{i}"), "", "topic", "")))
        .collect();
    let index = index_of(docs);
    let list = suggest(&index, "topic");
    assert_eq!(list.len(), MAX_SUGGESTIONS);
    assert!(list.iter().all(|s| s.href.starts_with("/t")));
}

#[test]
fn suggest_empty_query_yields_nothing() {
    let index = index_of(vec![doc(0, "/a", "Alpha", "", "")]);
    assert!(suggest(&index, "").is_empty());
}

#[test]
fn suggest_without_matches_yields_nothing() {
    let index = index_of(vec![doc(0, "/a", "Alpha", "", "")]);
    assert!(suggest(&index, "zeta").is_empty());
}

// =============================================================
// flatten
// =============================================================

#[test]
fn flatten_zero_max_yields_nothing() {
    let index = index_of(vec![doc(0, "/a", "Alpha", "", "")]);
    assert!(flatten(&index.search("alpha", 5), 0).is_empty());
}

#[test]
fn flatten_no_groups_yields_nothing() {
    assert!(flatten(&[], 5).is_empty());
}

// =============================================================
// Properties
// =============================================================

const VOCAB: [&str; 6] = ["alpha", "beta", "gamma", "delta", "alpine", "bet"];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..6).prop_map(|w| w.join(" "))
}

fn arb_docs() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((0..6u32, arb_text(), arb_text(), arb_text()), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (page, title, description, content))| {
                doc(u32::try_from(i).unwrap(), &format!("/page{page}"), &title, &description, &content)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn suggestions_never_exceed_limit(docs in arb_docs(), query in "[a-z ]{0,12}") {
        let index = index_of(docs);
        prop_assert!(suggest(&index, &query).len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn suggestions_never_repeat_an_href(docs in arb_docs(), query in prop::sample::select(VOCAB.to_vec())) {
        let index = index_of(docs);
        let list = suggest(&index, query);
        let mut seen = HashSet::new();
        for s in &list {
            prop_assert!(seen.insert(s.href.clone()), "duplicate href {}", s.href);
        }
    }
}
