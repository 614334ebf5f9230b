use super::*;

fn doc(id: DocId, href: &str, title: &str, description: &str, content: &str) -> Document {
    Document {
        id,
        href: href.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        content: content.to_owned(),
    }
}

fn sample() -> DocumentSet {
    DocumentSet::new(vec![
        doc(0, "/a", "Alpha guide", "intro", "alpha content"),
        doc(1, "/b", "Beta", "alpha mentioned here", "other"),
    ])
    .unwrap()
}

fn hrefs<'a>(group: &FieldMatches<'a>) -> Vec<&'a str> {
    group.hits.iter().map(|h| h.doc.href.as_str()).collect()
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_declaration_order() {
    assert_eq!(Field::ALL, [Field::Title, Field::Description, Field::Content]);
}

#[test]
fn field_names() {
    assert_eq!(Field::Title.name(), "title");
    assert_eq!(Field::Description.name(), "description");
    assert_eq!(Field::Content.name(), "content");
}

// =============================================================
// Search: grouping and enrichment
// =============================================================

#[test]
fn search_groups_hits_by_field_in_declaration_order() {
    let index = DocumentIndex::new(&sample());
    let results = index.search("alpha", 5);
    let fields: Vec<Field> = results.iter().map(|g| g.field).collect();
    assert_eq!(fields, vec![Field::Title, Field::Description, Field::Content]);
    assert_eq!(hrefs(&results[0]), vec!["/a"]);
    assert_eq!(hrefs(&results[1]), vec!["/b"]);
    assert_eq!(hrefs(&results[2]), vec!["/a"]);
}

#[test]
fn search_omits_fields_without_hits() {
    let index = DocumentIndex::new(&sample());
    let results = index.search("beta", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].field, Field::Title);
    assert_eq!(hrefs(&results[0]), vec!["/b"]);
}

#[test]
fn search_attaches_stored_fields_and_ids() {
    let index = DocumentIndex::new(&sample());
    let results = index.search("beta", 5);
    let hit = results[0].hits[0];
    assert_eq!(hit.id, 1);
    assert_eq!(hit.doc.title, "Beta");
    assert_eq!(hit.doc.description, "alpha mentioned here");
}

// =============================================================
// Search: matching
// =============================================================

#[test]
fn search_matches_word_prefixes() {
    let index = DocumentIndex::new(&sample());
    let results = index.search("alp", 5);
    assert_eq!(results.len(), 3);
}

#[test]
fn search_does_not_match_word_infixes() {
    let index = DocumentIndex::new(&sample());
    assert!(index.search("lpha", 5).is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let index = DocumentIndex::new(&sample());
    assert_eq!(index.search("ALPHA", 5), index.search("alpha", 5));
}

#[test]
fn search_requires_every_query_word() {
    let index = DocumentIndex::new(&sample());
    let results = index.search("alpha guide", 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].field, Field::Title);
    assert_eq!(hrefs(&results[0]), vec!["/a"]);
}

#[test]
fn search_empty_query_matches_nothing() {
    let index = DocumentIndex::new(&sample());
    assert!(index.search("", 5).is_empty());
    assert!(index.search("   ", 5).is_empty());
}

#[test]
fn search_unknown_word_matches_nothing() {
    let index = DocumentIndex::new(&sample());
    assert!(index.search("gamma", 5).is_empty());
}

#[test]
fn search_on_empty_index_matches_nothing() {
    let index = DocumentIndex::new(&DocumentSet::default());
    assert!(index.is_empty());
    assert!(index.search("alpha", 5).is_empty());
}

// =============================================================
// Search: ranking and limits
// =============================================================

#[test]
fn search_ranks_earlier_word_positions_first() {
    let docs = DocumentSet::new(vec![
        doc(0, "/late", "install the operator", "", ""),
        doc(1, "/early", "operator install", "", ""),
    ])
    .unwrap();
    let index = DocumentIndex::new(&docs);
    let results = index.search("operator", 5);
    assert_eq!(hrefs(&results[0]), vec!["/early", "/late"]);
}

#[test]
fn search_ties_keep_payload_order() {
    let docs = DocumentSet::new(vec![
        doc(1, "/second-id", "operator", "", ""),
        doc(0, "/first-id", "operator", "", ""),
    ])
    .unwrap();
    let index = DocumentIndex::new(&docs);
    let results = index.search("operator", 5);
    assert_eq!(hrefs(&results[0]), vec!["/second-id", "/first-id"]);
}

#[test]
fn search_limit_applies_per_field() {
    let docs: Vec<Document> = (0..8)
        .map(|i| doc(i, &format!("/p{i}"), "lambda", "lambda", ""))
        .collect();
    let index = DocumentIndex::new(&DocumentSet::new(docs).unwrap());
    let results = index.search("lambda", 5);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|g| g.hits.len() == 5));
}

#[test]
fn search_zero_limit_matches_nothing() {
    let index = DocumentIndex::new(&sample());
    assert!(index.search("alpha", 0).is_empty());
}

// =============================================================
// Cache
// =============================================================

#[test]
fn search_caches_distinct_queries() {
    let index = DocumentIndex::new(&sample());
    let first = index.search("alpha", 5);
    assert_eq!(index.cached_queries(), 1);
    let second = index.search("alpha", 5);
    assert_eq!(index.cached_queries(), 1);
    assert_eq!(first, second);
    let _ = index.search("beta", 5);
    assert_eq!(index.cached_queries(), 2);
}

#[test]
fn search_empty_query_is_not_cached() {
    let index = DocumentIndex::new(&sample());
    let _ = index.search("", 5);
    assert_eq!(index.cached_queries(), 0);
}

#[test]
fn search_without_cache_still_answers() {
    let index = DocumentIndex::with_cache_capacity(&sample(), 0);
    assert_eq!(index.search("alpha", 5).len(), 3);
    assert_eq!(index.cached_queries(), 0);
}
