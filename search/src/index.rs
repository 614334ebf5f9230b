//! Per-field inverted index with enriched search.
//!
//! The index is built once from a [`DocumentSet`] and is read-only afterwards,
//! apart from its query cache. Each indexed [`Field`] has its own postings
//! map from word prefix to the documents containing a word with that prefix.
//! A search runs the query against every field separately and returns one
//! group of hits per field that matched, in field declaration order. Hits
//! carry the stored document fields ("enriched") so callers can render
//! without a second lookup.
//!
//! Ranking inside a field: a document's score is the sum, over query words, of
//! the earliest word position at which that query word matches. Lower scores
//! rank first; ties keep payload order.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;

use crate::cache::QueryCache;
use crate::consts::QUERY_CACHE_CAPACITY;
use crate::doc::{DocId, Document, DocumentSet};
use crate::tokenize::{forward, query_terms, words};

/// An indexed document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Content,
}

impl Field {
    /// All indexed fields in declaration order. Search results follow it.
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::Content];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Content => "content",
        }
    }

    fn text(self, doc: &Document) -> &str {
        match self {
            Self::Title => &doc.title,
            Self::Description => &doc.description,
            Self::Content => &doc.content,
        }
    }
}

/// Fields kept alongside the index for rendering. `content` is not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredDoc {
    pub href: String,
    pub title: String,
    pub description: String,
}

impl From<&Document> for StoredDoc {
    fn from(doc: &Document) -> Self {
        Self { href: doc.href.clone(), title: doc.title.clone(), description: doc.description.clone() }
    }
}

/// One matching document with its stored record attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    pub id: DocId,
    pub doc: &'a StoredDoc,
}

/// The hits for one field, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatches<'a> {
    pub field: Field,
    pub hits: Vec<Hit<'a>>,
}

#[derive(Debug, Clone, Copy)]
struct Posting {
    /// Position of the document in payload order.
    slot: usize,
    /// Earliest word position in the field with this prefix.
    position: usize,
}

#[derive(Debug, Default)]
struct FieldIndex {
    postings: HashMap<String, Vec<Posting>>,
}

impl FieldIndex {
    fn build(field: Field, docs: &DocumentSet) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        for (slot, doc) in docs.iter().enumerate() {
            for (position, word) in words(field.text(doc)).iter().enumerate() {
                for prefix in forward(word) {
                    let list = postings.entry(prefix.to_owned()).or_default();
                    // Positions only grow within a document, so the first
                    // posting recorded for a slot is its earliest.
                    if list.last().is_none_or(|p| p.slot != slot) {
                        list.push(Posting { slot, position });
                    }
                }
            }
        }
        Self { postings }
    }

    /// Slots of documents matching every term, best first.
    fn search(&self, terms: &[String], limit: usize) -> Vec<usize> {
        let mut scores: Option<HashMap<usize, usize>> = None;
        for term in terms {
            let Some(list) = self.postings.get(term) else {
                return Vec::new();
            };
            scores = Some(match scores {
                None => list.iter().map(|p| (p.slot, p.position)).collect(),
                Some(prev) => list
                    .iter()
                    .filter_map(|p| prev.get(&p.slot).map(|score| (p.slot, score + p.position)))
                    .collect(),
            });
        }

        let mut ranked: Vec<(usize, usize)> = scores.unwrap_or_default().into_iter().collect();
        ranked.sort_unstable_by_key(|&(slot, score)| (score, slot));
        ranked.truncate(limit);
        ranked.into_iter().map(|(slot, _)| slot).collect()
    }
}

/// Cached form of a search: matched slots per field.
type SlotMatches = Vec<(Field, Vec<usize>)>;

/// Searchable index over a document set.
#[derive(Debug)]
pub struct DocumentIndex {
    ids: Vec<DocId>,
    stored: Vec<StoredDoc>,
    fields: Vec<(Field, FieldIndex)>,
    cache: RefCell<QueryCache<SlotMatches>>,
}

impl DocumentIndex {
    /// Build an index with the default query cache.
    #[must_use]
    pub fn new(docs: &DocumentSet) -> Self {
        Self::with_cache_capacity(docs, QUERY_CACHE_CAPACITY)
    }

    /// Build an index keeping results for at most `capacity` queries.
    #[must_use]
    pub fn with_cache_capacity(docs: &DocumentSet, capacity: usize) -> Self {
        Self {
            ids: docs.iter().map(|d| d.id).collect(),
            stored: docs.iter().map(StoredDoc::from).collect(),
            fields: Field::ALL.iter().map(|&f| (f, FieldIndex::build(f, docs))).collect(),
            cache: RefCell::new(QueryCache::new(capacity)),
        }
    }

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stored.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stored.is_empty()
    }

    /// Run `query` against every field, returning at most `limit` hits per
    /// field. Fields without hits are omitted. An empty query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<FieldMatches<'_>> {
        let terms = query_terms(query);
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let key = format!("{limit}:{query}");
        let cached = self.cache.borrow_mut().get(&key);
        let slots = match cached {
            Some(slots) => slots,
            None => {
                let slots: SlotMatches = self
                    .fields
                    .iter()
                    .map(|(field, index)| (*field, index.search(&terms, limit)))
                    .filter(|(_, slots)| !slots.is_empty())
                    .collect();
                self.cache.borrow_mut().insert(&key, slots.clone());
                slots
            }
        };

        slots.into_iter().map(|(field, slots)| self.enrich(field, &slots)).collect()
    }

    fn enrich(&self, field: Field, slots: &[usize]) -> FieldMatches<'_> {
        let hits = slots
            .iter()
            .filter_map(|&slot| Some(Hit { id: *self.ids.get(slot)?, doc: self.stored.get(slot)? }))
            .collect();
        FieldMatches { field, hits }
    }

    /// Number of cached queries.
    #[must_use]
    pub fn cached_queries(&self) -> usize {
        self.cache.borrow().len()
    }
}
