//! Document records and the validated build-time payload.
//!
//! The indexer emits a JSON array of [`Document`]s into each page. The browser
//! parses it back into a [`DocumentSet`], which checks the structural
//! guarantees the index relies on: ids form a dense zero-based range and every
//! document has a link target.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a document within one build.
pub type DocId = u32;

/// Error returned when a document payload is rejected.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The payload is not a JSON array of document records.
    #[error("malformed document payload: {0}")]
    Json(#[from] serde_json::Error),
    /// An id falls outside `0..len`.
    #[error("document id {id} out of range for {len} documents")]
    IdOutOfRange { id: DocId, len: usize },
    /// Two documents share an id.
    #[error("duplicate document id {0}")]
    DuplicateId(DocId),
    /// A document has an empty `href`.
    #[error("document {id} has an empty href")]
    EmptyHref { id: DocId },
}

/// A page of documentation as indexed for search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Dense zero-based id, stable only within one build.
    pub id: DocId,
    /// Link target of the page.
    pub href: String,
    /// Page title.
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    /// Short summary from the page's front matter.
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// Plain-text page body. Indexed, never displayed.
    #[serde(default, deserialize_with = "nullable_string", skip_serializing_if = "String::is_empty")]
    pub content: String,
}

/// Templates emit `null` for missing front matter values.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An immutable, validated collection of documents in payload order.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    docs: Vec<Document>,
    /// `slots[id]` is the position of document `id` in `docs`.
    slots: Vec<usize>,
}

impl DocumentSet {
    /// Validate a list of documents.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::IdOutOfRange`] or [`PayloadError::DuplicateId`]
    /// when ids are not a permutation of `0..len`, and
    /// [`PayloadError::EmptyHref`] when a document has no link target.
    pub fn new(docs: Vec<Document>) -> Result<Self, PayloadError> {
        let len = docs.len();
        let mut slots = vec![usize::MAX; len];
        for (pos, doc) in docs.iter().enumerate() {
            let Some(slot) = slots.get_mut(doc.id as usize) else {
                return Err(PayloadError::IdOutOfRange { id: doc.id, len });
            };
            if *slot != usize::MAX {
                return Err(PayloadError::DuplicateId(doc.id));
            }
            if doc.href.trim().is_empty() {
                return Err(PayloadError::EmptyHref { id: doc.id });
            }
            *slot = pos;
        }
        Ok(Self { docs, slots })
    }

    /// Parse and validate a JSON array of documents.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Json`] for malformed input, otherwise the same
    /// errors as [`DocumentSet::new`].
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        let docs: Vec<Document> = serde_json::from_str(raw)?;
        Self::new(docs)
    }

    /// Serialize the documents back to a JSON array in payload order.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(&self.docs)?)
    }

    /// Look up a document by id.
    #[must_use]
    pub fn get(&self, id: DocId) -> Option<&Document> {
        let pos = *self.slots.get(id as usize)?;
        self.docs.get(pos)
    }

    /// Documents in payload order.
    #[must_use]
    pub fn as_slice(&self) -> &[Document] {
        &self.docs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
