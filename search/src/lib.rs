//! In-memory document search for the documentation site.
//!
//! This crate has no browser dependencies. It is compiled into the `site`
//! WebAssembly module, where it indexes the build-time document payload once
//! per page load, and into the `docsearch` indexer, which uses the same
//! document types to validate the payload it emits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Document records and the validated [`doc::DocumentSet`] payload |
//! | [`tokenize`] | Word normalization and forward (prefix) tokenization |
//! | [`cache`] | Bounded LRU cache for query results |
//! | [`index`] | Per-field inverted index with enriched search |
//! | [`suggest`] | Flattening per-field results into de-duplicated suggestions |
//! | [`consts`] | Result limits and cache capacity |

pub mod cache;
pub mod consts;
pub mod doc;
pub mod index;
pub mod suggest;
pub mod tokenize;

pub use doc::{DocId, Document, DocumentSet, PayloadError};
pub use index::{DocumentIndex, Field, FieldMatches, Hit, StoredDoc};
pub use suggest::{Suggestion, suggest};
