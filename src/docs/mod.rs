//! Document collection.
//!
//! Navigation leaves reference documents by id. The [`DocumentCollection`]
//! trait is the lookup seam; [`DocumentIndex`] is the implementation backed
//! by the `docs/` directory (or by a plain id list).
//!
//! Document ids follow the directory layout:
//!
//! ```text
//! docs/index.md                     → index
//! docs/getting-started/overview.md  → getting-started/overview
//! docs/api/admin-contracts.mdx      → api/admin-contracts
//! ```
//!
//! A front matter `id` replaces the file-name part of the id.

mod scan;

pub use scan::ScanError;

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A navigation leaf names a document the collection doesn't know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document `{0}`")]
pub struct UnknownDocumentError(pub String);

/// A content document discovered in the docs directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    /// Front matter `title`, else the first `#` heading.
    pub title: Option<String>,
    /// Front matter `sidebar_label`.
    pub sidebar_label: Option<String>,
    /// Source file, relative to the docs directory.
    pub path: PathBuf,
    /// Relative `.md`/`.mdx` link destinations found in the body.
    pub links: Vec<String>,
}

impl Document {
    /// Document without a source file, known only by id.
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            path: PathBuf::from(format!("{id}.md")),
            id,
            title: None,
            sidebar_label: None,
            links: Vec::new(),
        }
    }

    /// Label used when neither the sidebar nor front matter give one.
    pub fn label(&self) -> &str {
        self.sidebar_label
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Lookup of documents by id.
pub trait DocumentCollection {
    /// Resolve `id`, failing with [`UnknownDocumentError`] naming it.
    fn resolve(&self, id: &str) -> Result<&Document, UnknownDocumentError>;

    fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_ok()
    }

    /// All documents, ordered by id.
    fn documents(&self) -> &[Document];
}

/// Documents indexed by id.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    docs: Vec<Document>,
    by_id: FxHashMap<String, usize>,
}

impl DocumentIndex {
    /// Build from documents, sorted by id. Later duplicates are dropped.
    pub fn new(mut docs: Vec<Document>) -> Self {
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        docs.dedup_by(|a, b| a.id == b.id);
        let by_id = docs
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.id.clone(), i))
            .collect();
        Self { docs, by_id }
    }

    /// In-memory collection of bare documents.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids.into_iter().map(Document::bare).collect())
    }

    /// Scan `dir` for `.md`/`.mdx` documents.
    pub fn scan(dir: &Path) -> Result<Self, ScanError> {
        scan::scan_dir(dir).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl DocumentCollection for DocumentIndex {
    fn resolve(&self, id: &str) -> Result<&Document, UnknownDocumentError> {
        self.by_id
            .get(id)
            .map(|&i| &self.docs[i])
            .ok_or_else(|| UnknownDocumentError(id.to_owned()))
    }

    fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    fn documents(&self) -> &[Document] {
        &self.docs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_unknown() {
        let index = DocumentIndex::from_ids(["overview", "quickstart"]);
        assert_eq!(index.resolve("overview").unwrap().id, "overview");
        assert_eq!(
            index.resolve("running").unwrap_err(),
            UnknownDocumentError("running".into())
        );
        assert!(index.contains("quickstart"));
        assert!(!index.contains("Quickstart"));
    }

    #[test]
    fn test_documents_sorted_and_deduplicated() {
        let index = DocumentIndex::from_ids(["b", "a", "c", "a"]);
        let ids: Vec<_> = index.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_label_fallbacks() {
        let mut doc = Document::bare("api/overview");
        assert_eq!(doc.label(), "api/overview");
        doc.title = Some("API Overview".into());
        assert_eq!(doc.label(), "API Overview");
        doc.sidebar_label = Some("Overview".into());
        assert_eq!(doc.label(), "Overview");
    }

    #[test]
    fn test_unknown_document_display() {
        let err = UnknownDocumentError("quickstart".into());
        assert_eq!(err.to_string(), "unknown document `quickstart`");
    }
}
