// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a document index.
//!
//! | Rust Type            | Purpose                                        |
//! |----------------------|------------------------------------------------|
//! | `SearchableDocument` | One record: what is matched, shown and visited |
//! | `DocumentIndex`      | Immutable, validated list of records           |
//!
//! # Invariants
//!
//! - **SearchableDocument**: `title` and `href` are non-empty (after trimming).
//!   A blank title renders an invisible row; a blank href navigates nowhere.
//!
//! - **DocumentIndex**: `docs.len() = folded.len()`, and `folded[i]` is the
//!   case-folded form of `docs[i]`. Nothing mutates either after construction,
//!   so the two can never drift.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndexError;
use crate::utils::fold;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A record the search box can find.
///
/// `title` is the primary match field and the row label. `description` is the
/// secondary line under it. `category` groups rows on the results page and is
/// matched too. `href` is where selecting the row goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableDocument {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub href: String,
}

impl SearchableDocument {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            href: href.into(),
        }
    }
}

/// Lowercased copies of the three match fields.
#[derive(Debug, Clone)]
pub(crate) struct FoldedFields {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl FoldedFields {
    fn of(doc: &SearchableDocument) -> Self {
        Self {
            title: fold(&doc.title),
            description: fold(&doc.description),
            category: fold(&doc.category),
        }
    }

    /// True if any field contains the already-folded needle.
    #[inline]
    pub fn contains(&self, folded_needle: &str) -> bool {
        self.title.contains(folded_needle)
            || self.description.contains(folded_needle)
            || self.category.contains(folded_needle)
    }
}

// =============================================================================
// INDEX
// =============================================================================

#[derive(Debug)]
struct IndexData {
    docs: Vec<SearchableDocument>,
    folded: Vec<FoldedFields>,
}

/// An immutable list of documents, in insertion order.
///
/// Cloning is a reference-count bump: every widget instance owns a handle to
/// the same storage instead of reaching for a module-level singleton. Use
/// [`DocumentIndex::new`] for runtime-validated construction.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    inner: Arc<IndexData>,
}

impl DocumentIndex {
    /// Validate and index a list of documents.
    pub fn new(docs: Vec<SearchableDocument>) -> Result<Self, IndexError> {
        validate_documents(&docs)?;
        Ok(Self::from_trusted(docs))
    }

    /// Index documents that are known to be valid (compiled-in seed lists).
    pub(crate) fn from_trusted(docs: Vec<SearchableDocument>) -> Self {
        debug_assert!(validate_documents(&docs).is_ok());
        let folded = docs.iter().map(FoldedFields::of).collect();
        Self {
            inner: Arc::new(IndexData { docs, folded }),
        }
    }

    /// An index with no documents. Every query finds nothing.
    pub fn empty() -> Self {
        Self::from_trusted(Vec::new())
    }

    /// Parse a JSON array of documents.
    pub fn from_json(raw: &str) -> Result<Self, IndexError> {
        let docs: Vec<SearchableDocument> = serde_json::from_str(raw)?;
        let index = Self::new(docs)?;
        debug!(documents = index.len(), "parsed document index");
        Ok(index)
    }

    /// Read and parse a JSON document file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_json(&raw)?;
        debug!(path = %path.display(), documents = index.len(), "loaded document index");
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.inner.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.docs.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&SearchableDocument> {
        self.inner.docs.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchableDocument> {
        self.inner.docs.iter()
    }

    pub fn as_slice(&self) -> &[SearchableDocument] {
        &self.inner.docs
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for doc in self.iter() {
            if !seen.contains(&doc.category.as_str()) {
                seen.push(&doc.category);
            }
        }
        seen
    }

    /// Folded fields, parallel to `as_slice()`.
    pub(crate) fn folded(&self) -> &[FoldedFields] {
        &self.inner.folded
    }
}

impl<'a> IntoIterator for &'a DocumentIndex {
    type Item = &'a SearchableDocument;
    type IntoIter = std::slice::Iter<'a, SearchableDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check the non-empty title/href invariant, reporting the first violation.
pub fn validate_documents(docs: &[SearchableDocument]) -> Result<(), IndexError> {
    for (position, doc) in docs.iter().enumerate() {
        if doc.title.trim().is_empty() {
            return Err(IndexError::EmptyTitle { position });
        }
        if doc.href.trim().is_empty() {
            return Err(IndexError::EmptyHref {
                position,
                title: doc.title.clone(),
            });
        }
    }
    Ok(())
}
