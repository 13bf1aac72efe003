//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{DocumentIndex, SearchableDocument};
use crate::widget::Navigator;

/// Create a test document with an empty description and an href derived
/// from the title ("Getting started" → "/doc/getting-started").
pub fn make_doc(title: &str, category: &str) -> SearchableDocument {
    SearchableDocument::new(title, "", category, format!("/doc/{}", slug(title)))
}

/// Create a test document with every field spelled out.
pub fn make_doc_with(
    title: &str,
    description: &str,
    category: &str,
    href: &str,
) -> SearchableDocument {
    SearchableDocument::new(title, description, category, href)
}

/// Build an index from documents that are valid by construction.
pub fn index_of(docs: Vec<SearchableDocument>) -> DocumentIndex {
    DocumentIndex::from_trusted(docs)
}

/// The four-document index used by the install-on-Windows scenarios.
pub fn windows_fixture() -> DocumentIndex {
    index_of(vec![
        make_doc_with(
            "How to install Gemini CLI on Windows",
            "Step-by-step setup with npm and PowerShell",
            "Installation",
            "/qa/install-windows",
        ),
        make_doc_with(
            "Authenticate with a Google account",
            "Sign in and pick a project",
            "Getting Started",
            "/qa/authentication",
        ),
        make_doc_with(
            "Configure MCP servers",
            "Add tools through settings.json",
            "Configuration",
            "/tutorials/mcp",
        ),
        make_doc_with(
            "Quota exceeded errors",
            "What the 429 response means and how to wait it out",
            "Troubleshooting",
            "/troubleshooting/quota",
        ),
    ])
}

/// Lowercase, hyphen-joined words.
pub fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Navigator that records every href it is asked to visit.
///
/// Clones share the log, so a test can keep one handle while the widget owns
/// the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, href: &str) {
        self.visits.borrow_mut().push(href.to_string());
    }
}

/// A search callback plus the log of queries it received.
pub fn recording_search_callback() -> (Box<dyn FnMut(&str)>, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let callback = Box::new(move |query: &str| sink.borrow_mut().push(query.to_string()));
    (callback, log)
}
