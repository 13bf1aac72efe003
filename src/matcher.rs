// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query → documents.
//!
//! A document matches when its title, description or category contains the
//! query as a case-insensitive literal substring. Matches come back in index
//! order; there is no scoring. The widget flavour ([`Matcher`]) also applies
//! the activation threshold and the row cap. The results page flavour
//! ([`filter_documents`]) does neither.

use crate::config::{SearchConfig, MAX_RESULTS, MIN_QUERY_CHARS};
use crate::types::{DocumentIndex, SearchableDocument};
use crate::utils::{char_len, fold};

/// Threshold-and-cap matcher used by the autocomplete widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    min_query_chars: usize,
    max_results: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
            max_results: MAX_RESULTS,
        }
    }
}

impl Matcher {
    /// Both limits are raised to at least 1. A zero threshold would keep the
    /// dropdown open on an empty query, and a zero cap would hide every match.
    pub fn new(min_query_chars: usize, max_results: usize) -> Self {
        Self {
            min_query_chars: min_query_chars.max(1),
            max_results: max_results.max(1),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.min_query_chars, config.max_results)
    }

    pub fn min_query_chars(&self) -> usize {
        self.min_query_chars
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Whether a query is long enough to search at all.
    pub fn is_active(&self, query: &str) -> bool {
        char_len(query) >= self.min_query_chars
    }

    /// Positions in `index` of the first `max_results` matches.
    pub fn positions(&self, query: &str, index: &DocumentIndex) -> Vec<usize> {
        if !self.is_active(query) {
            return Vec::new();
        }
        matching_positions(query, index)
            .take(self.max_results)
            .collect()
    }

    /// The first `max_results` matching documents, in index order.
    pub fn find<'a>(&self, query: &str, index: &'a DocumentIndex) -> Vec<&'a SearchableDocument> {
        self.positions(query, index)
            .into_iter()
            .filter_map(|position| index.get(position))
            .collect()
    }
}

/// Widget matching with the stock threshold (2) and cap (5).
pub fn match_documents<'a>(query: &str, index: &'a DocumentIndex) -> Vec<&'a SearchableDocument> {
    Matcher::default().find(query, index)
}

/// Every matching document, uncapped. An empty query matches nothing.
pub fn filter_documents<'a>(query: &str, index: &'a DocumentIndex) -> Vec<&'a SearchableDocument> {
    if query.is_empty() {
        return Vec::new();
    }
    matching_positions(query, index)
        .filter_map(|position| index.get(position))
        .collect()
}

/// Single-document form of the matching rule.
pub fn matches(doc: &SearchableDocument, query: &str) -> bool {
    let needle = fold(query);
    fold(&doc.title).contains(&needle)
        || fold(&doc.description).contains(&needle)
        || fold(&doc.category).contains(&needle)
}

fn matching_positions<'a>(
    query: &str,
    index: &'a DocumentIndex,
) -> impl Iterator<Item = usize> + 'a {
    let needle = fold(query);
    index
        .folded()
        .iter()
        .enumerate()
        .filter(move |(_, fields)| fields.contains(&needle))
        .map(|(position, _)| position)
}
