// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `/search?q=...` page.
//!
//! Same matching rule as the widget, but over its own document list, with
//! no threshold and no cap, and grouped by category in first-seen order.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{FallbackLink, SearchConfig};
use crate::matcher::filter_documents;
use crate::types::{DocumentIndex, SearchableDocument};
use crate::widget::SearchCallback;

/// Matches sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub documents: Vec<&'a SearchableDocument>,
}

/// What the results page renders for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultsView<'a> {
    /// No query yet: ask for one and offer browse links.
    Prompt { fallbacks: &'a [FallbackLink] },
    /// A query that matched nothing.
    #[serde(rename_all = "camelCase")]
    NoMatches {
        query: String,
        fallbacks: &'a [FallbackLink],
    },
    #[serde(rename_all = "camelCase")]
    Groups {
        query: String,
        total: usize,
        groups: Vec<CategoryGroup<'a>>,
    },
}

#[derive(Debug, Clone)]
pub struct ResultsPage {
    index: DocumentIndex,
    fallbacks: Vec<FallbackLink>,
}

impl ResultsPage {
    pub fn new(index: DocumentIndex, config: &SearchConfig) -> Self {
        Self {
            index,
            fallbacks: config.fallback_links.clone(),
        }
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    /// Render the page for a raw query. Surrounding whitespace is ignored.
    pub fn render(&self, query: &str) -> ResultsView<'_> {
        let query = query.trim();
        if query.is_empty() {
            return ResultsView::Prompt {
                fallbacks: &self.fallbacks,
            };
        }

        let matches = filter_documents(query, &self.index);
        debug!(query, matches = matches.len(), "results page rendered");
        if matches.is_empty() {
            return ResultsView::NoMatches {
                query: query.to_string(),
                fallbacks: &self.fallbacks,
            };
        }

        ResultsView::Groups {
            query: query.to_string(),
            total: matches.len(),
            groups: group_by_category(matches),
        }
    }

    /// Render the page for a location such as `/search?q=mcp%20servers`.
    pub fn render_url(&self, url: &str) -> ResultsView<'_> {
        let query = query_from_url(url).unwrap_or_default();
        self.render(&query)
    }
}

/// Group documents by category, keeping first-seen category order and the
/// input order within each group.
pub fn group_by_category<'a>(documents: Vec<&'a SearchableDocument>) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    for doc in documents {
        match groups.iter_mut().find(|group| group.category == doc.category) {
            Some(group) => group.documents.push(doc),
            None => groups.push(CategoryGroup {
                category: &doc.category,
                documents: vec![doc],
            }),
        }
    }
    groups
}

// =============================================================================
// URLS
// =============================================================================

/// `/search` + `?q=<url-encoded query>`.
pub fn results_href(results_path: &str, query: &str) -> String {
    format!("{}?q={}", results_path, urlencoding::encode(query))
}

/// Pull the `q` parameter out of a path or URL.
///
/// `+` decodes to a space, as browsers submit forms. A malformed escape
/// yields `None` rather than a half-decoded query.
pub fn query_from_url(url: &str) -> Option<String> {
    let (_, query_string) = url.split_once('?')?;
    let query_string = query_string.split('#').next().unwrap_or_default();
    query_string
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "q")
        .and_then(|(_, value)| {
            let spaced = value.replace('+', " ");
            urlencoding::decode(&spaced).ok().map(|decoded| decoded.into_owned())
        })
}

/// A widget search callback that assigns the browser location to the
/// results page for the submitted query.
pub fn redirect_to_results(
    results_path: impl Into<String>,
    mut assign_location: impl FnMut(&str) + 'static,
) -> SearchCallback {
    let results_path = results_path.into();
    Box::new(move |query: &str| {
        let href = results_href(&results_path, query);
        trace!(href = %href, "redirecting to results page");
        assign_location(&href);
    })
}
