// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The autocomplete search box as a state machine.
//!
//! The widget owns a query, the rows matched for it, an open flag and an
//! optional keyboard selection. Hosts feed it input events and render
//! [`Autocomplete::view`]; the widget never touches a DOM itself.
//!
//! ```text
//!              query ≤ 1 char                    query ≥ 2 chars, rows
//!   ┌────────┐ ◀──────────────── ┌──────────────────┐
//!   │ Closed │                   │ OpenWithResults  │ ◀─ ArrowUp / ArrowDown
//!   └────────┘ ◀──────────────── └──────────────────┘
//!       ▲   Escape, outside click,        │  ▲
//!       │   navigation (clears query)     ▼  │ query change
//!       │                         ┌──────────────────┐
//!       └──────────────────────── │  OpenNoResults   │
//!                                 └──────────────────┘
//! ```
//!
//! # Invariants
//!
//! - `selected`, when set, indexes into the current rows.
//! - Rows are always the matcher's answer for the current query. Every
//!   query change recomputes them and drops the selection.
//! - Only a successful navigation clears the query. Escape and outside
//!   clicks just close the dropdown.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::trace;

use crate::config::SearchConfig;
use crate::matcher::Matcher;
use crate::types::{DocumentIndex, SearchableDocument};

// =============================================================================
// HOST SEAMS
// =============================================================================

/// Client-side router the widget pushes routes to.
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

/// Adapts a closure into a [`Navigator`].
pub struct NavigateFn<F>(pub F);

impl<F: FnMut(&str)> Navigator for NavigateFn<F> {
    fn navigate(&mut self, href: &str) {
        (self.0)(href);
    }
}

/// Called with the query when the user submits without a selected row.
pub type SearchCallback = Box<dyn FnMut(&str)>;

/// Configuration handed to each widget instance.
pub struct WidgetProps {
    pub placeholder: String,
    /// Styling hook for the host. The widget ignores it.
    pub class_name: String,
    pub on_search: Option<SearchCallback>,
}

impl Default for WidgetProps {
    fn default() -> Self {
        Self {
            placeholder: SearchConfig::default().placeholder,
            class_name: String::new(),
            on_search: None,
        }
    }
}

impl WidgetProps {
    pub fn with_on_search(mut self, on_search: impl FnMut(&str) + 'static) -> Self {
        self.on_search = Some(Box::new(on_search));
        self
    }
}

impl fmt::Debug for WidgetProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetProps")
            .field("placeholder", &self.placeholder)
            .field("class_name", &self.class_name)
            .field("on_search", &self.on_search.is_some())
            .finish()
    }
}

// =============================================================================
// EVENTS AND OUTCOMES
// =============================================================================

/// Keys the widget reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl FromStr for Key {
    type Err = String;

    /// Short names for scripted input: `down`, `up`, `enter`, `esc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" | "arrowdown" => Ok(Key::ArrowDown),
            "up" | "arrowup" => Ok(Key::ArrowUp),
            "enter" | "return" => Ok(Key::Enter),
            "esc" | "escape" => Ok(Key::Escape),
            other => Err(format!(
                "unknown key '{}' (expected down, up, enter or esc)",
                other
            )),
        }
    }
}

/// Which of the three dropdown states the widget is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetState {
    Closed,
    OpenWithResults,
    OpenNoResults,
}

/// What an input event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The event does not apply in the current state.
    Ignored,
    /// The keyboard selection moved (or stayed clamped at an end).
    Moved,
    /// The dropdown closed without navigating.
    Closed,
    /// The router was sent to this href and the query was cleared.
    Navigated(String),
    /// The search callback received this query.
    Searched(String),
}

impl Effect {
    /// Whether a browser host should `preventDefault` the originating event.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Effect::Ignored)
    }
}

// =============================================================================
// VIEW
// =============================================================================

/// One dropdown row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub title: String,
    pub description: String,
    pub category: String,
    pub href: String,
    /// Keyboard selection.
    pub selected: bool,
    /// Visual highlight: keyboard selection or pointer hover.
    pub highlighted: bool,
}

/// What the dropdown should show right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DropdownView {
    Hidden,
    NoResults { message: String },
    Results { rows: Vec<ResultRow> },
}

/// Text shown when an open dropdown has no rows.
pub fn no_results_message(query: &str) -> String {
    format!("No results found for \"{}\"", query)
}

// =============================================================================
// WIDGET
// =============================================================================

pub struct Autocomplete<N: Navigator> {
    index: DocumentIndex,
    matcher: Matcher,
    props: WidgetProps,
    navigator: N,
    query: String,
    /// Positions into `index`, at most `matcher.max_results()` of them.
    results: Vec<usize>,
    open: bool,
    selected: Option<usize>,
    hovered: Option<usize>,
}

impl<N: Navigator> Autocomplete<N> {
    pub fn new(index: DocumentIndex, props: WidgetProps, navigator: N) -> Self {
        Self {
            index,
            matcher: Matcher::default(),
            props,
            navigator,
            query: String::new(),
            results: Vec::new(),
            open: false,
            selected: None,
            hovered: None,
        }
    }

    /// Build a widget whose threshold, cap and placeholder come from `config`.
    pub fn from_config(
        index: DocumentIndex,
        config: &SearchConfig,
        on_search: Option<SearchCallback>,
        navigator: N,
    ) -> Self {
        let props = WidgetProps {
            placeholder: config.placeholder.clone(),
            class_name: String::new(),
            on_search,
        };
        Self::new(index, props, navigator).with_matcher(Matcher::from_config(config))
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        let query = std::mem::take(&mut self.query);
        self.set_query(query);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn placeholder(&self) -> &str {
        &self.props.placeholder
    }

    pub fn class_name(&self) -> &str {
        &self.props.class_name
    }

    pub fn results(&self) -> Vec<&SearchableDocument> {
        self.results
            .iter()
            .filter_map(|&position| self.index.get(position))
            .collect()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> WidgetState {
        match (self.open, self.results.is_empty()) {
            (false, _) => WidgetState::Closed,
            (true, false) => WidgetState::OpenWithResults,
            (true, true) => WidgetState::OpenNoResults,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Replace the query and recompute everything derived from it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = self.matcher.positions(&self.query, &self.index);
        self.selected = None;
        self.hovered = None;
        self.open = self.matcher.is_active(&self.query);
        trace!(
            query = %self.query,
            results = self.results.len(),
            state = ?self.state(),
            "query changed"
        );
    }

    pub fn key_down(&mut self, key: Key) -> Effect {
        match key {
            Key::ArrowDown => self.move_down(),
            Key::ArrowUp => self.move_up(),
            Key::Enter => self.enter(),
            Key::Escape => self.escape(),
            Key::Other => Effect::Ignored,
        }
    }

    /// Move the selection one row down, stopping at the last row.
    pub fn move_down(&mut self) -> Effect {
        if self.state() != WidgetState::OpenWithResults {
            return Effect::Ignored;
        }
        let last = self.results.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(current) => (current + 1).min(last),
        });
        trace!(selected = ?self.selected, "selection moved down");
        Effect::Moved
    }

    /// Move the selection one row up. Above the first row nothing is selected.
    pub fn move_up(&mut self) -> Effect {
        if self.state() != WidgetState::OpenWithResults {
            return Effect::Ignored;
        }
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(current) => Some(current - 1),
        };
        trace!(selected = ?self.selected, "selection moved up");
        Effect::Moved
    }

    /// Navigate to the selected row, or hand the query to the search callback.
    pub fn enter(&mut self) -> Effect {
        match self.selected {
            Some(row) => self.navigate_to_row(row),
            None => self.submit(),
        }
    }

    /// The search button: delegate the query without looking at the selection.
    pub fn submit(&mut self) -> Effect {
        if self.query.is_empty() {
            return Effect::Ignored;
        }
        match self.props.on_search.as_mut() {
            Some(on_search) => {
                trace!(query = %self.query, "search delegated");
                on_search(&self.query);
                Effect::Searched(self.query.clone())
            }
            None => Effect::Ignored,
        }
    }

    /// Close and deselect. The query stays as typed.
    pub fn escape(&mut self) -> Effect {
        let was_open = self.open;
        let effect = self.close("escape");
        if was_open {
            effect
        } else {
            Effect::Ignored
        }
    }

    /// A pointer went down somewhere outside the widget.
    pub fn pointer_down_outside(&mut self) -> Effect {
        if !self.open {
            return Effect::Ignored;
        }
        self.close("outside click")
    }

    /// Pointer click on a visible row.
    pub fn click_result(&mut self, row: usize) -> Effect {
        if self.state() != WidgetState::OpenWithResults || row >= self.results.len() {
            return Effect::Ignored;
        }
        self.navigate_to_row(row)
    }

    /// Pointer hover. Only the highlight changes, never the selection.
    pub fn hover(&mut self, row: Option<usize>) {
        self.hovered = row.filter(|&row| row < self.results.len());
    }

    fn close(&mut self, reason: &'static str) -> Effect {
        self.open = false;
        self.selected = None;
        self.hovered = None;
        trace!(reason, query = %self.query, "dropdown closed");
        Effect::Closed
    }

    fn navigate_to_row(&mut self, row: usize) -> Effect {
        let Some(doc) = self
            .results
            .get(row)
            .and_then(|&position| self.index.get(position))
        else {
            return Effect::Ignored;
        };
        let href = doc.href.clone();
        trace!(row, href = %href, "navigating");
        self.navigator.navigate(&href);
        self.set_query(String::new());
        Effect::Navigated(href)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn view(&self) -> DropdownView {
        match self.state() {
            WidgetState::Closed => DropdownView::Hidden,
            WidgetState::OpenNoResults => DropdownView::NoResults {
                message: no_results_message(&self.query),
            },
            WidgetState::OpenWithResults => DropdownView::Results {
                rows: self
                    .results()
                    .into_iter()
                    .enumerate()
                    .map(|(row, doc)| {
                        let selected = self.selected == Some(row);
                        ResultRow {
                            title: doc.title.clone(),
                            description: doc.description.clone(),
                            category: doc.category.clone(),
                            href: doc.href.clone(),
                            selected,
                            highlighted: selected || self.hovered == Some(row),
                        }
                    })
                    .collect(),
            },
        }
    }
}

impl<N: Navigator + fmt::Debug> fmt::Debug for Autocomplete<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("query", &self.query)
            .field("state", &self.state())
            .field("results", &self.results)
            .field("selected", &self.selected)
            .field("navigator", &self.navigator)
            .finish_non_exhaustive()
    }
}
