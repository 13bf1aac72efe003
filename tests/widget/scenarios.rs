//! End-to-end scenarios for the navigation bar search box.

use crate::common::{many_matches_fixture, recording_widget, windows_fixture};
use sitesearch::{datasets, DropdownView, Effect, Key, WidgetState};

#[test]
fn windows_query_finds_one_document() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("windows");

    let titles: Vec<&str> = widget.results().iter().map(|doc| doc.title.as_str()).collect();
    assert_eq!(titles, vec!["How to install Gemini CLI on Windows"]);
    assert_eq!(widget.state(), WidgetState::OpenWithResults);
}

#[test]
fn windows_enter_without_arrow_delegates_search() {
    let (mut widget, navigator, searches) = recording_widget(windows_fixture());
    widget.set_query("windows");
    widget.key_down(Key::Enter);

    assert_eq!(*searches.borrow(), vec!["windows".to_string()]);
    assert!(navigator.visits().is_empty());
}

#[test]
fn windows_arrow_then_enter_navigates_and_clears() {
    let (mut widget, navigator, _) = recording_widget(windows_fixture());
    widget.set_query("windows");
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::Enter);

    assert_eq!(navigator.visits(), vec!["/qa/install-windows".to_string()]);
    assert_eq!(widget.query(), "");
}

#[test]
fn unmatched_query_shows_no_results_message() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("xyzabc123");

    assert_eq!(widget.state(), WidgetState::OpenNoResults);
    assert_eq!(
        widget.view(),
        DropdownView::NoResults {
            message: "No results found for \"xyzabc123\"".to_string()
        }
    );
}

#[test]
fn broad_query_is_capped_at_five() {
    let (mut widget, _, _) = recording_widget(many_matches_fixture());
    widget.set_query("in");

    assert_eq!(widget.result_count(), 5);
    let titles: Vec<&str> = widget.results().iter().map(|doc| doc.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Installing on Windows",
            "Installing on macOS",
            "Installing on Linux",
            "Signing in",
            "Pricing tiers",
        ]
    );
}

#[test]
fn escape_while_open_keeps_query() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("windows");
    widget.key_down(Key::Escape);

    assert_eq!(widget.state(), WidgetState::Closed);
    assert_eq!(widget.query(), "windows");
    assert_eq!(widget.view(), DropdownView::Hidden);
}

#[test]
fn deleting_back_to_one_character_closes() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    for query in ["w", "wi", "win", "wi", "w", ""] {
        widget.set_query(query);
    }
    assert_eq!(widget.state(), WidgetState::Closed);
    assert_eq!(widget.result_count(), 0);
}

#[test]
fn navbar_dataset_routes_windows_guide() {
    let (mut widget, navigator, _) = recording_widget(datasets::navbar());
    widget.set_query("Windows");
    widget.key_down(Key::ArrowDown);
    assert_eq!(
        widget.key_down(Key::Enter),
        Effect::Navigated("/qa/install-windows".to_string())
    );
    assert_eq!(navigator.visits(), vec!["/qa/install-windows".to_string()]);
}
