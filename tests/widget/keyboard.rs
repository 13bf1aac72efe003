//! Keyboard navigation: clamping, deselection, Enter and Escape.

use crate::common::{recording_widget, windows_fixture};
use sitesearch::{DropdownView, Effect, Key, Matcher, WidgetState};

#[test]
fn arrow_down_selects_first_row() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    assert_eq!(widget.result_count(), 4);

    assert_eq!(widget.key_down(Key::ArrowDown), Effect::Moved);
    assert_eq!(widget.selected(), Some(0));
}

#[test]
fn arrow_down_clamps_at_last_row() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    for _ in 0..10 {
        widget.key_down(Key::ArrowDown);
    }
    assert_eq!(widget.selected(), Some(3));
}

#[test]
fn arrow_up_from_first_row_deselects_without_wrapping() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::ArrowUp);
    assert_eq!(widget.selected(), None);

    widget.key_down(Key::ArrowUp);
    assert_eq!(widget.selected(), None);
}

#[test]
fn arrows_walk_back_and_forth() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::ArrowUp);
    assert_eq!(widget.selected(), Some(1));
}

#[test]
fn arrows_do_nothing_without_rows() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("xyzabc123");
    assert_eq!(widget.state(), WidgetState::OpenNoResults);
    assert_eq!(widget.key_down(Key::ArrowDown), Effect::Ignored);
    assert_eq!(widget.selected(), None);
}

#[test]
fn enter_with_selection_navigates_and_clears_query() {
    let (mut widget, navigator, searches) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::ArrowDown);

    let effect = widget.key_down(Key::Enter);

    assert_eq!(effect, Effect::Navigated("/qa/authentication".to_string()));
    assert_eq!(navigator.visits(), vec!["/qa/authentication".to_string()]);
    assert!(searches.borrow().is_empty());
    assert_eq!(widget.query(), "");
    assert_eq!(widget.state(), WidgetState::Closed);
    assert_eq!(widget.selected(), None);
    assert_eq!(widget.result_count(), 0);
}

#[test]
fn enter_without_selection_delegates_and_keeps_query() {
    let (mut widget, navigator, searches) = recording_widget(windows_fixture());
    widget.set_query("mcp");

    let effect = widget.key_down(Key::Enter);

    assert_eq!(effect, Effect::Searched("mcp".to_string()));
    assert_eq!(*searches.borrow(), vec!["mcp".to_string()]);
    assert!(navigator.visits().is_empty());
    assert_eq!(widget.query(), "mcp");
    assert_eq!(widget.state(), WidgetState::OpenWithResults);
}

#[test]
fn enter_after_no_results_still_delegates() {
    let (mut widget, _, searches) = recording_widget(windows_fixture());
    widget.set_query("xyzabc123");
    assert_eq!(
        widget.key_down(Key::Enter),
        Effect::Searched("xyzabc123".to_string())
    );
    assert_eq!(searches.borrow().len(), 1);
}

#[test]
fn escape_closes_and_keeps_query() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);

    assert_eq!(widget.key_down(Key::Escape), Effect::Closed);
    assert_eq!(widget.state(), WidgetState::Closed);
    assert_eq!(widget.selected(), None);
    assert_eq!(widget.query(), "in");
}

#[test]
fn escape_while_closed_is_ignored() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    assert_eq!(widget.key_down(Key::Escape), Effect::Ignored);
}

#[test]
fn enter_after_escape_delegates_instead_of_navigating() {
    let (mut widget, navigator, searches) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);
    widget.key_down(Key::Escape);

    assert_eq!(widget.key_down(Key::Enter), Effect::Searched("in".to_string()));
    assert!(navigator.visits().is_empty());
    assert_eq!(searches.borrow().len(), 1);
}

#[test]
fn typing_after_escape_reopens() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::Escape);
    widget.set_query("ins");
    assert_eq!(widget.state(), WidgetState::OpenWithResults);
}

#[test]
fn other_keys_are_ignored() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);
    assert_eq!(widget.key_down(Key::Other), Effect::Ignored);
    assert_eq!(widget.selected(), Some(0));
}

#[test]
fn navigation_closes_even_with_zero_threshold() {
    let (widget, navigator, _) = recording_widget(windows_fixture());
    let mut widget = widget.with_matcher(Matcher::new(0, 5));
    widget.set_query("windows");
    widget.key_down(Key::ArrowDown);

    assert_eq!(
        widget.key_down(Key::Enter),
        Effect::Navigated("/qa/install-windows".to_string())
    );
    assert_eq!(widget.query(), "");
    assert_eq!(widget.state(), WidgetState::Closed);
    assert_eq!(widget.result_count(), 0);
    assert_eq!(navigator.visits(), vec!["/qa/install-windows".to_string()]);
}

#[test]
fn zero_cap_still_shows_a_match() {
    let (widget, _, _) = recording_widget(windows_fixture());
    let mut widget = widget.with_matcher(Matcher::new(2, 0));
    widget.set_query("windows");

    assert_eq!(widget.state(), WidgetState::OpenWithResults);
    assert!(matches!(widget.view(), DropdownView::Results { rows } if rows.len() == 1));
}
