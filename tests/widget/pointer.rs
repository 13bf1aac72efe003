//! Pointer input: row clicks, hover highlight and the search button.

use crate::common::{recording_widget, windows_fixture};
use sitesearch::{DropdownView, Effect, Key, WidgetState};

#[test]
fn clicking_a_row_navigates_and_clears() {
    let (mut widget, navigator, _) = recording_widget(windows_fixture());
    widget.set_query("in");

    let effect = widget.click_result(2);

    assert_eq!(effect, Effect::Navigated("/tutorials/mcp".to_string()));
    assert_eq!(navigator.visits(), vec!["/tutorials/mcp".to_string()]);
    assert_eq!(widget.query(), "");
    assert_eq!(widget.state(), WidgetState::Closed);
}

#[test]
fn click_ignores_keyboard_selection() {
    let (mut widget, navigator, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);
    widget.click_result(3);
    assert_eq!(navigator.visits(), vec!["/troubleshooting/quota".to_string()]);
}

#[test]
fn click_while_closed_is_ignored() {
    let (mut widget, navigator, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::Escape);
    assert_eq!(widget.click_result(0), Effect::Ignored);
    assert!(navigator.visits().is_empty());
    assert_eq!(widget.query(), "in");
}

#[test]
fn hover_highlights_without_selecting() {
    let (mut widget, _, _) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);
    widget.hover(Some(2));

    assert_eq!(widget.selected(), Some(0));
    let DropdownView::Results { rows } = widget.view() else {
        panic!("expected rows");
    };
    let highlighted: Vec<bool> = rows.iter().map(|row| row.highlighted).collect();
    let selected: Vec<bool> = rows.iter().map(|row| row.selected).collect();
    assert_eq!(highlighted, vec![true, false, true, false]);
    assert_eq!(selected, vec![true, false, false, false]);
}

#[test]
fn hover_then_enter_uses_keyboard_selection() {
    let (mut widget, navigator, searches) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.hover(Some(1));
    widget.key_down(Key::Enter);
    assert!(navigator.visits().is_empty());
    assert_eq!(*searches.borrow(), vec!["in".to_string()]);
}

#[test]
fn search_button_delegates_even_with_a_selection() {
    let (mut widget, navigator, searches) = recording_widget(windows_fixture());
    widget.set_query("in");
    widget.key_down(Key::ArrowDown);

    assert_eq!(widget.submit(), Effect::Searched("in".to_string()));
    assert!(navigator.visits().is_empty());
    assert_eq!(*searches.borrow(), vec!["in".to_string()]);
    assert_eq!(widget.query(), "in");
}

#[test]
fn search_button_with_empty_query_is_ignored() {
    let (mut widget, _, searches) = recording_widget(windows_fixture());
    assert_eq!(widget.submit(), Effect::Ignored);
    assert!(searches.borrow().is_empty());
}
