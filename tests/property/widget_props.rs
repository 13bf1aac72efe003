//! Widget properties under arbitrary event sequences.

use crate::common::recording_widget;
use crate::oracles::{index_strategy, query_strategy};
use proptest::prelude::*;
use sitesearch::{char_len, Effect, Key, Matcher, WidgetState};

#[derive(Debug, Clone)]
enum Event {
    Type(String),
    Press(Key),
    Click(usize),
    Hover(Option<usize>),
    Submit,
    OutsideClick,
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        query_strategy().prop_map(Event::Type),
        prop_oneof![
            Just(Key::ArrowDown),
            Just(Key::ArrowUp),
            Just(Key::Enter),
            Just(Key::Escape),
            Just(Key::Other),
        ]
        .prop_map(Event::Press),
        (0usize..7).prop_map(Event::Click),
        proptest::option::of(0usize..7).prop_map(Event::Hover),
        Just(Event::Submit),
        Just(Event::OutsideClick),
    ]
}

proptest! {
    #[test]
    fn prop_short_queries_close(index in index_strategy(), query in "(.)?") {
        let (mut widget, _, _) = recording_widget(index);
        widget.set_query(query);
        prop_assert_eq!(widget.state(), WidgetState::Closed);
        prop_assert_eq!(widget.result_count(), 0);
    }

    #[test]
    fn prop_invariants_hold_for_any_sequence(
        index in index_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let (mut widget, navigator, _) = recording_widget(index);
        for event in events {
            let visits_before = navigator.visits().len();
            let selected_before = widget.selected();
            let rows_before: Vec<String> =
                widget.results().iter().map(|doc| doc.href.clone()).collect();

            let effect = match event {
                Event::Type(query) => {
                    widget.set_query(query);
                    prop_assert_eq!(widget.selected(), None);
                    Effect::Ignored
                }
                Event::Press(key) => widget.key_down(key),
                Event::Click(row) => widget.click_result(row),
                Event::Hover(row) => {
                    widget.hover(row);
                    prop_assert_eq!(widget.selected(), selected_before);
                    Effect::Ignored
                }
                Event::Submit => widget.submit(),
                Event::OutsideClick => widget.pointer_down_outside(),
            };

            // Selection bounds
            if let Some(row) = widget.selected() {
                prop_assert!(row < widget.result_count());
            }
            // Open state agrees with the query
            if widget.is_open() {
                prop_assert!(char_len(widget.query()) >= 2);
            }
            // Navigation clears the query and routes exactly once
            match effect {
                Effect::Navigated(href) => {
                    prop_assert_eq!(widget.query(), "");
                    prop_assert_eq!(widget.state(), WidgetState::Closed);
                    let visits = navigator.visits();
                    prop_assert_eq!(visits.len(), visits_before + 1);
                    prop_assert_eq!(visits.last(), Some(&href));
                    prop_assert!(rows_before.contains(&href));
                }
                _ => prop_assert_eq!(navigator.visits().len(), visits_before),
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_navigation_closes_for_any_limits(
        index in index_strategy(),
        min_query_chars in 0usize..4,
        max_results in 0usize..7,
        query in query_strategy(),
        presses in 0usize..8,
        click in any::<bool>(),
    ) {
        let (widget, navigator, _) = recording_widget(index);
        let mut widget = widget.with_matcher(Matcher::new(min_query_chars, max_results));
        widget.set_query(query);
        for _ in 0..presses {
            widget.key_down(Key::ArrowDown);
        }
        let effect = if click {
            widget.click_result(presses.saturating_sub(1))
        } else {
            widget.key_down(Key::Enter)
        };
        if let Effect::Navigated(href) = effect {
            prop_assert_eq!(widget.query(), "");
            prop_assert_eq!(widget.state(), WidgetState::Closed);
            prop_assert_eq!(navigator.visits(), vec![href]);
        }
    }
}
