// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search box state machine.
//!
//! Feeds arbitrary queries, key presses, clicks and hovers to one widget and
//! checks the state invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitesearch::datasets::navbar;
use sitesearch::testing::RecordingNavigator;
use sitesearch::{char_len, Autocomplete, Effect, Key, WidgetProps, WidgetState, MAX_RESULTS};

#[derive(Debug, Arbitrary)]
enum Step {
    Type(String),
    Down,
    Up,
    Enter,
    Escape,
    Click(u8),
    Hover(Option<u8>),
    Submit,
    Outside,
}

fuzz_target!(|steps: Vec<Step>| {
    let navigator = RecordingNavigator::new();
    let props = WidgetProps::default().with_on_search(|_: &str| {});
    let mut widget = Autocomplete::new(navbar(), props, navigator.clone());

    for step in steps {
        let before = navigator.visits().len();
        let effect = match step {
            Step::Type(query) => {
                widget.set_query(query);
                Effect::Ignored
            }
            Step::Down => widget.key_down(Key::ArrowDown),
            Step::Up => widget.key_down(Key::ArrowUp),
            Step::Enter => widget.key_down(Key::Enter),
            Step::Escape => widget.key_down(Key::Escape),
            Step::Click(row) => widget.click_result(row as usize),
            Step::Hover(row) => {
                widget.hover(row.map(usize::from));
                Effect::Ignored
            }
            Step::Submit => widget.submit(),
            Step::Outside => widget.pointer_down_outside(),
        };

        assert!(widget.result_count() <= MAX_RESULTS);
        if let Some(row) = widget.selected() {
            assert!(row < widget.result_count());
        }
        if widget.state() != WidgetState::Closed {
            assert!(char_len(widget.query()) >= 2);
        }
        match effect {
            Effect::Navigated(_) => {
                assert_eq!(widget.query(), "");
                assert_eq!(navigator.visits().len(), before + 1);
            }
            _ => assert_eq!(navigator.visits().len(), before),
        }
    }
});
