//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sitesearch::testing::{index_of, make_doc, recording_search_callback};
use sitesearch::{Autocomplete, DocumentIndex, WidgetProps};

// Re-export canonical test utilities from sitesearch::testing
pub use sitesearch::testing::{windows_fixture, RecordingNavigator};

/// A widget over `index` with a recording navigator and a recording search
/// callback. Returns the widget, a handle on the navigator log and the
/// search log.
pub fn recording_widget(
    index: DocumentIndex,
) -> (
    Autocomplete<RecordingNavigator>,
    RecordingNavigator,
    Rc<RefCell<Vec<String>>>,
) {
    let navigator = RecordingNavigator::new();
    let (callback, searches) = recording_search_callback();
    let props = WidgetProps {
        on_search: Some(callback),
        ..WidgetProps::default()
    };
    let widget = Autocomplete::new(index, props, navigator.clone());
    (widget, navigator, searches)
}

/// Seven documents that all contain "in".
pub fn many_matches_fixture() -> DocumentIndex {
    index_of(vec![
        make_doc("Installing on Windows", "Installation"),
        make_doc("Installing on macOS", "Installation"),
        make_doc("Installing on Linux", "Installation"),
        make_doc("Signing in", "Getting Started"),
        make_doc("Pricing tiers", "Usage"),
        make_doc("Writing prompts", "Usage"),
        make_doc("Binding shortcuts", "Configuration"),
    ])
}
