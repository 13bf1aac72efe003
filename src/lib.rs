//! Incremental documentation search for the Gemini CLI All in One site.
//!
//! Two consumers share one matching rule: the autocomplete box in the
//! navigation bar (and hero section), and the `/search?q=` results page.
//! Everything runs synchronously over a small in-memory document list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌───────────┐
//! │  types.rs   │────▶│  matcher.rs  │────▶│  widget.rs   │────▶│ events.rs │
//! │ (Searchable │     │  (Matcher,   │     │(Autocomplete,│     │  (mount,  │
//! │  Document,  │     │   filter_    │     │  Key, View)  │     │  guards)  │
//! │  Index)     │     │   documents) │     └──────────────┘     └───────────┘
//! └─────────────┘     └──────────────┘
//!        ▲                   │             ┌─────────────────┐
//!        │                   └────────────▶│ results_page.rs │
//! ┌─────────────┐                          │ (grouping, ?q=) │
//! │ datasets.rs │                          └─────────────────┘
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sitesearch::{datasets, Autocomplete, Key, NavigateFn, WidgetProps};
//!
//! let mut visited = Vec::new();
//! let mut widget = Autocomplete::new(
//!     datasets::navbar(),
//!     WidgetProps::default(),
//!     NavigateFn(|href: &str| visited.push(href.to_string())),
//! );
//!
//! widget.set_query("windows");
//! widget.key_down(Key::ArrowDown);
//! widget.key_down(Key::Enter);
//! assert_eq!(widget.query(), "");
//! drop(widget);
//! assert_eq!(visited, vec!["/qa/install-windows".to_string()]);
//! ```

// Module declarations
pub mod config;
pub mod datasets;
pub mod error;
pub mod events;
mod matcher;
pub mod results_page;
pub mod testing;
mod types;
mod utils;
mod widget;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{FallbackLink, SearchConfig, MAX_RESULTS, MIN_QUERY_CHARS, RESULTS_PATH};
pub use error::{ConfigError, IndexError};
pub use events::{
    mount, DocumentEvents, ListenerGuard, MountedWidget, NodeId, PointerDown, WidgetMut,
};
pub use matcher::{filter_documents, match_documents, matches, Matcher};
pub use results_page::{
    group_by_category, query_from_url, redirect_to_results, results_href, CategoryGroup,
    ResultsPage, ResultsView,
};
pub use types::{validate_documents, DocumentIndex, SearchableDocument};
pub use utils::{char_len, fold};
pub use widget::{
    no_results_message, Autocomplete, DropdownView, Effect, Key, NavigateFn, Navigator,
    ResultRow, SearchCallback, WidgetProps, WidgetState,
};
