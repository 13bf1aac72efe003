//! WebAssembly bindings for the search box.
//!
//! `SearchBox` wraps one [`Autocomplete`] for a page component. The page owns
//! the DOM: it forwards input, key, pointer and click events here and renders
//! whatever `view()` returns. Outside-click detection stays on the JS side
//! (it knows the element tree) and arrives as `pointerDownOutside()`.

use js_sys::Function;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::SearchConfig;
use crate::types::{DocumentIndex, SearchableDocument};
use crate::widget::{Autocomplete, Effect, Key, Navigator, SearchCallback};

/// Routes through a JS `navigate(href)` function (the router's push).
struct JsNavigator {
    navigate: Function,
}

impl Navigator for JsNavigator {
    fn navigate(&mut self, href: &str) {
        // Router failures are the router's business
        let _ = self.navigate.call1(&JsValue::NULL, &JsValue::from_str(href));
    }
}

#[wasm_bindgen]
pub struct SearchBox {
    inner: Autocomplete<JsNavigator>,
}

#[wasm_bindgen]
impl SearchBox {
    /// `documents` is an array of `{title, description, category, href}`.
    /// `config` may be `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        documents: JsValue,
        navigate: Function,
        on_search: Option<Function>,
        config: JsValue,
    ) -> Result<SearchBox, JsValue> {
        let docs: Vec<SearchableDocument> = from_value(documents).map_err(|e| e.to_string())?;
        let index = DocumentIndex::new(docs).map_err(|e| e.to_string())?;
        let config: SearchConfig = if config.is_undefined() || config.is_null() {
            SearchConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        config.validate().map_err(|e| e.to_string())?;

        let on_search: Option<SearchCallback> = on_search.map(|callback| {
            Box::new(move |query: &str| {
                let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(query));
            }) as SearchCallback
        });

        Ok(SearchBox {
            inner: Autocomplete::from_config(index, &config, on_search, JsNavigator { navigate }),
        })
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: String) {
        self.inner.set_query(query);
    }

    #[wasm_bindgen(getter)]
    pub fn query(&self) -> String {
        self.inner.query().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn placeholder(&self) -> String {
        self.inner.placeholder().to_string()
    }

    /// Takes `KeyboardEvent.key`. Returns true when the caller should
    /// `preventDefault()`.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        dom_key_down(&mut self.inner, key)
    }

    #[wasm_bindgen(js_name = clickResult)]
    pub fn click_result(&mut self, row: usize) -> bool {
        navigated(&self.inner.click_result(row))
    }

    /// `undefined` clears the highlight.
    pub fn hover(&mut self, row: Option<usize>) {
        self.inner.hover(row);
    }

    /// The search button.
    pub fn submit(&mut self) -> bool {
        matches!(self.inner.submit(), Effect::Searched(_))
    }

    #[wasm_bindgen(js_name = pointerDownOutside)]
    pub fn pointer_down_outside(&mut self) {
        self.inner.pointer_down_outside();
    }

    /// `-1` when nothing is selected.
    #[wasm_bindgen(getter, js_name = selectedIndex)]
    pub fn selected_index(&self) -> i32 {
        js_selected_index(self.inner.selected())
    }

    /// `"closed"`, `"openWithResults"` or `"openNoResults"`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.state()).map_err(|e| e.to_string().into())
    }

    /// `{kind: "hidden"}`, `{kind: "noResults", message}` or
    /// `{kind: "results", rows: [...]}`.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.view()).map_err(|e| e.to_string().into())
    }
}

// =============================================================================
// JS VALUE MAPPINGS
// =============================================================================

/// Feed a `KeyboardEvent.key` to the widget. True means `preventDefault()`.
fn dom_key_down<N: Navigator>(widget: &mut Autocomplete<N>, key: &str) -> bool {
    widget.key_down(Key::from_dom_key(key)).prevents_default()
}

fn navigated(effect: &Effect) -> bool {
    matches!(effect, Effect::Navigated(_))
}

/// `selectedIndex` value: the row, or `-1` for no selection.
fn js_selected_index(selected: Option<usize>) -> i32 {
    selected.map_or(-1, |row| i32::try_from(row).unwrap_or(i32::MAX))
}
