// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browser-backed URL state store.
//!
//! Reads `window.location` and rewrites the query string with
//! `history.replaceState`, so the address bar tracks the view without adding
//! history entries or reloading the page.

use attendee_view::url_store::{query_param, set_query_param};
use attendee_view::UrlStateStore;
use url::Url;
use wasm_bindgen::JsValue;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BrowserUrlStore;

impl BrowserUrlStore {
    fn current_url() -> Option<Url> {
        let href = web_sys::window()?.location().href().ok()?;
        Url::parse(&href).ok()
    }
}

impl UrlStateStore for BrowserUrlStore {
    fn read(&self, field: &str) -> Option<String> {
        query_param(&Self::current_url()?, field)
    }

    fn write(&mut self, field: &str, value: &str) {
        let Some(mut url) = Self::current_url() else {
            log::warn!("Cannot read window.location; not persisting {field}");
            return;
        };
        set_query_param(&mut url, field, value);

        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            log::warn!("History API unavailable; not persisting {field}");
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str())) {
            log::warn!("Failed to update URL with {field}={value}: {e:?}");
        }
    }
}
