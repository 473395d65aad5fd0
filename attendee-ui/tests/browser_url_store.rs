// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for the history-backed URL store.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{browser_search, history_length, set_browser_url};
use wasm_bindgen_test::*;

use attendee_ui::url_store::BrowserUrlStore;
use attendee_view::{load_state, persist_state, PersistedState, UrlStateStore};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn reads_params_from_location() {
    set_browser_url("/?search=ana%20maria&page=3");
    let store = BrowserUrlStore;
    assert_eq!(store.read("search").as_deref(), Some("ana maria"));
    assert_eq!(store.read("missing"), None);
    assert_eq!(
        load_state(&store),
        PersistedState {
            search: "ana maria".to_string(),
            page: 3,
        }
    );
    set_browser_url("/");
}

#[wasm_bindgen_test]
fn write_replaces_history_entry_and_keeps_other_params() {
    set_browser_url("/?tab=list");
    let before = history_length();

    let mut store = BrowserUrlStore;
    persist_state(&mut store, "joão", 2);

    assert_eq!(history_length(), before, "no new history entry");
    assert_eq!(store.read("tab").as_deref(), Some("list"));
    assert_eq!(
        load_state(&store),
        PersistedState {
            search: "joão".to_string(),
            page: 2,
        }
    );
    assert!(browser_search().starts_with("?tab=list&search="));
    set_browser_url("/");
}

#[wasm_bindgen_test]
fn invalid_page_in_url_loads_first_page() {
    set_browser_url("/?page=abc");
    assert_eq!(load_state(&BrowserUrlStore).page, 1);
    set_browser_url("/");
}
