/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

//! Address-bar persistence for the `search` and `page` fields.
//!
//! The URL is read once when the view mounts and written on every change
//! afterwards. External edits to the URL after mount are not observed.

use url::Url;

pub const SEARCH_PARAM: &str = "search";
pub const PAGE_PARAM: &str = "page";

/// Key/value view of the current location's query string.
///
/// `write` must replace the current history entry in place: it never adds a
/// navigation entry and never reloads the document.
pub trait UrlStateStore {
    fn read(&self, field: &str) -> Option<String>;
    fn write(&mut self, field: &str, value: &str);
}

/// The part of the view state that survives a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedState {
    pub search: String,
    pub page: u32,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// Seed the view state from the store. Missing or invalid pages become 1.
pub fn load_state(store: &impl UrlStateStore) -> PersistedState {
    PersistedState {
        search: store.read(SEARCH_PARAM).unwrap_or_default(),
        page: parse_page(store.read(PAGE_PARAM).as_deref()),
    }
}

/// Write both fields, `search` first.
pub fn persist_state(store: &mut impl UrlStateStore, search: &str, page: u32) {
    store.write(SEARCH_PARAM, search);
    store.write(PAGE_PARAM, &page.to_string());
}

/// Parse a 1-indexed page number; anything that is not a positive integer
/// falls back to the first page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// First value of `key` in the query string.
pub fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Set `key` to `value`, keeping every other parameter and its position.
///
/// The first existing occurrence is replaced and any duplicates dropped;
/// a new key is appended at the end.
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let mut replaced = false;
    pairs.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        if replaced {
            return false;
        }
        *v = value.to_string();
        replaced = true;
        true
    });
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
}

/// In-memory store for headless use and tests.
///
/// Every write is also appended to [`writes`](Self::writes) so callers can
/// assert on the sequence of URLs the view produced.
#[derive(Debug, Clone)]
pub struct MemoryUrlStore {
    current: Url,
    writes: Vec<Url>,
}

impl MemoryUrlStore {
    pub fn new(url: Url) -> Self {
        Self {
            current: url,
            writes: Vec::new(),
        }
    }

    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }

    pub fn current(&self) -> &Url {
        &self.current
    }

    pub fn writes(&self) -> &[Url] {
        &self.writes
    }
}

impl UrlStateStore for MemoryUrlStore {
    fn read(&self, field: &str) -> Option<String> {
        query_param(&self.current, field)
    }

    fn write(&mut self, field: &str, value: &str) {
        set_query_param(&mut self.current, field, value);
        self.writes.push(self.current.clone());
    }
}
