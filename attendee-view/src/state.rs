/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! View state for the attendee list.
//!
//! # Lifecycle
//! - Created at mount, seeded from the URL via [`ViewState::from_store`]
//! - `search`/`page` change through the setters, which also write the URL
//! - Each change to the derived [`request`](ViewState::request) is followed by
//!   [`begin_fetch`](ViewState::begin_fetch)
//! - Fetch outcomes are applied with [`apply_page`](ViewState::apply_page) /
//!   [`apply_error`](ViewState::apply_error), which ignore superseded tickets

use std::collections::BTreeSet;

use attendee_types::{Attendee, AttendeePageQuery, AttendeePageResponse};
use thiserror::Error;

use crate::sequencer::{FetchSequencer, RequestTicket};
use crate::url_store::{load_state, PersistedState, UrlStateStore, PAGE_PARAM, SEARCH_PARAM};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never produced a response.
    Network,
    /// The response body was not the expected JSON.
    MalformedResponse,
    /// The event does not exist.
    NotFound,
    /// Any other non-success status.
    Server { status: u16 },
    /// The client could not be configured.
    Config,
}

/// A failed fetch, kept on the view until the next request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    search: String,
    page: u32,
    page_size: u32,
    attendees: Vec<Attendee>,
    total: u64,
    loading: bool,
    error: Option<FetchError>,
    selected: BTreeSet<String>,
    sequencer: FetchSequencer,
}

impl ViewState {
    pub fn new(initial: PersistedState, page_size: u32) -> Self {
        Self {
            search: initial.search,
            page: initial.page.max(1),
            page_size: page_size.max(1),
            attendees: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            selected: BTreeSet::new(),
            sequencer: FetchSequencer::new(),
        }
    }

    /// Seed `search` and `page` from the URL. This is the only time the URL
    /// flows into the state.
    pub fn from_store(store: &impl UrlStateStore, page_size: u32) -> Self {
        Self::new(load_state(store), page_size)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Request parameters for the current `search`/`page`.
    pub fn request(&self) -> AttendeePageQuery {
        AttendeePageQuery::new(self.page - 1, &self.search)
    }

    /// Number of pages reported by the server total.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Page count for display; an empty result still reads "page 1 of 1".
    pub fn display_total_pages(&self) -> u64 {
        self.total_pages().max(1)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// The page number itself is capped at `u32::MAX`, whatever the server
    /// total implies.
    pub fn can_go_next(&self) -> bool {
        self.page < u32::MAX && u64::from(self.page) < self.total_pages()
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Replace the search text and restart from the first page.
    pub fn set_search(&mut self, store: &mut impl UrlStateStore, search: &str) {
        store.write(SEARCH_PARAM, search);
        self.search = search.to_string();
        self.set_page(store, 1);
    }

    /// Jump to `page`, clamped to at least 1.
    pub fn set_page(&mut self, store: &mut impl UrlStateStore, page: u32) {
        let page = page.max(1);
        store.write(PAGE_PARAM, &page.to_string());
        self.page = page;
    }

    /// Returns `false` (and changes nothing) when already on the first page.
    pub fn first_page(&mut self, store: &mut impl UrlStateStore) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.set_page(store, 1);
        true
    }

    pub fn previous_page(&mut self, store: &mut impl UrlStateStore) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.set_page(store, self.page - 1);
        true
    }

    pub fn next_page(&mut self, store: &mut impl UrlStateStore) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.set_page(store, self.page.saturating_add(1));
        true
    }

    pub fn last_page(&mut self, store: &mut impl UrlStateStore) -> bool {
        if !self.can_go_next() {
            return false;
        }
        let last = u32::try_from(self.total_pages()).unwrap_or(u32::MAX);
        self.set_page(store, last);
        true
    }

    // ---------------------------------------------------------------------
    // Fetch lifecycle
    // ---------------------------------------------------------------------

    /// Issue a ticket for the current request and mark the view as loading.
    pub fn begin_fetch(&mut self) -> (RequestTicket, AttendeePageQuery) {
        let ticket = self.sequencer.issue();
        self.loading = true;
        self.error = None;
        (ticket, self.request())
    }

    /// Replace the displayed page. Returns `false` if `ticket` was superseded.
    pub fn apply_page(&mut self, ticket: RequestTicket, response: AttendeePageResponse) -> bool {
        if !self.sequencer.is_current(ticket) {
            log::debug!(
                "Discarding stale attendee page (ticket {}, latest {})",
                ticket.sequence(),
                self.latest_sequence()
            );
            return false;
        }
        self.attendees = response.attendees;
        self.total = response.total;
        self.loading = false;
        self.selected.clear();
        true
    }

    fn latest_sequence(&self) -> u64 {
        self.sequencer.latest().map_or(0, |t| t.sequence())
    }

    /// Record a failure while keeping the previous page visible.
    pub fn apply_error(&mut self, ticket: RequestTicket, error: FetchError) -> bool {
        if !self.sequencer.is_current(ticket) {
            log::debug!(
                "Discarding stale attendee error (ticket {}, latest {}): {error}",
                ticket.sequence(),
                self.latest_sequence()
            );
            return false;
        }
        self.error = Some(error);
        self.loading = false;
        true
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn all_selected(&self) -> bool {
        !self.attendees.is_empty() && self.selected.len() == self.attendees.len()
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) && self.attendees.iter().any(|a| a.id == id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every row on the page, or clear the selection if all are selected.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.attendees.iter().map(|a| a.id.clone()).collect();
        }
    }
}
