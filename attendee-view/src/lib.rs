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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Headless view model for the attendee list.
//!
//! Everything the attendee list needs that does not touch the DOM lives here:
//! the [`ViewState`] and its transitions, the URL state binding, fetch
//! sequencing, pagination math, relative timestamps and display labels.
//! The web UI drives these types from Dioxus signals; tests drive them
//! directly with a [`MemoryUrlStore`].

pub mod labels;
pub mod relative_time;
pub mod sequencer;
pub mod state;
pub mod url_store;

pub use labels::{Labels, Locale};
pub use relative_time::format_relative;
pub use sequencer::{FetchSequencer, RequestTicket};
pub use state::{FetchError, FetchErrorKind, ViewState, DEFAULT_PAGE_SIZE};
pub use url_store::{
    load_state, persist_state, MemoryUrlStore, PersistedState, UrlStateStore, PAGE_PARAM,
    SEARCH_PARAM,
};
