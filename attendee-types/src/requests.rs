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

//! Request types for the attendees endpoint.
//!
//! The endpoint takes query parameters only; these types serialize into the
//! query string through `reqwest::RequestBuilder::query`.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /events/{event_id}/attendees`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AttendeePageQuery {
    /// Zero-based page number.
    pub page_index: u32,

    /// Free-text filter. Never sent when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl AttendeePageQuery {
    /// Build a query, dropping an empty search string.
    pub fn new(page_index: u32, search: &str) -> Self {
        Self {
            page_index,
            query: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}
