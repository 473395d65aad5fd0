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

//! Attendee listing endpoint: `GET /events/{event_id}/attendees`.

use attendee_types::{AttendeePageQuery, AttendeePageResponse};

use crate::error::ApiError;
use crate::{parse_json_response, AttendeeApiClient};

impl AttendeeApiClient {
    /// Fetch one page of attendees for an event.
    ///
    /// Calls `GET /events/{event_id}/attendees?pageIndex={n}[&query={s}]`.
    /// `query` is only sent when the search text is non-empty.
    pub async fn list_attendees(
        &self,
        event_id: &str,
        query: &AttendeePageQuery,
    ) -> Result<AttendeePageResponse, ApiError> {
        log::debug!(
            "GET attendees event={event_id} pageIndex={} query={:?}",
            query.page_index,
            query.query
        );
        let response = self.attendees_request(event_id, query).send().await?;
        parse_json_response(response).await
    }

    pub(crate) fn attendees_request(
        &self,
        event_id: &str,
        query: &AttendeePageQuery,
    ) -> reqwest::RequestBuilder {
        let path = format!("/events/{event_id}/attendees");
        self.get(&path).query(query)
    }
}
