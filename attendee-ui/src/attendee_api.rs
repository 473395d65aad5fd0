// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attendee API client facade for the attendee-ui.

use crate::constants::attendee_api_client;
use attendee_client::ApiError;
use attendee_types::{AttendeePageQuery, AttendeePageResponse};
use attendee_view::{FetchError, FetchErrorKind};

fn client() -> Result<attendee_client::AttendeeApiClient, ApiError> {
    attendee_api_client().map_err(ApiError::Config)
}

async fn list_attendees(
    event_id: &str,
    query: &AttendeePageQuery,
) -> Result<AttendeePageResponse, ApiError> {
    let client = client()?;
    log::debug!("GET {}/events/{event_id}/attendees", client.base_url());
    client.list_attendees(event_id, query).await
}

/// Fetch one page of attendees, translating client errors into the view's
/// error taxonomy.
pub async fn fetch_attendee_page(
    event_id: &str,
    query: &AttendeePageQuery,
) -> Result<AttendeePageResponse, FetchError> {
    log::info!(
        "Fetching attendees: event={event_id} pageIndex={} query={:?}",
        query.page_index,
        query.query
    );
    match list_attendees(event_id, query).await {
        Ok(page) => {
            log::info!(
                "Fetched {} attendees (total {})",
                page.attendees.len(),
                page.total
            );
            Ok(page)
        }
        Err(e) => {
            match e.status() {
                Some(status) => log::error!("Failed to fetch attendees (HTTP {status}): {e}"),
                None => log::error!("Failed to fetch attendees: {e}"),
            }
            Err(to_fetch_error(&e))
        }
    }
}

pub fn to_fetch_error(err: &ApiError) -> FetchError {
    let kind = match err {
        ApiError::Network(_) => FetchErrorKind::Network,
        ApiError::Decode(_) => FetchErrorKind::MalformedResponse,
        ApiError::Config(_) => FetchErrorKind::Config,
        _ => match err.status() {
            Some(404) => FetchErrorKind::NotFound,
            Some(status) => FetchErrorKind::Server { status },
            None => FetchErrorKind::Network,
        },
    };
    FetchError::new(kind, err.to_string())
}
