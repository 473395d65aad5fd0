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

//! Cross-platform REST client for the event attendees API.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use attendee_client::AttendeeApiClient;
//! use attendee_client::attendee_types::AttendeePageQuery;
//!
//! # async fn example() -> Result<(), attendee_client::ApiError> {
//! let client = AttendeeApiClient::new("http://localhost:3333");
//! let page = client
//!     .list_attendees("10891b77-1075-4f54-a028-005df440e903", &AttendeePageQuery::new(0, "ana"))
//!     .await?;
//! println!("{} of {} attendees", page.attendees.len(), page.total);
//! # Ok(())
//! # }
//! ```

pub mod attendees;
pub mod error;

pub use attendee_types;
pub use error::ApiError;

use attendee_types::ErrorBody;
use reqwest::Client;

/// A typed REST client for the attendees API.
///
/// All methods return strongly-typed responses from [`attendee_types`] and
/// map HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct AttendeeApiClient {
    base_url: String,
    http: Client,
}

impl AttendeeApiClient {
    /// Create a new client pointing at the given API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:3333"`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Create a client that reuses an existing [`reqwest::Client`]
    /// (custom timeouts, proxies or TLS settings).
    pub fn with_http_client(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request for the given path.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a bare JSON body on success, or map the status to [`ApiError`].
///
/// The body is read as text first so that transport failures
/// ([`ApiError::Network`]) and shape mismatches ([`ApiError::Decode`]) stay
/// distinguishable.
pub(crate) async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => {
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        }
        400 => {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            Err(ApiError::BadRequest(message))
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}
