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

//! Error types for the attendees API client.

use thiserror::Error;

/// Errors returned by [`AttendeeApiClient`](crate::AttendeeApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request parameters (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The event or endpoint does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status, with the raw body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success status whose body is not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configuration error (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status associated with the error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest(_) => Some(400),
            ApiError::NotFound(_) => Some(404),
            ApiError::ServerError { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) | ApiError::Config(_) => None,
        }
    }
}
