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

//! Shared API types for the event attendees endpoint.
//!
//! This crate defines the wire contract between the attendees backend and
//! its consumers (the REST client and the web UI). It is intentionally
//! framework-agnostic: no HTTP client, no UI types.

pub mod error;
pub mod requests;
pub mod responses;

pub use error::ErrorBody;
pub use requests::AttendeePageQuery;
pub use responses::{Attendee, AttendeePageResponse};
