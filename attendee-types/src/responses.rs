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

//! Response types for the attendees endpoint.
//!
//! Unlike enveloped APIs, the attendees endpoint returns its payload as the
//! top-level JSON object:
//!
//! ```json
//! { "attendees": [ { "id": "...", "name": "...", ... } ], "total": 35 }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A person registered for the event.
///
/// Owned by the backend; the UI only ever holds a read-only copy of one page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Attendee identifier. Some backends emit integers, others UUID strings.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// When the attendee signed up for the event.
    pub created_at: DateTime<Utc>,
    /// When the attendee checked in, or `null`/absent if they have not.
    #[serde(default)]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn has_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

/// Response payload for `GET /events/{event_id}/attendees`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AttendeePageResponse {
    pub attendees: Vec<Attendee>,
    /// Total number of attendees matching the query across all pages.
    /// Missing or `null` is treated as zero.
    #[serde(default, deserialize_with = "total_or_zero")]
    pub total: u64,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

fn total_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_with_total() {
        let body = r#"{
            "attendees": [
                {
                    "id": "7c1b3f0e",
                    "name": "Ana Souza",
                    "email": "ana@example.com",
                    "createdAt": "2024-04-01T12:00:00.000Z",
                    "checkedInAt": "2024-04-02T09:30:00Z"
                }
            ],
            "total": 35
        }"#;
        let page: AttendeePageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 35);
        assert_eq!(page.attendees.len(), 1);
        let ana = &page.attendees[0];
        assert_eq!(ana.id, "7c1b3f0e");
        assert_eq!(ana.email, "ana@example.com");
        assert!(ana.has_checked_in());
        assert_eq!(ana.created_at.to_rfc3339(), "2024-04-01T12:00:00+00:00");
    }

    #[test]
    fn missing_or_null_total_defaults_to_zero() {
        let missing: AttendeePageResponse = serde_json::from_str(r#"{"attendees": []}"#).unwrap();
        assert_eq!(missing.total, 0);

        let null: AttendeePageResponse =
            serde_json::from_str(r#"{"attendees": [], "total": null}"#).unwrap();
        assert_eq!(null.total, 0);
    }

    #[test]
    fn null_or_absent_check_in_is_none() {
        let body = r#"[
            {"id": 1, "name": "A", "email": "a@x.io", "createdAt": "2024-01-01T00:00:00Z", "checkedInAt": null},
            {"id": 2, "name": "B", "email": "b@x.io", "createdAt": "2024-01-01T00:00:00Z"}
        ]"#;
        let attendees: Vec<Attendee> = serde_json::from_str(body).unwrap();
        assert!(attendees.iter().all(|a| !a.has_checked_in()));
    }

    #[test]
    fn numeric_ids_are_held_as_strings() {
        let body = r#"{"id": 42, "name": "N", "email": "n@x.io", "createdAt": "2024-01-01T00:00:00Z"}"#;
        let attendee: Attendee = serde_json::from_str(body).unwrap();
        assert_eq!(attendee.id, "42");
    }

    #[test]
    fn rejects_page_without_attendees() {
        assert!(serde_json::from_str::<AttendeePageResponse>(r#"{"total": 3}"#).is_err());
    }
}
