// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::icons::more::MoreIcon;
use attendee_types::Attendee;
use attendee_view::{format_relative, Locale};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

#[component]
pub fn AttendeeRow(
    attendee: Attendee,
    selected: bool,
    now: DateTime<Utc>,
    locale: Locale,
    on_toggle: EventHandler<String>,
) -> Element {
    let labels = locale.labels();
    let signed_up = format_relative(now, attendee.created_at, locale);
    let checked_in = attendee
        .checked_in_at
        .map(|at| format_relative(now, at, locale));
    let id = attendee.id.clone();

    rsx! {
        tr {
            class: "attendee-row",
            class: if selected { "selected" },
            class: if attendee.has_checked_in() { "checked-in" },
            td {
                input {
                    class: "row-checkbox",
                    r#type: "checkbox",
                    checked: selected,
                    onchange: move |_| on_toggle.call(id.clone()),
                }
            }
            td { class: "attendee-id", "{attendee.id}" }
            td {
                div { class: "attendee-identity",
                    span { class: "attendee-name", "{attendee.name}" }
                    span { class: "attendee-email", "{attendee.email}" }
                }
            }
            td { class: "attendee-created", title: "{attendee.created_at.to_rfc3339()}", "{signed_up}" }
            td { class: "attendee-checked-in",
                match checked_in {
                    Some(text) => rsx! { "{text}" },
                    None => rsx! {
                        span { class: "not-checked-in", "{labels.not_checked_in}" }
                    },
                }
            }
            td {
                button {
                    class: "icon-button transparent",
                    r#type: "button",
                    title: "{labels.more_actions}",
                    aria_label: "{labels.more_actions}",
                    MoreIcon {}
                }
            }
        }
    }
}
