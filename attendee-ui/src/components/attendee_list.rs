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

use crate::attendee_api::fetch_attendee_page;
use crate::components::attendee_row::AttendeeRow;
use crate::components::icons::search::SearchIcon;
use crate::components::pagination::{PageMove, Pagination};
use crate::url_store::BrowserUrlStore;
use attendee_view::{Locale, ViewState};
use chrono::Utc;
use dioxus::prelude::*;

/// Searchable, paginated attendee table for one event.
///
/// `search` and `page` are seeded from the address bar on mount and written
/// back on every change. Every change to the derived request issues one
/// fetch; only the latest fetch may update the table.
#[component]
pub fn AttendeeList(
    event_id: String,
    #[props(default = attendee_view::DEFAULT_PAGE_SIZE)] page_size: u32,
    #[props(default)] locale: Locale,
) -> Element {
    let mut state = use_signal(|| ViewState::from_store(&BrowserUrlStore, page_size));
    // Keyed on the `event_id` prop as well, so a parent switching events
    // triggers a fresh fetch.
    let request = use_memo(use_reactive((&event_id,), move |(event_id,)| {
        (event_id, state.read().request())
    }));

    let mut fetch_page = move || {
        let event_id = request.peek().0.clone();
        let (ticket, query) = state.write().begin_fetch();
        spawn(async move {
            match fetch_attendee_page(&event_id, &query).await {
                Ok(page) => {
                    state.write().apply_page(ticket, page);
                }
                Err(e) => {
                    state.write().apply_error(ticket, e);
                }
            }
        });
    };

    // Fetch on mount and whenever search or page changes.
    use_effect(move || {
        let _ = request();
        fetch_page();
    });

    let on_search = move |evt: Event<FormData>| {
        state.write().set_search(&mut BrowserUrlStore, &evt.value());
    };

    let on_navigate = move |action: PageMove| {
        let mut store = BrowserUrlStore;
        let mut view = state.write();
        let moved = match action {
            PageMove::First => view.first_page(&mut store),
            PageMove::Previous => view.previous_page(&mut store),
            PageMove::Next => view.next_page(&mut store),
            PageMove::Last => view.last_page(&mut store),
        };
        if !moved {
            log::debug!("Ignoring {action:?}: already at the boundary");
        }
    };

    let labels = locale.labels();
    let now = Utc::now();
    let view = state.read();
    let attendees = view.attendees().to_vec();
    let search = view.search().to_string();
    let error = view.error().cloned();
    let loading = view.is_loading();
    let all_selected = view.all_selected();
    let summary = labels.showing(attendees.len(), view.total());
    let page = view.page();
    let total_pages = view.display_total_pages();
    let has_previous = view.can_go_previous();
    let has_next = view.can_go_next();
    let selected: Vec<bool> = attendees.iter().map(|a| view.is_selected(&a.id)).collect();
    drop(view);

    rsx! {
        div { class: "attendee-list",
            div { class: "attendee-list-header",
                h1 { class: "attendee-list-title", "{labels.title}" }
                div { class: "search-box",
                    SearchIcon {}
                    input {
                        id: "attendee-search",
                        class: "search-input",
                        r#type: "search",
                        placeholder: "{labels.search_placeholder}",
                        value: "{search}",
                        oninput: on_search,
                    }
                }
            }

            if let Some(error) = error {
                div { class: "attendees-error", role: "alert",
                    span { class: "attendees-error-text", "{labels.load_failed}: {error}" }
                    button {
                        class: "retry-btn",
                        r#type: "button",
                        onclick: move |_| fetch_page(),
                        "{labels.retry}"
                    }
                }
            }

            table { class: "attendee-table", aria_busy: "{loading}",
                thead {
                    tr {
                        th { style: "width: 48px;",
                            input {
                                class: "select-all",
                                r#type: "checkbox",
                                title: "{labels.select_all}",
                                checked: all_selected,
                                onchange: move |_| state.write().toggle_all(),
                            }
                        }
                        th { "{labels.id_column}" }
                        th { "{labels.attendee_column}" }
                        th { "{labels.signed_up_column}" }
                        th { "{labels.checked_in_column}" }
                        th { style: "width: 64px;" }
                    }
                }
                tbody {
                    if attendees.is_empty() && !loading {
                        tr { class: "attendees-empty",
                            td { colspan: "6", "{labels.empty}" }
                        }
                    }
                    for (attendee, is_selected) in attendees.into_iter().zip(selected) {
                        AttendeeRow {
                            key: "{attendee.id}",
                            attendee: attendee.clone(),
                            selected: is_selected,
                            now,
                            locale,
                            on_toggle: move |id: String| state.write().toggle_selected(&id),
                        }
                    }
                }
                tfoot {
                    tr {
                        td { class: "attendee-summary", colspan: "3", "{summary}" }
                        td { class: "attendee-pagination", colspan: "3",
                            Pagination {
                                page,
                                total_pages,
                                has_previous,
                                has_next,
                                locale,
                                on_navigate,
                            }
                        }
                    }
                }
            }
        }
    }
}
