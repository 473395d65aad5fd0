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

use crate::components::icons::chevron::{Chevron, ChevronIcon};
use attendee_view::Locale;
use dioxus::prelude::*;

/// A navigation request from the pagination buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageMove {
    First,
    Previous,
    Next,
    Last,
}

impl PageMove {
    fn icon(self) -> Chevron {
        match self {
            PageMove::First => Chevron::First,
            PageMove::Previous => Chevron::Previous,
            PageMove::Next => Chevron::Next,
            PageMove::Last => Chevron::Last,
        }
    }

    fn class(self) -> &'static str {
        match self {
            PageMove::First => "first",
            PageMove::Previous => "previous",
            PageMove::Next => "next",
            PageMove::Last => "last",
        }
    }
}

/// Page indicator plus first/previous/next/last buttons.
///
/// The control is stateless: it reports the requested move and the owner
/// decides whether the move applies.
#[component]
pub fn Pagination(
    page: u32,
    total_pages: u64,
    has_previous: bool,
    has_next: bool,
    locale: Locale,
    on_navigate: EventHandler<PageMove>,
) -> Element {
    let labels = locale.labels();
    let buttons = [
        (PageMove::First, labels.first_page, !has_previous),
        (PageMove::Previous, labels.previous_page, !has_previous),
        (PageMove::Next, labels.next_page, !has_next),
        (PageMove::Last, labels.last_page, !has_next),
    ];

    rsx! {
        div { class: "pagination",
            span { class: "pagination-status", "{labels.page_of(page, total_pages)}" }
            div { class: "pagination-buttons",
                for (action, title, disabled) in buttons {
                    button {
                        key: "{action.class()}",
                        class: "icon-button pagination-{action.class()}",
                        r#type: "button",
                        title: "{title}",
                        aria_label: "{title}",
                        disabled,
                        onclick: move |_| on_navigate.call(action),
                        ChevronIcon { direction: action.icon() }
                    }
                }
            }
        }
    }
}
