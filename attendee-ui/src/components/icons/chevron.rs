// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Chevron {
    First,
    Previous,
    Next,
    Last,
}

#[component]
pub fn ChevronIcon(direction: Chevron) -> Element {
    let paths: &[&str] = match direction {
        Chevron::First => &["m11 17-5-5 5-5", "m18 17-5-5 5-5"],
        Chevron::Previous => &["m15 18-6-6 6-6"],
        Chevron::Next => &["m9 18 6-6-6-6"],
        Chevron::Last => &["m6 17 5-5-5-5", "m13 17 5-5-5-5"],
    };
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths.iter() {
                path { d: "{d}" }
            }
        }
    }
}
