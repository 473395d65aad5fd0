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

use attendee_ui::components::attendee_list::AttendeeList;
use attendee_ui::components::config_error::ConfigError;
use attendee_ui::constants::app_config;
use dioxus::prelude::*;

/// App root component
#[component]
fn App() -> Element {
    // Check config validity
    let config = match app_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return rsx! {
                ConfigError { message: e }
            };
        }
    };

    rsx! {
        AttendeeList {
            event_id: config.event_id.clone(),
            page_size: config.page_size(),
            locale: config.locale(),
        }
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
