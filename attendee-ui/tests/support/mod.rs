// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for attendee-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, browser URL
// control and a recording `fetch` mock so that individual test files stay
// focused on assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub const EVENT_ID: &str = "10891b77-1075-4f54-a028-005df440e903";

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Render a Dioxus component into the given mount element.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process its mutations.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

/// Wait for mocked fetches to resolve and Dioxus to re-render.
pub async fn settle() {
    yield_now().await;
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 100)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
    yield_now().await;
}

pub fn query(mount: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    mount.query_selector(selector).unwrap()
}

pub fn button(mount: &web_sys::Element, selector: &str) -> web_sys::HtmlButtonElement {
    query(mount, selector)
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap()
}

/// Set the input's value and fire a bubbling `input` event, like typing.
pub fn type_into(mount: &web_sys::Element, selector: &str, value: &str) {
    let input = query(mount, selector)
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Browser URL
// ---------------------------------------------------------------------------

/// Point the address bar at `path_and_query` without navigating.
pub fn set_browser_url(path_and_query: &str) {
    gloo_utils::window()
        .history()
        .unwrap()
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path_and_query))
        .unwrap();
}

pub fn browser_search() -> String {
    gloo_utils::window().location().search().unwrap()
}

pub fn history_length() -> u32 {
    gloo_utils::window().history().unwrap().length().unwrap()
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with the given locale.
pub fn inject_app_config(locale: &str) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("apiBaseUrl", &"http://test:3333".into());
    set("eventId", &EVENT_ID.into());
    set("pageSize", &wasm_bindgen::JsValue::from(10));
    set("locale", &locale.into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Fetch mocking
// ---------------------------------------------------------------------------

/// Answer every `fetch` with `status` and `body`, recording requested URLs
/// in `window.__fetch_calls`.
pub fn mock_fetch(status: u16, body: &str) {
    let body = serde_json::to_string(body).unwrap();
    js_sys::eval(&format!(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetch_calls = [];
        window.fetch = function(input) {{
            var url = typeof input === 'string' ? input : input.url;
            window.__fetch_calls.push(url);
            var resp = new Response({body}, {{
                status: {status},
                headers: {{ 'Content-Type': 'application/json' }}
            }});
            Object.defineProperty(resp, 'url', {{ value: url }});
            return Promise.resolve(resp);
        }};
        "#
    ))
    .expect("failed to mock fetch");
}

/// JSON body for a page of `count` attendees out of `total`. Odd-indexed
/// attendees have checked in; even-indexed ones have not.
pub fn attendees_body(count: usize, total: u64) -> String {
    let attendees: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("att-{i}"),
                "name": format!("Attendee {i}"),
                "email": format!("attendee{i}@example.com"),
                "createdAt": "2024-04-01T12:00:00.000Z",
                "checkedInAt": if i % 2 == 1 { serde_json::json!("2024-04-02T09:00:00.000Z") } else { serde_json::Value::Null },
            })
        })
        .collect();
    serde_json::json!({ "attendees": attendees, "total": total }).to_string()
}

/// Mock a successful page of `count` attendees out of `total`.
pub fn mock_fetch_attendees(count: usize, total: u64) {
    mock_fetch(200, &attendees_body(count, total));
}

/// Hold every `fetch` open until [`resolve_fetch`] answers it, so tests can
/// control completion order. URLs are recorded like [`mock_fetch`].
pub fn mock_fetch_deferred() {
    js_sys::eval(
        r#"
        window.__original_fetch = window.__original_fetch || window.fetch;
        window.__fetch_calls = [];
        window.__pending_fetches = [];
        window.fetch = function(input) {
            var url = typeof input === 'string' ? input : input.url;
            window.__fetch_calls.push(url);
            return new Promise(function(resolve) {
                window.__pending_fetches.push({ url: url, resolve: resolve });
            });
        };
        "#,
    )
    .expect("failed to mock deferred fetch");
}

/// Answer the `index`-th deferred request (in issue order).
pub fn resolve_fetch(index: usize, status: u16, body: &str) {
    let body = serde_json::to_string(body).unwrap();
    js_sys::eval(&format!(
        r#"
        (function() {{
            var pending = window.__pending_fetches[{index}];
            var resp = new Response({body}, {{
                status: {status},
                headers: {{ 'Content-Type': 'application/json' }}
            }});
            Object.defineProperty(resp, 'url', {{ value: pending.url }});
            pending.resolve(resp);
        }})();
        "#
    ))
    .expect("failed to resolve deferred fetch");
}

/// URLs requested since the last `mock_fetch*` call.
pub fn fetch_calls() -> Vec<String> {
    let calls = js_sys::Reflect::get(&gloo_utils::window(), &"__fetch_calls".into())
        .unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
    if calls.is_undefined() {
        return Vec::new();
    }
    js_sys::Array::from(&calls)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

pub fn restore_fetch() {
    js_sys::eval(
        r#"
        if (window.__original_fetch) {
            window.fetch = window.__original_fetch;
            delete window.__original_fetch;
        }
        delete window.__fetch_calls;
        delete window.__pending_fetches;
        "#,
    )
    .expect("failed to restore fetch");
}
