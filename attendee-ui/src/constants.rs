// SPDX-License-Identifier: MIT OR Apache-2.0

use attendee_client::AttendeeApiClient;
use attendee_view::{Locale, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Configuration injected by the hosting page as `window.__APP_CONFIG`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "pageSize")]
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl RuntimeConfig {
    pub fn page_size(&self) -> u32 {
        self.page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::from_tag)
            .unwrap_or_default()
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No global window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    let config = from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))?;
    if config.event_id.trim().is_empty() {
        return Err("__APP_CONFIG.eventId must not be empty".to_string());
    }
    Ok(config)
}

pub fn api_base_url() -> Result<String, String> {
    app_config().map(|c| c.api_base_url)
}

pub fn attendee_api_client() -> Result<AttendeeApiClient, String> {
    let base_url = api_base_url()?;
    Ok(AttendeeApiClient::new(&base_url))
}
