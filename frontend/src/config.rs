//! Reads the session configuration embedded in `index.html`.
//!
//! The page may carry a `<script id="studydesk-config" type="application/json">`
//! block with `SessionConfig` overrides. A missing block means defaults; an
//! unreadable one is logged and also falls back to defaults.

use common::config::SessionConfig;

const CONFIG_ELEMENT_ID: &str = "studydesk-config";

pub fn load_session_config() -> SessionConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(text) = text else {
        log::debug!("no #{} element, using default configuration", CONFIG_ELEMENT_ID);
        return SessionConfig::default();
    };

    match SessionConfig::from_json(&text) {
        Ok(config) => {
            log::info!("session configuration loaded, initial role {:?}", config.initial_role);
            config
        }
        Err(err) => {
            log::warn!("{}, using defaults", err);
            SessionConfig::default()
        }
    }
}
