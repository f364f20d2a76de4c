//! `KeyValueStorage` backed by `window.localStorage`.
//!
//! Browsers can refuse localStorage (privacy modes, sandboxed iframes). In
//! that case reads behave as if every slot were empty and writes report
//! `Error::StorageUnavailable`, so the dashboard still works for the
//! lifetime of the page.

use common::error::{Error, Result};
use common::storage::KeyValueStorage;
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("localStorage is unavailable, nothing will be persisted");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage> {
        self.inner.as_ref().ok_or(Error::StorageUnavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match &self.inner {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| Error::storage_read(key, js_message(&e))),
            None => Ok(None),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage_write(key, js_message(&e)))
    }

    fn clear(&mut self) -> Result<()> {
        self.storage()?
            .clear()
            .map_err(|e| Error::storage_clear(js_message(&e)))
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
