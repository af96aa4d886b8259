//! `localStorage` backend for the session.

use concessionario_client::SessionStorage;
use concessionario_types::StorageError;
use wasm_bindgen::JsValue;

/// Session storage backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable { message: "No window".to_string() })?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable { message: js_message(&e) })?
            .ok_or_else(|| StorageError::Unavailable { message: "localStorage is disabled".to_string() })
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local()?.get_item(key).map_err(|e| StorageError::access(key, js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?.set_item(key, value).map_err(|e| StorageError::access(key, js_message(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local()?.remove_item(key).map_err(|e| StorageError::access(key, js_message(&e)))
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
