//! Browser Storage Backend
//!
//! `KeyValueStorage` over `window.localStorage`.

use checklist_core::{KeyValueStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// Handle to the page's localStorage.
///
/// Holds no JS objects, so it is `Send + Sync` and can live inside signals.
/// The `Storage` object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
    }
}

fn js_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", e))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.local_storage()?.remove_item(key).map_err(js_error)
    }
}
