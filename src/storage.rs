//! Browser Progress Storage
//!
//! `localStorage` backend for crochet-mode progress.

use crochet_core::{CatalogueError, CatalogueResult, ProgressStorage};
use wasm_bindgen::JsValue;

/// Looks up `window.localStorage` on every call, so a page opened without
/// storage access fails per click instead of at startup
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProgressStorage;

impl LocalProgressStorage {
    fn storage() -> CatalogueResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| CatalogueError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| CatalogueError::Storage("localStorage unavailable".to_string()))
    }
}

fn storage_error(err: JsValue) -> CatalogueError {
    CatalogueError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl ProgressStorage for LocalProgressStorage {
    fn read(&self, key: &str) -> CatalogueResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(storage_error)
    }

    fn write(&self, key: &str, value: &str) -> CatalogueResult<()> {
        Self::storage()?.set_item(key, value).map_err(storage_error)
    }
}
