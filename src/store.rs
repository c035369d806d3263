//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Both documents
//! load independently, so each carries its own load state.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crochet_core::{Catalogue, YarnInventory};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Pattern store and category index, shared with every view
    pub catalogue: Arc<Catalogue>,
    pub patterns_state: LoadState,
    /// Rows of the "My Yarn" table
    pub yarn: YarnInventory,
    pub yarn_state: LoadState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_catalogue(store: &AppStore, catalogue: Catalogue) {
    store.catalogue().set(Arc::new(catalogue));
    store.patterns_state().set(LoadState::Ready);
}

pub fn store_patterns_failed(store: &AppStore) {
    store.patterns_state().set(LoadState::Failed);
}

pub fn store_set_yarn(store: &AppStore, yarn: YarnInventory) {
    store.yarn().set(yarn);
    store.yarn_state().set(LoadState::Ready);
}

pub fn store_yarn_failed(store: &AppStore) {
    store.yarn_state().set(LoadState::Failed);
}

/// Remove a yarn row by key
pub fn store_remove_yarn(store: &AppStore, key: &str) {
    if !store.yarn().write().remove(key) {
        log::warn!("No yarn row {} to remove", key);
    }
}
