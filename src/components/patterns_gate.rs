//! Patterns Gate
//!
//! Holds a page back until the pattern document has loaded.

use std::sync::Arc;

use leptos::prelude::*;

use crochet_core::Catalogue;

use crate::store::{use_app_store, AppStateStoreFields, LoadState};

/// Renders `render` with the loaded catalogue, or a status line while the
/// document is loading or after it failed
#[component]
pub fn PatternsGate<F, IV>(render: F) -> impl IntoView
where
    F: Fn(Arc<Catalogue>) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let store = use_app_store();

    move || match store.patterns_state().get() {
        LoadState::Loading => view! { <p class="load_status">"Loading patterns..."</p> }.into_any(),
        LoadState::Failed => view! {
            <p class="load_status load_failed">"Patterns could not be loaded. Please try again later."</p>
        }
        .into_any(),
        LoadState::Ready => render(store.catalogue().get()).into_any(),
    }
}
