//! Search Results
//!
//! Shown above the category sections when the index page carries a
//! `search` query.

use std::sync::Arc;

use leptos::prelude::*;

use crochet_core::{search_patterns, Catalogue, Route};

use super::pattern_card::pattern_cards;
use super::PatternsGate;
use crate::navigation;

#[component]
pub fn SearchResults(query: String) -> impl IntoView {
    view! {
        <div id="search">
            <PatternsGate render={move |catalogue: Arc<Catalogue>| results(&catalogue, &query)} />
        </div>
    }
}

fn results(catalogue: &Catalogue, query: &str) -> impl IntoView {
    let found = search_patterns(catalogue.store(), query);

    let header = if found.is_empty() {
        view! {
            <h1>"No patterns found..."</h1>
            <span class="no_result_pseudocontent"></span>
        }
        .into_any()
    } else {
        view! { <h1>{format!("Results for \"{}\"...", query)}</h1> }.into_any()
    };

    view! {
        {header}
        <a
            id="search_exit_button"
            class="button_look button_grey"
            href=Route::home().href()
            on:click=move |ev| {
                ev.prevent_default();
                navigation::go_back_or_home();
            }
        >
            <span class="button_text_icon">"✕"</span>
        </a>
        <div id="search_results">{pattern_cards(&found)}</div>
    }
}
