//! Pattern Card Component

use std::sync::Arc;

use leptos::prelude::*;

use crochet_core::{PatternRecord, Route};

use crate::navigation;

/// Clickable card leading to the pattern's overview page
#[component]
pub fn PatternCard(pattern: Arc<PatternRecord>) -> impl IntoView {
    let route = Route::pattern(&pattern.key);

    view! {
        <div class="pattern_card" id=pattern.key.clone() on:click=move |_| navigation::navigate(&route)>
            <img src=pattern.hero_image.src.clone() alt=pattern.hero_image.alt.clone() />
            <div class="pattern_card_text">
                <span class="card_title">{pattern.name.clone()}</span>
                <span class="card_description">{pattern.blurb.clone()}</span>
            </div>
        </div>
    }
}

/// Cards for a list of patterns, in list order
pub fn pattern_cards(patterns: &[Arc<PatternRecord>]) -> impl IntoView {
    patterns
        .iter()
        .cloned()
        .map(|pattern| view! { <PatternCard pattern=pattern /> })
        .collect_view()
}
