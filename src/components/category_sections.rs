//! Category Sections
//!
//! Index page body: one section per category bucket, "Popular Patterns"
//! first, each holding the cards of its patterns.

use std::sync::Arc;

use leptos::prelude::*;

use crochet_core::Catalogue;

use super::pattern_card::pattern_cards;
use super::PatternsGate;

#[component]
pub fn CategorySections() -> impl IntoView {
    view! {
        <div id="pattern_groups">
            <PatternsGate render=sections />
        </div>
    }
}

fn sections(catalogue: Arc<Catalogue>) -> impl IntoView {
    catalogue
        .categories()
        .iter()
        .map(|(category, patterns)| {
            view! {
                <section id=category.to_string()>
                    <h1>{category.to_string()}</h1>
                    <div class="pattern_card_parent">{pattern_cards(patterns)}</div>
                </section>
            }
        })
        .collect_view()
}
