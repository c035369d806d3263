//! Pattern Overview Page
//!
//! Title, yarn sentence, details table, description and the image gallery
//! for one pattern, plus the way into crochet mode.

use std::sync::Arc;

use leptos::prelude::*;

use crochet_core::{
    detail_rows, gallery_thumbnails, yarn_sentence, Catalogue, Image, PatternRecord, Route,
};

use super::{NotFound, PatternsGate};
use crate::navigation;

#[component]
pub fn PatternOverview(pattern_key: String) -> impl IntoView {
    view! {
        <PatternsGate render={move |catalogue: Arc<Catalogue>| overview_or_missing(&catalogue, &pattern_key)} />
    }
}

fn overview_or_missing(catalogue: &Catalogue, key: &str) -> AnyView {
    match catalogue.pattern(key) {
        Ok(pattern) => view! { <OverviewBody pattern=Arc::clone(pattern) /> }.into_any(),
        Err(err) => {
            log::warn!("{}", err);
            view! { <NotFound message=err.to_string() /> }.into_any()
        }
    }
}

#[component]
fn OverviewBody(pattern: Arc<PatternRecord>) -> impl IntoView {
    document().set_title(&format!("{} | Crochet Cache", pattern.name));

    let crochet_route = Route::crochet(&pattern.key, 0);
    let details = detail_rows(&pattern)
        .into_iter()
        .map(|(label, value)| view! { <tr><td>{label}</td><td>{value}</td></tr> })
        .collect_view();

    view! {
        <section id="pattern_overview">
            <div class="overview_text">
                <h1 id="pattern_overview_title">{pattern.name.clone()}</h1>
                <p id="pattern_yarn">{yarn_sentence(&pattern.yarn)}</p>
                <table id="pattern_details">
                    <tbody>{details}</tbody>
                </table>
                <p id="pattern_overview_description">{pattern.overview.clone()}</p>
                <button
                    id="crochet_mode_button"
                    class="button_look"
                    on:click=move |_| navigation::navigate(&crochet_route)
                >
                    "Crochet Mode"
                </button>
            </div>
            <Gallery pattern=pattern />
        </section>
    }
}

/// Large hero image with a strip of thumbnails; clicking a thumbnail shows
/// it in the hero slot
#[component]
fn Gallery(pattern: Arc<PatternRecord>) -> impl IntoView {
    let thumbnails = gallery_thumbnails(&pattern);
    let hero = RwSignal::new(pattern.hero_image.clone());
    let selected = RwSignal::new(0usize);

    let thumbs = thumbnails
        .into_iter()
        .enumerate()
        .map(|(position, thumb)| {
            let shown = Image { src: thumb.src.clone(), alt: thumb.alt.clone() };
            view! {
                <img
                    class="thumb"
                    class:thumb_selected=move || selected.get() == position
                    src=thumb.src
                    alt=thumb.alt
                    on:click=move |_| {
                        hero.set(shown.clone());
                        selected.set(position);
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div id="crochet_gallery">
            <img
                id="gallery_hero"
                src=move || hero.with(|image| image.src.clone())
                alt=move || hero.with(|image| image.alt.clone())
            />
            <div id="thumb_gallery">{thumbs}</div>
        </div>
    }
}
