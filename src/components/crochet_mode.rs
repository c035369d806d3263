//! Crochet Mode Page
//!
//! One step of a pattern at a time. Every instruction line is a round;
//! the down control marks the next round done, the up control takes the
//! last mark back. Progress survives reloads through `localStorage`.

use std::sync::Arc;

use leptos::prelude::*;

use crochet_core::{
    index_rounds, Catalogue, CatalogueResult, Image, PatternRecord, ProgressKey, ProgressTracker,
    Route, StepCursor,
};

use super::{NotFound, PatternsGate};
use crate::config::use_site_config;
use crate::context::use_app_context;
use crate::navigation;
use crate::storage::LocalProgressStorage;

#[component]
pub fn CrochetMode(pattern_key: String, step: usize) -> impl IntoView {
    view! {
        <PatternsGate render={move |catalogue: Arc<Catalogue>| step_or_missing(&catalogue, &pattern_key, step)} />
    }
}

fn step_or_missing(catalogue: &Catalogue, key: &str, step: usize) -> AnyView {
    let page = catalogue
        .pattern(key)
        .and_then(|pattern| StepPage::build(pattern, step));

    match page {
        Ok(page) => view! { <StepView page=page /> }.into_any(),
        Err(err) => {
            log::warn!("{}", err);
            view! { <NotFound message=err.to_string() /> }.into_any()
        }
    }
}

// ========================
// Page Data
// ========================

#[derive(Debug, Clone)]
struct RoundLine {
    index: usize,
    dom_id: String,
    text: String,
}

#[derive(Debug, Clone)]
struct SubstepSection {
    dom_id: String,
    label: String,
    title: String,
    rounds: Vec<RoundLine>,
    images: Vec<Image>,
}

/// Everything the step view renders, detached from the catalogue borrow
#[derive(Debug, Clone)]
struct StepPage {
    pattern_key: String,
    pattern_name: String,
    step: usize,
    heading: String,
    previous: usize,
    next: usize,
    total_rounds: usize,
    substeps: Vec<SubstepSection>,
}

impl StepPage {
    fn build(pattern: &PatternRecord, step: usize) -> CatalogueResult<Self> {
        let cursor = StepCursor::new(pattern, step)?;
        let indexed = index_rounds(&cursor);

        let substeps = indexed
            .substeps
            .iter()
            .map(|substep| SubstepSection {
                dom_id: substep.dom_id(),
                label: substep.label.clone(),
                title: substep.title.to_string(),
                rounds: substep
                    .rounds
                    .iter()
                    .map(|round| RoundLine {
                        index: round.index,
                        dom_id: round.dom_id(),
                        text: round.text.to_string(),
                    })
                    .collect(),
                images: substep.images.to_vec(),
            })
            .collect();

        Ok(Self {
            pattern_key: pattern.key.clone(),
            pattern_name: pattern.name.clone(),
            step: cursor.index(),
            heading: cursor.heading(),
            previous: cursor.previous(),
            next: cursor.next(),
            total_rounds: indexed.total_rounds,
            substeps,
        })
    }
}

// ========================
// View
// ========================

#[component]
fn StepView(page: StepPage) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_site_config();

    if navigation::screen_width().is_some_and(|width| width < config.mobile_breakpoint_px) {
        ctx.set_nav_hidden(true);
    }
    document().set_title(&format!("{} | Crochet Mode", page.pattern_name));

    let key = ProgressKey::new(page.pattern_key.as_str(), page.step);
    let tracker = match ProgressTracker::open(&LocalProgressStorage, key, page.total_rounds) {
        Ok(tracker) => Some(tracker),
        Err(err) => {
            log::error!("Progress for {} unavailable: {}", page.pattern_key, err);
            None
        }
    };
    let tracker = RwSignal::new(tracker);

    // A failed write keeps the in-memory marks; only durability is lost
    let advance = move |_: web_sys::MouseEvent| {
        tracker.update(|tracker| {
            if let Some(tracker) = tracker {
                if let Err(err) = tracker.advance(&LocalProgressStorage) {
                    log::error!("Saving progress failed: {}", err);
                }
            }
        });
    };
    let retreat = move |_: web_sys::MouseEvent| {
        tracker.update(|tracker| {
            if let Some(tracker) = tracker {
                if let Err(err) = tracker.retreat(&LocalProgressStorage) {
                    log::error!("Saving progress failed: {}", err);
                }
            }
        });
    };

    let exit_route = Route::pattern(&page.pattern_key);
    let previous_route = Route::crochet(&page.pattern_key, page.previous);
    let next_route = Route::crochet(&page.pattern_key, page.next);

    let substeps = page
        .substeps
        .into_iter()
        .map(|substep| view! { <SubstepBlock substep=substep tracker=tracker /> })
        .collect_view();

    view! {
        <section id="crochet_mode">
            <div class="crochet_nav">
                <button
                    id="crochet_mode_exit"
                    class="button_look button_grey"
                    on:click=move |_| {
                        ctx.set_nav_hidden(false);
                        navigation::navigate(&exit_route);
                    }
                >
                    <span class="button_text_icon">"✕"</span>
                </button>
                <h1 id="crochet_step_pattern_title">{page.pattern_name.clone()}</h1>
                <div class="crochet_step_control">
                    <button
                        id="crochet_step_back"
                        class="button_look"
                        on:click=move |_| navigation::navigate(&previous_route)
                    >
                        "Previous"
                    </button>
                    <h2 id="crochet_step_title">{page.heading.clone()}</h2>
                    <button
                        id="crochet_step_forward"
                        class="button_look"
                        on:click=move |_| navigation::navigate(&next_route)
                    >
                        "Next"
                    </button>
                </div>
            </div>
            <div id="substeps">{substeps}</div>
            <div class="highlight_control">
                <button
                    id="highlight_up"
                    class="button_look"
                    aria-label="Unmark last round"
                    disabled=move || tracker.with(Option::is_none)
                    on:click=retreat
                >
                    "▲"
                </button>
                <button
                    id="highlight_down"
                    class="button_look"
                    aria-label="Mark next round"
                    disabled=move || tracker.with(Option::is_none)
                    on:click=advance
                >
                    "▼"
                </button>
            </div>
        </section>
    }
}

#[component]
fn SubstepBlock(substep: SubstepSection, tracker: RwSignal<Option<ProgressTracker>>) -> impl IntoView {
    let rounds = substep
        .rounds
        .into_iter()
        .map(|round| {
            let index = round.index;
            let complete = move || {
                tracker.with(|tracker| tracker.as_ref().is_some_and(|t| t.is_complete(index)))
            };
            view! {
                <p id=round.dom_id class="round" class:round_complete=complete>
                    {round.text}
                </p>
            }
        })
        .collect_view();

    let images = substep
        .images
        .into_iter()
        .map(|image| view! { <img src=image.src alt=image.alt /> })
        .collect_view();

    view! {
        <section class="substep" id=substep.dom_id>
            <span class="substep_title">
                <b>{format!("{} ", substep.label)}</b>
                {substep.title}
            </span>
            <div class="substep_content">
                <div class="substep_rounds">{rounds}</div>
                <div class="substep_images">{images}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> PatternRecord {
        let json = r#"{
            "scarf": {
                "name": "Scarf",
                "hero-image": {"src": "s.png"},
                "steps": [
                    {"title": "Base", "substeps": [
                        {"title": "Chain", "instructions": ["ch 20", "turn"], "images": [{"src": "a.png", "alt": "A"}]},
                        {"title": "Rows", "instructions": ["sc across"]}
                    ]},
                    {"title": "Edge", "substeps": [{"title": "Border", "instructions": ["sl st around"]}]}
                ]
            }
        }"#;
        let catalogue = Catalogue::from_json(json).unwrap();
        PatternRecord::clone(catalogue.pattern("scarf").unwrap())
    }

    #[test]
    fn test_step_page_numbers_rounds_across_substeps() {
        let page = StepPage::build(&pattern(), 0).unwrap();
        assert_eq!(page.heading, "1: Base");
        assert_eq!(page.total_rounds, 3);
        assert_eq!(page.substeps[0].label, "1.1");
        assert_eq!(page.substeps[1].rounds[0].dom_id, "round-2");
        assert_eq!(page.substeps[0].images.len(), 1);
        assert_eq!((page.previous, page.next), (0, 1));
    }

    #[test]
    fn test_step_page_last_step() {
        let page = StepPage::build(&pattern(), 1).unwrap();
        assert_eq!(page.substeps[0].dom_id, "substep-0");
        assert_eq!((page.previous, page.next), (0, 1));
    }

    #[test]
    fn test_step_page_out_of_range() {
        assert!(StepPage::build(&pattern(), 2).is_err());
    }
}
