//! Add Pattern Page
//!
//! Name, a growing list of step sections and a growing list of material
//! rows. A valid submit confirms and goes back to the previous page; the
//! pattern itself is not stored.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crochet_core::{validation_error, FieldError, FormStatus, PatternDraft};

use super::form_fields::{FieldErrors, FormInput, FormTextArea, SubmitStatus};
use crate::config::use_site_config;
use crate::navigation;

#[component]
pub fn AddPatternPage() -> impl IntoView {
    let config = use_site_config();
    let draft = RwSignal::new(PatternDraft::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let status = RwSignal::new(None::<(FormStatus, &'static str)>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with(PatternDraft::validate) {
            Ok(()) => {
                draft.with(|d| {
                    log::info!(
                        "Pattern added: {} ({} steps, {} materials)",
                        d.name,
                        d.steps.len(),
                        d.filled_materials().count()
                    )
                });
                errors.set(Vec::new());
                status.set(Some((FormStatus::Success, "Pattern Added!")));

                let delay = config.redirect_delay_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    navigation::go_back_or_home();
                });
            }
            Err(failed) => {
                log::debug!("Add pattern rejected: {}", validation_error(&failed));
                errors.set(failed);
                status.set(Some((FormStatus::Failure, "Pattern not added!")));
            }
        }
    };

    let add_step = move |_: web_sys::MouseEvent| {
        draft.update(|d| {
            let number = d.add_step();
            log::debug!("Added step section {}", number);
        });
    };
    let add_material = move |_: web_sys::MouseEvent| {
        draft.update(|d| {
            d.add_material();
        });
    };

    view! {
        <section id="add_pattern">
            <h1>"Add Pattern"</h1>
            <form id="add_pattern_form" novalidate=true on:submit=submit>
                <FormInput
                    placeholder="Pattern name"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=move |v: String| draft.update(|d| d.name = v)
                />

                <div id="pattern_steps">
                    <For
                        each=move || 0..draft.with(|d| d.steps.len())
                        key=|index| *index
                        children=move |index| view! { <StepFields draft=draft index=index /> }
                    />
                </div>
                <button type="button" id="add_step" class="button_look button_grey" on:click=add_step>
                    "Add Step"
                </button>

                <h2>"Materials"</h2>
                <div id="materials_parent">
                    <For
                        each=move || 0..draft.with(|d| d.materials.len())
                        key=|index| *index
                        children=move |index| view! { <MaterialFields draft=draft index=index /> }
                    />
                </div>
                <button
                    type="button"
                    id="add_materia_button"
                    class="button_look button_grey"
                    on:click=add_material
                >
                    "Add Material"
                </button>

                <FieldErrors errors=errors />
                <button type="submit" class="button_look">"Add Pattern"</button>
            </form>
            <SubmitStatus status=status />
        </section>
    }
}

/// Title and instructions of step `index`; images are picked but not kept
#[component]
fn StepFields(draft: RwSignal<PatternDraft>, index: usize) -> impl IntoView {
    view! {
        <div class="step_child">
            <h2>{format!("Step {}", index + 1)}</h2>
            <FormInput
                placeholder="Title"
                value=Signal::derive(move || draft.with(|d| d.steps[index].title.clone()))
                on_input=move |v: String| draft.update(|d| d.steps[index].title = v)
            />
            <FormTextArea
                placeholder="Instructions..."
                value=Signal::derive(move || draft.with(|d| d.steps[index].instructions.clone()))
                on_input=move |v: String| draft.update(|d| d.steps[index].instructions = v)
            />
            <input type="file" accept="image/*" />
        </div>
    }
}

#[component]
fn MaterialFields(draft: RwSignal<PatternDraft>, index: usize) -> impl IntoView {
    view! {
        <div class="step_child">
            <div class="section_inline section_together">
                <FormInput
                    placeholder="Title"
                    class="form_input small_input"
                    value=Signal::derive(move || draft.with(|d| d.materials[index].label.clone()))
                    on_input=move |v: String| draft.update(|d| d.materials[index].label = v)
                />
                <FormInput
                    placeholder="..."
                    class="form_input small_input"
                    value=Signal::derive(move || draft.with(|d| d.materials[index].value.clone()))
                    on_input=move |v: String| draft.update(|d| d.materials[index].value = v)
                />
            </div>
        </div>
    }
}
