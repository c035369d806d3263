//! Add Yarn Page
//!
//! Validates the new yarn, confirms, then returns to the yarn table with
//! the success banner. The yarn itself is not stored.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crochet_core::{validation_error, AddYarnForm, FieldError, FormStatus, Route};

use super::form_fields::{FieldErrors, FormInput, SubmitStatus};
use crate::config::use_site_config;
use crate::navigation;

#[component]
pub fn AddYarnPage() -> impl IntoView {
    let config = use_site_config();
    let form = RwSignal::new(AddYarnForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let status = RwSignal::new(None::<(FormStatus, &'static str)>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.with(AddYarnForm::validate) {
            Ok(()) => {
                log::info!("Yarn added: {}", form.with(|f| f.name.clone()));
                errors.set(Vec::new());
                status.set(Some((FormStatus::Success, "Yarn Added!")));

                let delay = config.redirect_delay_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    navigation::navigate(&Route::YarnCatalogue { form_success: true });
                });
            }
            Err(failed) => {
                log::debug!("Add yarn rejected: {}", validation_error(&failed));
                errors.set(failed);
                status.set(Some((FormStatus::Failure, "Yarn not added!")));
            }
        }
    };

    view! {
        <section id="add_yarn">
            <h1>"Add Yarn"</h1>
            <form id="add_yarn_form" novalidate=true on:submit=submit>
                <FormInput
                    placeholder="Name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=move |v: String| form.update(|f| f.name = v)
                />
                <FormInput
                    placeholder="Colour name"
                    value=Signal::derive(move || form.with(|f| f.colour_name.clone()))
                    on_input=move |v: String| form.update(|f| f.colour_name = v)
                />
                <div class="section_inline section_together">
                    <FormInput
                        placeholder="Weight"
                        class="form_input small_input"
                        value=Signal::derive(move || form.with(|f| f.weight.clone()))
                        on_input=move |v: String| form.update(|f| f.weight = v)
                    />
                    <FormInput
                        placeholder="Material"
                        class="form_input small_input"
                        value=Signal::derive(move || form.with(|f| f.material.clone()))
                        on_input=move |v: String| form.update(|f| f.material = v)
                    />
                    <FormInput
                        placeholder="Skeins"
                        input_type="number"
                        class="form_input small_input"
                        value=Signal::derive(move || form.with(|f| f.quantity.clone()))
                        on_input=move |v: String| form.update(|f| f.quantity = v)
                    />
                </div>
                <FieldErrors errors=errors />
                <button type="submit" class="button_look">"Add Yarn"</button>
            </form>
            <SubmitStatus status=status />
        </section>
    }
}
