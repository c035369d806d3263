//! Form Fields
//!
//! Inputs and the error list shared by the site's forms.

use leptos::prelude::*;

use crochet_core::{FieldError, FormStatus};

/// Single-line input bound to a string field
#[component]
pub fn FormInput(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "form_input")] class: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            class=class
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Multi-line input bound to a string field
#[component]
pub fn FormTextArea(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <textarea
            class="form_input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
    }
}

/// Failed fields from the last submit, if any
#[component]
pub fn FieldErrors(errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|errors| !errors.is_empty())>
            <ul class="form_errors">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|err| view! { <li>{format!("{} {}", err.field.replace('_', " "), err.message)}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}

/// Status line under a submitted form
#[component]
pub fn SubmitStatus(status: RwSignal<Option<(FormStatus, &'static str)>>) -> impl IntoView {
    view! {
        <p
            id="submit_status"
            class=move || status.get().map(|(kind, _)| kind.css_class()).unwrap_or_default()
        >
            {move || status.get().map(|(_, message)| message)}
        </p>
    }
}
