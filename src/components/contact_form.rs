//! Contact Page

use leptos::prelude::*;

use crochet_core::{ContactForm, FormStatus};

use super::form_fields::{FormInput, FormTextArea, SubmitStatus};

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(None::<(FormStatus, &'static str)>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        status.set(Some(form.with(ContactForm::submit)));
    };

    view! {
        <section id="contact">
            <h1>"Contact Us"</h1>
            <form id="send-message" novalidate=true on:submit=submit>
                <FormInput
                    placeholder="Name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=move |v: String| form.update(|f| f.name = v)
                />
                <FormInput
                    placeholder="Email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=move |v: String| form.update(|f| f.email = v)
                />
                <FormTextArea
                    placeholder="Message..."
                    value=Signal::derive(move || form.with(|f| f.message.clone()))
                    on_input=move |v: String| form.update(|f| f.message = v)
                />
                <button type="submit" class="button_look">"Send"</button>
            </form>
            <SubmitStatus status=status />
        </section>
    }
}
