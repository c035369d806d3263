//! Not Found placeholder

use leptos::prelude::*;

use crochet_core::Route;

#[component]
pub fn NotFound(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <section class="not_found">
            <h1>"Pattern not found"</h1>
            <p>{message}</p>
            <a href=Route::home().href() class="button_look">"Back to patterns"</a>
        </section>
    }
}
