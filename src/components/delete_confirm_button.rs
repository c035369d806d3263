//! Delete Confirm Button Component
//!
//! Two-click delete: the first click asks, the second removes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Remove?" with yes/no buttons.
///
/// # Arguments
/// * `label` - Text of the initial button, also read out to screen readers
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                view! {
                    <button
                        class="button_look remove_yarn_button"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        {label.clone()}
                    </button>
                }
            }
        >
            <span class="delete_confirm">
                <span class="delete_confirm_text">"Remove?"</span>
                <button
                    class="button_look confirm_button"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="button_look button_grey cancel_button"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
