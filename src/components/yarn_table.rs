//! Yarn Catalogue Page
//!
//! The "My Yarn" table. Deleting a row only removes it from this page's
//! in-memory inventory.

use leptos::prelude::*;

use crochet_core::{Route, YarnRow};

use super::DeleteConfirmButton;
use crate::navigation;
use crate::store::{store_remove_yarn, use_app_store, AppStateStoreFields, LoadState};

#[component]
pub fn YarnCataloguePage(form_success: bool) -> impl IntoView {
    let store = use_app_store();

    let rows = move || match store.yarn_state().get() {
        LoadState::Loading => view! { <tr><td colspan="8" class="load_status">"Loading yarn..."</td></tr> }.into_any(),
        LoadState::Failed => view! {
            <tr><td colspan="8" class="load_status load_failed">"Yarn could not be loaded."</td></tr>
        }
        .into_any(),
        LoadState::Ready => view! {
            <For
                each=move || store.yarn().with(|yarn| yarn.rows())
                key=|row| row.key.clone()
                children=|row| view! { <YarnTableRow row=row /> }
            />
        }
        .into_any(),
    };

    view! {
        <section id="yarn_catalogue">
            <h1>"My Yarn"</h1>
            <Show when=move || form_success>
                <p class="form_success">"Yarn Added!"</p>
            </Show>
            <button
                id="add_yarn_button"
                class="button_look"
                on:click=move |_| navigation::navigate(&Route::AddYarn)
            >
                "Add Yarn"
            </button>
            <table id="yarn_table">
                <thead>
                    <tr>
                        <th>"Preview"</th>
                        <th>"Colour"</th>
                        <th>"Colour Name"</th>
                        <th>"Name"</th>
                        <th>"Weight"</th>
                        <th>"Material"</th>
                        <th>"Quantity"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="yarn_tbody">{rows}</tbody>
            </table>
        </section>
    }
}

#[component]
fn YarnTableRow(row: YarnRow) -> impl IntoView {
    let store = use_app_store();
    let row_id = row.row_id();
    let image_id = format!("{}_image", row.key);
    let colour_id = format!("{}_colourblock", row.key);
    let alt = row.preview_alt();
    let YarnRow { key, record } = row;
    let remove = Callback::new(move |_: ()| store_remove_yarn(&store, &key));

    view! {
        <tr id=row_id>
            <td id=image_id class="image_cell">
                <img class="yarn_preview_image" src=record.preview alt=alt />
            </td>
            <td
                id=colour_id
                class="yarn_colour_block"
                style:background-color=record.color
            ></td>
            <td>{record.colour_name}</td>
            <td>{record.name}</td>
            <td>{record.weight}</td>
            <td>{record.material}</td>
            <td>{record.quantity}</td>
            <td>
                <DeleteConfirmButton label="Delete" on_confirm=remove />
            </td>
        </tr>
    }
}
