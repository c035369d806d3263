//! Navbar and Footer
//!
//! Site chrome rendered on every page: logo, search box, quick links and
//! the hamburger toggle for narrow screens.

use leptos::prelude::*;

use crochet_core::Route;

use crate::context::use_app_context;
use crate::navigation;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());

    let submit_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        navigation::navigate(&Route::search(&query.get()));
    };
    let my_yarn_href = Route::YarnCatalogue { form_success: false }.href();

    view! {
        <nav
            id="navbar"
            class:nav_hidden=move || ctx.nav_hidden.get()
            class:mobile_menu_main=move || ctx.mobile_menu_open.get()
        >
            <div class="nav_static">
                <div id="site_nav_logo" on:click=move |_| navigation::navigate(&Route::home())>
                    <img src="images/crochetcache_logogram_text.png" alt="" />
                </div>
                <form id="search_form" on:submit=submit_search>
                    <input
                        id="search_bar"
                        type="text"
                        placeholder="Search..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </form>
            </div>
            <ul class="horizontal_list site_control_bar">
                <li>
                    <a href=Route::AddPattern.href() id="add_pattern_button" class="button_look">
                        "Add Pattern"
                    </a>
                </li>
                <li>
                    <a href=my_yarn_href class="button_look" id="my_yarn_button">
                        <img src="images/crochetcache_logogram.png" alt="" />
                        <span>"My Yarn"</span>
                    </a>
                </li>
            </ul>
            <button class="button_look hamburger" id="hamburger" on:click=move |_| ctx.toggle_mobile_menu()>
                <i class="hamburger_patty"></i>
                <i class="hamburger_patty"></i>
                <i class="hamburger_patty"></i>
            </button>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="footer">
            <div class="footer_logo" on:click=move |_| navigation::navigate(&Route::home())>
                <img src="images/crochetcache_logogram_text.png" alt="" />
            </div>
            <ul id="footer_navigation" class="horizontal_list">
                <li><a href=Route::Contact.href()>"Contact"</a></li>
            </ul>
        </footer>
    }
}
