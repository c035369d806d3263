//! Crochet Catalogue App
//!
//! Parses the page route once, starts both document loads and renders the
//! page between the shared navbar and footer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crochet_core::Route;

use crate::components::{
    AddPatternPage, AddYarnPage, CategorySections, ContactPage, CrochetMode, Footer, Navbar,
    NotFound, PatternOverview, SearchResults, YarnCataloguePage,
};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::fetch;
use crate::navigation;
use crate::store::{
    store_patterns_failed, store_set_catalogue, store_set_yarn, store_yarn_failed, AppState,
};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let route = navigation::current_route();
    log::info!("Opening {:?}", route);

    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(signal(false), signal(false)));
    provide_context(config.clone());

    // The two documents load independently; one failing leaves the other usable
    let patterns_url = config.patterns_url.clone();
    spawn_local(async move {
        match fetch::load_patterns(&patterns_url).await {
            Ok(catalogue) => store_set_catalogue(&store, catalogue),
            Err(err) => {
                log::error!("Failed to load patterns: {}", err);
                store_patterns_failed(&store);
            }
        }
    });

    let yarn_url = config.yarn_url.clone();
    spawn_local(async move {
        match fetch::load_yarn(&yarn_url).await {
            Ok(yarn) => store_set_yarn(&store, yarn),
            Err(err) => {
                log::error!("Failed to load yarn: {}", err);
                store_yarn_failed(&store);
            }
        }
    });

    view! {
        <Navbar />
        <main id="main">{page(route)}</main>
        <Footer />
    }
}

fn page(route: Route) -> AnyView {
    match route {
        Route::Index { search: None } => view! { <CategorySections /> }.into_any(),
        Route::Index { search: Some(query) } => view! {
            <SearchResults query=query />
            <CategorySections />
        }
        .into_any(),
        Route::PatternOverview { pattern: Some(key) } => {
            view! { <PatternOverview pattern_key=key /> }.into_any()
        }
        Route::CrochetMode { pattern: Some(key), step } => {
            view! { <CrochetMode pattern_key=key step=step /> }.into_any()
        }
        Route::PatternOverview { pattern: None } | Route::CrochetMode { pattern: None, .. } => {
            view! { <NotFound message="No pattern was chosen." /> }.into_any()
        }
        Route::YarnCatalogue { form_success } => {
            view! { <YarnCataloguePage form_success=form_success /> }.into_any()
        }
        Route::Contact => view! { <ContactPage /> }.into_any(),
        Route::AddYarn => view! { <AddYarnPage /> }.into_any(),
        Route::AddPattern => view! { <AddPatternPage /> }.into_any(),
    }
}
