//! Page Navigation
//!
//! Every view lives in the one site document and is chosen by its query, so
//! moving between routes is a full location change to a new query.

use crochet_core::Route;
use leptos::prelude::window;

/// Route for the query currently loaded
pub fn current_route() -> Route {
    let query = window().location().search().unwrap_or_default();
    Route::parse(&query)
}

pub fn navigate(route: &Route) {
    let href = route.href();
    log::debug!("Navigating to {}", href);
    if let Err(err) = window().location().set_href(&href) {
        log::error!("Navigation to {} failed: {:?}", href, err);
    }
}

/// Previous page in history, or the index when there is none or going
/// back fails
pub fn go_back_or_home() {
    let history = window().history().ok();
    let length = history.as_ref().and_then(|history| history.length().ok());

    let fallback = back_or_home(length, || match &history {
        Some(history) => history.back(),
        None => Ok(()),
    });
    if let Some(route) = fallback {
        navigate(&route);
    }
}

/// Runs `back` when there is an earlier entry; the route to load instead
/// when there is none or `back` fails
fn back_or_home<E: std::fmt::Debug>(
    history_length: Option<u32>,
    back: impl FnOnce() -> Result<(), E>,
) -> Option<Route> {
    if history_length.is_some_and(|length| length > 1) {
        match back() {
            Ok(()) => return None,
            Err(err) => log::warn!("Going back failed: {:?}", err),
        }
    }
    Some(Route::home())
}

/// Device screen width in CSS pixels
pub fn screen_width() -> Option<f64> {
    window()
        .screen()
        .and_then(|screen| screen.width())
        .ok()
        .map(f64::from)
}
