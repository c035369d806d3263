//! Application Context
//!
//! Page chrome state shared via Leptos Context API.

use leptos::prelude::*;

/// Navbar signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Crochet mode on small screens hides the navbar - read
    pub nav_hidden: ReadSignal<bool>,
    /// Crochet mode on small screens hides the navbar - write
    set_nav_hidden: WriteSignal<bool>,
    /// Hamburger menu expanded - read
    pub mobile_menu_open: ReadSignal<bool>,
    /// Hamburger menu expanded - write
    set_mobile_menu_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        nav_hidden: (ReadSignal<bool>, WriteSignal<bool>),
        mobile_menu_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            nav_hidden: nav_hidden.0,
            set_nav_hidden: nav_hidden.1,
            mobile_menu_open: mobile_menu_open.0,
            set_mobile_menu_open: mobile_menu_open.1,
        }
    }

    pub fn set_nav_hidden(&self, hidden: bool) {
        self.set_nav_hidden.set(hidden);
    }

    pub fn toggle_mobile_menu(&self) {
        self.set_mobile_menu_open.update(|open| *open = !*open);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
