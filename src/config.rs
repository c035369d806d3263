//! Site Configuration
//!
//! Compiled-in settings shared by every page of the site.

use leptos::prelude::expect_context;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Pattern document, relative to the page
    pub patterns_url: String,
    /// Yarn document, relative to the page
    pub yarn_url: String,
    pub log_level: LevelFilter,
    /// Below this width crochet mode hides the navbar
    pub mobile_breakpoint_px: f64,
    /// Pause after a successful form before leaving the page
    pub redirect_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            patterns_url: "data/patterns.json".to_string(),
            yarn_url: "data/yarn.json".to_string(),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            mobile_breakpoint_px: 750.0,
            redirect_delay_ms: 1200,
        }
    }
}

/// Get the site config from context
pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}
