//! UI Components
//!
//! Page views and the pieces they share.

mod navbar;
mod patterns_gate;
mod pattern_card;
mod category_sections;
mod search_results;
mod pattern_overview;
mod crochet_mode;
mod form_fields;
mod delete_confirm_button;
mod yarn_table;
mod contact_form;
mod add_yarn_form;
mod add_pattern_form;
mod not_found;

pub use navbar::{Footer, Navbar};
pub use patterns_gate::PatternsGate;
pub use category_sections::CategorySections;
pub use search_results::SearchResults;
pub use pattern_overview::PatternOverview;
pub use crochet_mode::CrochetMode;
pub use delete_confirm_button::DeleteConfirmButton;
pub use yarn_table::YarnCataloguePage;
pub use contact_form::ContactPage;
pub use add_yarn_form::AddYarnPage;
pub use add_pattern_form::AddPatternPage;
pub use not_found::NotFound;
