//! Crochet Catalogue Core
//!
//! Platform-independent logic behind the catalogue site: the pattern data
//! model, the store and category index, crochet-mode navigation with its
//! round indexing and progress tracking, search, the yarn inventory, page
//! routes and form validation.
//!
//! Nothing here touches the browser. Durable progress goes through the
//! [`ProgressStorage`] trait, so the same tracker runs against
//! `localStorage` in the frontend and an in-memory map in tests.

mod error;
mod model;
mod catalogue;
mod navigator;
mod rounds;
mod progress;
mod search;
mod yarn;
mod overview;
mod route;
mod forms;

pub use error::{CatalogueError, CatalogueResult};
pub use model::{DetailValue, Image, PatternRecord, Step, Substep, YarnRequirement};
pub use catalogue::{Catalogue, CategoryIndex, PatternStore, POPULAR_PATTERNS};
pub use navigator::StepCursor;
pub use rounds::{index_rounds, IndexedRound, IndexedStep, IndexedSubstep};
pub use progress::{MemoryStorage, ProgressKey, ProgressStorage, ProgressTracker};
pub use search::search_patterns;
pub use yarn::{YarnInventory, YarnRecord, YarnRow};
pub use overview::{detail_rows, gallery_thumbnails, yarn_sentence, Thumbnail};
pub use route::{Route, SITE_DOCUMENT};
pub use forms::{
    validation_error, AddYarnForm, ContactForm, FieldError, FormStatus, MaterialDraft, PatternDraft,
    StepDraft,
};
