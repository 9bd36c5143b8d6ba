//! Model module - view-models and application state
//!
//! - `types`: Core type definitions (screens, UI state, search outcome)
//! - `event`: One-shot events raised by view-models
//! - `recipes_list`: View-model of the recipe list screen
//! - `details`: View-model of the recipe detail screen
//! - `app_model`: Main application model with state management methods

mod types;
mod event;
mod recipes_list;
mod details;
mod app_model;
#[cfg(test)]
pub(crate) mod test_support;

pub use types::{ActiveSection, Screen, SearchOutcome, UiState};

pub use event::SingleEvent;

pub use recipes_list::RecipesListViewModel;

pub use details::DetailsViewModel;

pub use app_model::{AppModel, TOAST_DURATION};
