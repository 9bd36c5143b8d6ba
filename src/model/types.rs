//! Core type definitions for the application

use std::time::Instant;

use chrono::{DateTime, Local};

/// Which screen is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    RecipesList,
    Details,
}

/// Which part of the list screen has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    Search,
    #[default]
    List,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::List,
            ActiveSection::List => ActiveSection::Search,
        }
    }
}

/// Result of a substring search over the loaded recipes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(crate::data::RecipesItem),
    NotFound,
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub screen: Screen,
    pub active_section: ActiveSection,
    pub search_query: String,
    pub selected_index: usize,
    pub toast_message: Option<String>,
    pub toast_timestamp: Option<Instant>,
    pub show_help_popup: bool,
    pub last_refreshed: Option<DateTime<Local>>,
}
