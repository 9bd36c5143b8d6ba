//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, scrollable lists)
//! - `layout`: Top bar and key hint footer
//! - `list`: Recipe list screen
//! - `details`: Recipe detail screen
//! - `overlays`: Modal overlays (toast, help)

mod utils;
mod layout;
mod list;
mod details;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::data::{Recipes, RecipesItem, Resource};
use crate::model::{Screen, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        recipes: &Resource<Recipes>,
        recipe: Option<&RecipesItem>,
        is_favourite: &Resource<bool>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + status
                Constraint::Min(0),    // Screen content
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, recipes);

        match ui_state.screen {
            Screen::RecipesList => list::render_recipes_list(frame, chunks[1], ui_state, recipes),
            Screen::Details => details::render_details(frame, chunks[1], recipe, is_favourite),
        }

        layout::render_footer(frame, chunks[2], ui_state.screen);

        if ui_state.toast_message.is_some() {
            overlays::render_toast(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
