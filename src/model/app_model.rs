//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::data::{DataRepositorySource, ErrorManager, RecipesItem};

use super::details::DetailsViewModel;
use super::recipes_list::RecipesListViewModel;
use super::types::{ActiveSection, Screen, UiState};

/// How long a toast stays up before it is cleared automatically
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Main application model containing all state
pub struct AppModel {
    pub recipes_list: RecipesListViewModel,
    pub details: DetailsViewModel,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(repository: Arc<dyn DataRepositorySource>, error_manager: ErrorManager) -> Self {
        Self {
            recipes_list: RecipesListViewModel::new(repository.clone(), error_manager),
            details: DetailsViewModel::new(repository),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    // ========================================================================
    // Screens & focus
    // ========================================================================

    pub async fn show_details(&self, recipe: RecipesItem) {
        self.details.init_recipe_data(recipe).await;
        let mut state = self.ui_state.lock().await;
        state.screen = Screen::Details;
    }

    pub async fn show_recipes_list(&self) {
        let mut state = self.ui_state.lock().await;
        state.screen = Screen::RecipesList;
    }

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    // ========================================================================
    // List selection
    // ========================================================================

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.selected_index = state.selected_index.saturating_sub(1);
    }

    pub async fn move_selection_down(&self) {
        let len = self.recipe_count().await;
        let mut state = self.ui_state.lock().await;
        if state.selected_index < len.saturating_sub(1) {
            state.selected_index += 1;
        }
    }

    /// Keep the selection inside the current list after a reload
    pub async fn clamp_selection(&self) {
        let len = self.recipe_count().await;
        let mut state = self.ui_state.lock().await;
        state.selected_index = state.selected_index.min(len.saturating_sub(1));
    }

    pub async fn get_selected_recipe(&self) -> Option<RecipesItem> {
        let index = self.ui_state.lock().await.selected_index;
        self.recipes_list
            .recipes()
            .await
            .into_data()
            .and_then(|recipes| recipes.recipes_list.into_iter().nth(index))
    }

    async fn recipe_count(&self) -> usize {
        self.recipes_list
            .recipes()
            .await
            .data()
            .map(|recipes| recipes.len())
            .unwrap_or(0)
    }

    pub async fn mark_refreshed(&self) {
        let mut state = self.ui_state.lock().await;
        state.last_refreshed = Some(chrono::Local::now());
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    pub async fn clear_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.clear();
    }

    // ========================================================================
    // Toasts & overlays
    // ========================================================================

    pub async fn set_toast(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.toast_message = Some(message);
        state.toast_timestamp = Some(Instant::now());
    }

    pub async fn clear_toast(&self) {
        let mut state = self.ui_state.lock().await;
        state.toast_message = None;
        state.toast_timestamp = None;
    }

    pub async fn has_toast(&self) -> bool {
        self.ui_state.lock().await.toast_message.is_some()
    }

    pub async fn auto_clear_old_toasts(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.toast_timestamp {
            if timestamp.elapsed() > TOAST_DURATION {
                state.toast_message = None;
                state.toast_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Recipes, Resource};
    use crate::model::test_support::FakeRepository;

    fn recipes(names: &[&str]) -> Recipes {
        Recipes::new(
            names
                .iter()
                .map(|name| RecipesItem {
                    id: name.to_string(),
                    name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
        )
    }

    async fn loaded_model(names: &[&str]) -> AppModel {
        let repo = FakeRepository::with_recipes(Resource::Success(recipes(names)));
        let model = AppModel::new(Arc::new(repo), ErrorManager::default());
        model.recipes_list.get_recipes().await;
        model
    }

    #[tokio::test]
    async fn selection_stays_within_list() {
        let model = loaded_model(&["a", "b"]).await;

        model.move_selection_up().await;
        assert_eq!(model.get_ui_state().await.selected_index, 0);

        model.move_selection_down().await;
        model.move_selection_down().await;
        assert_eq!(model.get_ui_state().await.selected_index, 1);
        assert_eq!(model.get_selected_recipe().await.map(|r| r.name), Some("b".to_string()));
    }

    #[tokio::test]
    async fn clamp_selection_after_shorter_reload() {
        let model = loaded_model(&[]).await;
        model.ui_state.lock().await.selected_index = 4;

        model.clamp_selection().await;
        assert_eq!(model.get_ui_state().await.selected_index, 0);
    }

    #[tokio::test]
    async fn show_details_switches_screen() {
        let model = loaded_model(&["a"]).await;
        let recipe = model.get_selected_recipe().await.unwrap();

        model.show_details(recipe.clone()).await;
        assert_eq!(model.get_ui_state().await.screen, Screen::Details);
        assert_eq!(model.details.recipe_data().await, Some(recipe));

        model.show_recipes_list().await;
        assert_eq!(model.get_ui_state().await.screen, Screen::RecipesList);
    }

    #[tokio::test]
    async fn fresh_toast_survives_auto_clear() {
        let model = loaded_model(&[]).await;

        model.set_toast("offline".to_string()).await;
        model.auto_clear_old_toasts().await;
        assert!(model.has_toast().await);

        model.clear_toast().await;
        assert!(!model.has_toast().await);
    }

    #[tokio::test]
    async fn search_query_editing() {
        let model = loaded_model(&[]).await;

        for c in "fishy".chars() {
            model.append_to_search(c).await;
        }
        model.backspace_search().await;
        assert_eq!(model.get_ui_state().await.search_query, "fish");

        model.clear_search().await;
        assert!(model.get_ui_state().await.search_query.is_empty());
    }
}
