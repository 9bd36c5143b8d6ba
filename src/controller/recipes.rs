//! Recipe list controller methods (refresh, search, open)

use crate::data::{Resource, SEARCH_ERROR};
use crate::model::{ActiveSection, SearchOutcome};
use super::AppController;

impl AppController {
    pub async fn refresh_recipes(&self) {
        tracing::debug!("Refreshing recipes");
        let result = self.model.recipes_list.get_recipes().await;

        match result {
            Resource::Success(_) => {
                self.model.mark_refreshed().await;
            }
            Resource::DataError(code) => {
                self.show_error(code).await;
            }
            Resource::Loading => {}
        }
        self.model.clamp_selection().await;
    }

    /// Refresh without blocking the input loop
    pub fn spawn_refresh(&self) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.refresh_recipes().await;
        });
    }

    pub async fn perform_search(&self, query: &str) {
        if query.is_empty() {
            return;
        }

        match self.model.recipes_list.on_search_click(query).await {
            SearchOutcome::Found(recipe) => {
                self.model.recipes_list.open_recipe_details(recipe).await;
                self.model.set_active_section(ActiveSection::List).await;
                self.dispatch_events().await;
            }
            SearchOutcome::NotFound => {
                self.show_error(SEARCH_ERROR).await;
            }
        }
    }

    pub async fn open_selected_recipe(&self) {
        if let Some(recipe) = self.model.get_selected_recipe().await {
            self.model.recipes_list.open_recipe_details(recipe).await;
            self.dispatch_events().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::{ErrorManager, ErrorMapper, ErrorMapperSource, Recipes, RecipesItem, NO_INTERNET_CONNECTION};
    use crate::model::test_support::FakeRepository;
    use crate::model::{AppModel, Screen};

    fn controller(recipes: Resource<Recipes>) -> AppController {
        let model = AppModel::new(Arc::new(FakeRepository::with_recipes(recipes)), ErrorManager::default());
        AppController::new(Arc::new(model))
    }

    fn fish() -> RecipesItem {
        RecipesItem {
            id: "fish".to_string(),
            name: "Crispy Fish Goujons".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn failed_refresh_shows_mapped_toast() {
        let controller = controller(Resource::DataError(NO_INTERNET_CONNECTION));

        controller.refresh_recipes().await;
        let ui = controller.model.get_ui_state().await;
        assert_eq!(ui.toast_message, ErrorMapper.get_error_string(NO_INTERNET_CONNECTION));
        assert!(ui.last_refreshed.is_none());
    }

    #[tokio::test]
    async fn http_status_falls_back_to_generic_toast() {
        let controller = controller(Resource::DataError(503));

        controller.refresh_recipes().await;
        assert_eq!(
            controller.model.get_ui_state().await.toast_message.as_deref(),
            Some("Server answered with HTTP 503")
        );
    }

    #[tokio::test]
    async fn successful_search_opens_details() {
        let controller = controller(Resource::Success(Recipes::new(vec![fish()])));
        controller.refresh_recipes().await;

        controller.perform_search("FISH").await;
        assert_eq!(controller.model.get_ui_state().await.screen, Screen::Details);
        assert_eq!(controller.model.details.recipe_data().await, Some(fish()));
        assert_eq!(controller.model.details.is_favourite_state().await, Resource::Success(false));
    }

    #[tokio::test]
    async fn failed_search_toasts_search_error() {
        let controller = controller(Resource::Success(Recipes::new(vec![fish()])));
        controller.refresh_recipes().await;

        controller.perform_search("pizza").await;
        let ui = controller.model.get_ui_state().await;
        assert_eq!(ui.screen, Screen::RecipesList);
        assert_eq!(ui.toast_message, ErrorMapper.get_error_string(SEARCH_ERROR));
    }

    #[tokio::test]
    async fn open_selected_recipe_uses_selection() {
        let controller = controller(Resource::Success(Recipes::new(vec![fish()])));
        controller.refresh_recipes().await;

        controller.open_selected_recipe().await;
        assert_eq!(controller.model.get_ui_state().await.screen, Screen::Details);
    }
}
