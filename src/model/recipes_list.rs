//! View-model behind the recipe list screen

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::data::{DataRepositorySource, ErrorLookupError, ErrorManager, Recipes, RecipesItem, Resource};

use super::event::SingleEvent;
use super::types::SearchOutcome;

/// Loads the recipe list, searches it and raises navigation and toast events
#[derive(Clone)]
pub struct RecipesListViewModel {
    repository: Arc<dyn DataRepositorySource>,
    error_manager: ErrorManager,
    recipes: Arc<Mutex<Resource<Recipes>>>,
    search_outcome: Arc<Mutex<Option<SearchOutcome>>>,
    open_recipe_details: Arc<Mutex<Option<SingleEvent<RecipesItem>>>>,
    toast: Arc<Mutex<Option<SingleEvent<String>>>>,
}

impl RecipesListViewModel {
    pub fn new(repository: Arc<dyn DataRepositorySource>, error_manager: ErrorManager) -> Self {
        Self {
            repository,
            error_manager,
            recipes: Arc::new(Mutex::new(Resource::Loading)),
            search_outcome: Arc::new(Mutex::new(None)),
            open_recipe_details: Arc::new(Mutex::new(None)),
            toast: Arc::new(Mutex::new(None)),
        }
    }

    /// Fetch the list. State is `Loading` until the repository answers.
    pub async fn get_recipes(&self) -> Resource<Recipes> {
        *self.recipes.lock().await = Resource::Loading;

        let result = self.repository.request_recipes().await;
        match &result {
            Resource::Success(recipes) => tracing::info!(count = recipes.len(), "Recipe list loaded"),
            Resource::DataError(code) => tracing::warn!(code, "Recipe list failed to load"),
            Resource::Loading => {}
        }

        *self.recipes.lock().await = result.clone();
        result
    }

    pub async fn recipes(&self) -> Resource<Recipes> {
        self.recipes.lock().await.clone()
    }

    pub async fn open_recipe_details(&self, recipe: RecipesItem) {
        *self.open_recipe_details.lock().await = Some(SingleEvent::new(recipe));
    }

    /// Pending navigation request, delivered once
    pub async fn take_open_recipe_details(&self) -> Option<RecipesItem> {
        self.open_recipe_details
            .lock()
            .await
            .as_mut()
            .and_then(SingleEvent::get_content_if_not_handled)
    }

    /// Queue the message mapped to `error_code` as a toast
    pub async fn show_toast_message(&self, error_code: i32) -> Result<(), ErrorLookupError> {
        let error = self.error_manager.get_error(error_code)?;
        *self.toast.lock().await = Some(SingleEvent::new(error.description));
        Ok(())
    }

    /// Pending toast, delivered once
    pub async fn take_toast(&self) -> Option<String> {
        self.toast
            .lock()
            .await
            .as_mut()
            .and_then(SingleEvent::get_content_if_not_handled)
    }

    /// Find the first loaded recipe whose name contains `recipe_name`, ignoring case
    pub async fn on_search_click(&self, recipe_name: &str) -> SearchOutcome {
        let found = self
            .recipes
            .lock()
            .await
            .data()
            .and_then(|recipes| recipes.find_by_name(recipe_name))
            .cloned();

        let outcome = match found {
            Some(recipe) => SearchOutcome::Found(recipe),
            None => SearchOutcome::NotFound,
        };
        tracing::debug!(query = recipe_name, found = matches!(outcome, SearchOutcome::Found(_)), "Search completed");

        *self.search_outcome.lock().await = Some(outcome.clone());
        outcome
    }

    pub async fn search_outcome(&self) -> Option<SearchOutcome> {
        self.search_outcome.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ErrorMapper, ErrorMapperSource, NETWORK_ERROR, NO_INTERNET_CONNECTION, SEARCH_ERROR};
    use crate::model::test_support::FakeRepository;

    fn named(name: &str) -> RecipesItem {
        RecipesItem {
            id: format!("id-{name}"),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn view_model(repository: FakeRepository) -> RecipesListViewModel {
        RecipesListViewModel::new(Arc::new(repository), ErrorManager::default())
    }

    #[tokio::test]
    async fn get_recipes_publishes_repository_result() {
        let recipes = Recipes::new(vec![named("Fish Tacos")]);
        let vm = view_model(FakeRepository::with_recipes(Resource::Success(recipes.clone())));

        assert!(vm.recipes().await.is_loading());
        vm.get_recipes().await;
        assert_eq!(vm.recipes().await, Resource::Success(recipes));
    }

    #[tokio::test]
    async fn get_recipes_publishes_errors() {
        let vm = view_model(FakeRepository::with_recipes(Resource::DataError(NO_INTERNET_CONNECTION)));

        vm.get_recipes().await;
        assert_eq!(vm.recipes().await.error_code(), Some(NO_INTERNET_CONNECTION));
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let recipes = Recipes::new(vec![named("Crispy Fish Goujons"), named("Salad")]);
        let vm = view_model(FakeRepository::with_recipes(Resource::Success(recipes)));
        vm.get_recipes().await;

        assert_eq!(vm.on_search_click("fISh").await, SearchOutcome::Found(named("Crispy Fish Goujons")));
        assert_eq!(vm.search_outcome().await, Some(SearchOutcome::Found(named("Crispy Fish Goujons"))));
    }

    #[tokio::test]
    async fn search_without_match_signals_not_found() {
        let vm = view_model(FakeRepository::with_recipes(Resource::Success(Recipes::new(vec![named("Salad")]))));
        vm.get_recipes().await;

        assert_eq!(vm.on_search_click("pizza").await, SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn search_before_load_is_not_found() {
        let vm = view_model(FakeRepository::with_recipes(Resource::DataError(NETWORK_ERROR)));

        assert_eq!(vm.on_search_click("fish").await, SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn open_details_event_fires_once() {
        let vm = view_model(FakeRepository::default());

        vm.open_recipe_details(named("Salad")).await;
        assert_eq!(vm.take_open_recipe_details().await, Some(named("Salad")));
        assert_eq!(vm.take_open_recipe_details().await, None);
    }

    #[tokio::test]
    async fn toast_uses_mapped_message() {
        let vm = view_model(FakeRepository::default());

        vm.show_toast_message(SEARCH_ERROR).await.unwrap();
        assert_eq!(vm.take_toast().await, ErrorMapper.get_error_string(SEARCH_ERROR));
        assert_eq!(vm.take_toast().await, None);
    }

    #[tokio::test]
    async fn toast_for_unknown_code_fails() {
        let vm = view_model(FakeRepository::default());

        assert_eq!(vm.show_toast_message(404).await, Err(ErrorLookupError::UnknownCode(404)));
        assert_eq!(vm.take_toast().await, None);
    }
}
