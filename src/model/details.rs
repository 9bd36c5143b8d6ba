//! View-model behind the recipe detail screen

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::data::{DataRepositorySource, RecipesItem, Resource};

/// Holds the shown recipe and its favourite state
#[derive(Clone)]
pub struct DetailsViewModel {
    repository: Arc<dyn DataRepositorySource>,
    recipe: Arc<Mutex<Option<RecipesItem>>>,
    is_favourite: Arc<Mutex<Resource<bool>>>,
}

impl DetailsViewModel {
    pub fn new(repository: Arc<dyn DataRepositorySource>) -> Self {
        Self {
            repository,
            recipe: Arc::new(Mutex::new(None)),
            is_favourite: Arc::new(Mutex::new(Resource::Loading)),
        }
    }

    pub async fn init_recipe_data(&self, recipe: RecipesItem) {
        *self.recipe.lock().await = Some(recipe);
        *self.is_favourite.lock().await = Resource::Loading;
    }

    pub async fn recipe_data(&self) -> Option<RecipesItem> {
        self.recipe.lock().await.clone()
    }

    pub async fn is_favourite_state(&self) -> Resource<bool> {
        self.is_favourite.lock().await.clone()
    }

    async fn recipe_id(&self) -> Option<String> {
        self.recipe.lock().await.as_ref().map(|recipe| recipe.id.clone())
    }

    pub async fn add_to_favourites(&self) {
        let Some(id) = self.recipe_id().await else {
            return;
        };
        *self.is_favourite.lock().await = Resource::Loading;

        let is_added = self.repository.add_to_favourite(&id).await;
        tracing::info!(id = %id, result = ?is_added, "Add to favourites finished");
        *self.is_favourite.lock().await = is_added;
    }

    /// A successful removal leaves the recipe un-favourited, so the state is
    /// the negation of the repository answer.
    pub async fn remove_from_favourites(&self) {
        let Some(id) = self.recipe_id().await else {
            return;
        };
        *self.is_favourite.lock().await = Resource::Loading;

        let is_removed = self.repository.remove_from_favourite(&id).await;
        tracing::info!(id = %id, result = ?is_removed, "Remove from favourites finished");
        *self.is_favourite.lock().await = is_removed.map(|removed| !removed);
    }

    pub async fn is_favourites(&self) {
        let Some(id) = self.recipe_id().await else {
            return;
        };
        *self.is_favourite.lock().await = Resource::Loading;

        let state = self.repository.is_favourite(&id).await;
        *self.is_favourite.lock().await = state;
    }

    /// Remove when currently a favourite, add otherwise
    pub async fn toggle_favourite(&self) {
        if self.is_favourite_state().await == Resource::Success(true) {
            self.remove_from_favourites().await;
        } else {
            self.add_to_favourites().await;
        }
    }
}
