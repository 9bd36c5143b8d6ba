//! In-memory repository for view-model tests

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::data::{DataRepositorySource, Recipes, Resource};

pub struct FakeRepository {
    recipes: Resource<Recipes>,
    favourites: Mutex<HashSet<String>>,
    favourite_error: Option<i32>,
}

impl Default for FakeRepository {
    fn default() -> Self {
        Self::with_recipes(Resource::Success(Recipes::default()))
    }
}

impl FakeRepository {
    pub fn with_recipes(recipes: Resource<Recipes>) -> Self {
        Self {
            recipes,
            favourites: Mutex::new(HashSet::new()),
            favourite_error: None,
        }
    }

    pub fn with_favourites<const N: usize>(ids: [&str; N]) -> Self {
        let repo = Self::default();
        repo.favourites.lock().unwrap().extend(ids.iter().map(|id| id.to_string()));
        repo
    }

    /// Every favourite operation answers `DataError(code)`
    pub fn failing_favourites(code: i32) -> Self {
        Self {
            favourite_error: Some(code),
            ..Self::default()
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.favourites.lock().unwrap().contains(id)
    }
}

#[async_trait]
impl DataRepositorySource for FakeRepository {
    async fn request_recipes(&self) -> Resource<Recipes> {
        self.recipes.clone()
    }

    async fn add_to_favourite(&self, id: &str) -> Resource<bool> {
        if let Some(code) = self.favourite_error {
            return Resource::DataError(code);
        }
        Resource::Success(self.favourites.lock().unwrap().insert(id.to_string()))
    }

    async fn remove_from_favourite(&self, id: &str) -> Resource<bool> {
        if let Some(code) = self.favourite_error {
            return Resource::DataError(code);
        }
        self.favourites.lock().unwrap().remove(id);
        Resource::Success(true)
    }

    async fn is_favourite(&self, id: &str) -> Resource<bool> {
        if let Some(code) = self.favourite_error {
            return Resource::DataError(code);
        }
        Resource::Success(self.contains(id))
    }
}
