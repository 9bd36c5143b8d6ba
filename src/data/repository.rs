//! Repository composing the remote recipe source and the local favourites

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::dto::Recipes;
use super::error::DEFAULT_ERROR;
use super::local::LocalData;
use super::remote::RemoteDataSource;
use super::resource::Resource;

/// Everything the view-models need from the data layer
#[async_trait]
pub trait DataRepositorySource: Send + Sync {
    async fn request_recipes(&self) -> Resource<Recipes>;

    /// `Success(true)` when `id` was newly added and persisted,
    /// `Success(false)` when it was already a favourite or the write failed.
    async fn add_to_favourite(&self, id: &str) -> Resource<bool>;

    async fn remove_from_favourite(&self, id: &str) -> Resource<bool>;

    async fn is_favourite(&self, id: &str) -> Resource<bool>;
}

pub struct DataRepository {
    remote: Arc<dyn RemoteDataSource>,
    local: LocalData,
    // Serializes read-modify-write sequences on the favourites set
    favourites_lock: Mutex<()>,
}

impl DataRepository {
    pub fn new(remote: Arc<dyn RemoteDataSource>, local: LocalData) -> Self {
        Self {
            remote,
            local,
            favourites_lock: Mutex::new(()),
        }
    }

    /// Run a preference operation on the blocking pool
    async fn run_local<T, F>(&self, operation: &'static str, f: F) -> Resource<T>
    where
        T: Send + 'static,
        F: FnOnce(LocalData) -> Resource<T> + Send + 'static,
    {
        let local = self.local.clone();
        match tokio::task::spawn_blocking(move || f(local)).await {
            Ok(resource) => resource,
            Err(e) => {
                tracing::error!(operation, error = %e, "Local data task failed");
                Resource::DataError(DEFAULT_ERROR)
            }
        }
    }
}

#[async_trait]
impl DataRepositorySource for DataRepository {
    async fn request_recipes(&self) -> Resource<Recipes> {
        let remote = self.remote.clone();
        match tokio::spawn(async move { remote.request_recipes().await }).await {
            Ok(resource) => resource,
            Err(e) => {
                tracing::error!(error = %e, "Recipes request task failed");
                Resource::DataError(DEFAULT_ERROR)
            }
        }
    }

    async fn add_to_favourite(&self, id: &str) -> Resource<bool> {
        let _guard = self.favourites_lock.lock().await;
        let id = id.to_string();
        self.run_local("add_to_favourite", move |local| {
            match local.get_cached_favourites() {
                Resource::Success(mut favourites) => {
                    if favourites.insert(id.clone()) {
                        tracing::debug!(id = %id, "Adding recipe to favourites");
                        local.cache_favourites(favourites)
                    } else {
                        tracing::debug!(id = %id, "Recipe already a favourite");
                        Resource::Success(false)
                    }
                }
                Resource::DataError(code) => Resource::DataError(code),
                Resource::Loading => Resource::Loading,
            }
        })
        .await
    }

    async fn remove_from_favourite(&self, id: &str) -> Resource<bool> {
        let _guard = self.favourites_lock.lock().await;
        let id = id.to_string();
        self.run_local("remove_from_favourite", move |local| local.remove_from_favourites(&id))
            .await
    }

    async fn is_favourite(&self, id: &str) -> Resource<bool> {
        let id = id.to_string();
        self.run_local("is_favourite", move |local| local.is_favourite(&id))
            .await
    }
}
