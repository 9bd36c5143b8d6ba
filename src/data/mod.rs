//! Data layer - remote and local sources behind a single repository
//!
//! - `resource`: `Resource<T>` result wrapper shared by every source
//! - `dto`: recipe payloads as served by the endpoint
//! - `error`: error codes, the code-to-message table and the error manager
//! - `remote`: HTTP fetcher for the recipe list
//! - `local`: favourites set kept in a flat preference file
//! - `repository`: composition of remote and local sources

mod resource;
mod dto;
mod error;
mod remote;
mod local;
mod repository;

#[cfg(test)]
pub(crate) mod test_support;

pub use resource::Resource;

pub use dto::{Recipes, RecipesItem};

pub use error::{
    DataErrorKind, Error, ErrorLookupError, ErrorManager, ErrorMapper, ErrorMapperSource,
    DEFAULT_ERROR, KNOWN_CODES, NETWORK_ERROR, NO_INTERNET_CONNECTION, SEARCH_ERROR,
};

pub use remote::{
    NetworkConnectivity, RemoteData, RemoteDataSource, TcpConnectivity, RECIPES_PATH,
};

pub use local::{
    FilePreferences, LocalData, PreferenceEdit, PreferenceError, PreferenceStore,
};

pub use repository::{DataRepository, DataRepositorySource};
