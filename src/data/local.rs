//! Favourites set kept in a flat preference file
//!
//! The store mirrors a key-value preference file: every key holds a set of
//! strings, reads see the last committed state, and a commit either applies
//! all of its edits or none of them.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use super::resource::Resource;

pub(super) type PreferenceMap = BTreeMap<String, BTreeSet<String>>;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("IO error on preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed preference file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One edit inside a commit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreferenceEdit {
    /// Drop every key
    Clear,
    PutStringSet { key: String, values: HashSet<String> },
}

/// Key-value backend for string sets
pub trait PreferenceStore: Send + Sync {
    /// Stored set for `key`, empty when the key is absent
    fn get_string_set(&self, key: &str) -> HashSet<String>;

    /// Apply `edits` in order and persist. Returns whether the commit succeeded.
    fn commit(&self, edits: Vec<PreferenceEdit>) -> bool;
}

pub(super) fn apply_edits(map: &mut PreferenceMap, edits: Vec<PreferenceEdit>) {
    for edit in edits {
        match edit {
            PreferenceEdit::Clear => map.clear(),
            PreferenceEdit::PutStringSet { key, values } => {
                map.insert(key, values.into_iter().collect());
            }
        }
    }
}

pub(super) fn lock(state: &Mutex<PreferenceMap>) -> MutexGuard<'_, PreferenceMap> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Preference file stored as a JSON object of `key -> [values]`
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    state: Mutex<PreferenceMap>,
}

impl FilePreferences {
    /// Open the file at `path`. A missing file starts empty and is created
    /// on the first commit.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                PreferenceMap::new()
            } else {
                serde_json::from_str(&content).map_err(|source| PreferenceError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            PreferenceMap::new()
        };

        tracing::debug!(path = %path.display(), keys = state.len(), "Preferences loaded");
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_to_disk(&self, map: &PreferenceMap) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(map).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename so readers never see a torn file
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get_string_set(&self, key: &str) -> HashSet<String> {
        lock(&self.state)
            .get(key)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn commit(&self, edits: Vec<PreferenceEdit>) -> bool {
        let mut state = lock(&self.state);
        let mut next = state.clone();
        apply_edits(&mut next, edits);

        match self.write_to_disk(&next) {
            Ok(()) => {
                *state = next;
                true
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Preference commit failed");
                false
            }
        }
    }
}

/// Favourite recipe ids on top of a [`PreferenceStore`]
#[derive(Clone)]
pub struct LocalData {
    store: Arc<dyn PreferenceStore>,
    favourites_key: String,
}

impl LocalData {
    pub fn new(store: Arc<dyn PreferenceStore>, favourites_key: impl Into<String>) -> Self {
        Self {
            store,
            favourites_key: favourites_key.into(),
        }
    }

    pub fn get_cached_favourites(&self) -> Resource<HashSet<String>> {
        Resource::Success(self.store.get_string_set(&self.favourites_key))
    }

    pub fn is_favourite(&self, id: &str) -> Resource<bool> {
        Resource::Success(self.store.get_string_set(&self.favourites_key).contains(id))
    }

    /// Store `ids` as the whole favourites set
    pub fn cache_favourites(&self, ids: HashSet<String>) -> Resource<bool> {
        let committed = self.store.commit(vec![PreferenceEdit::PutStringSet {
            key: self.favourites_key.clone(),
            values: ids,
        }]);
        Resource::Success(committed)
    }

    /// Drop `id` and rewrite the file: one commit clears it, a second writes
    /// the remaining set. Reports the second commit, even when `id` was not
    /// a member.
    pub fn remove_from_favourites(&self, id: &str) -> Resource<bool> {
        let mut favourites = self.store.get_string_set(&self.favourites_key);
        if !favourites.remove(id) {
            tracing::debug!(id, "Recipe was not a favourite, rewriting set unchanged");
        }

        self.store.commit(vec![PreferenceEdit::Clear]);
        let committed = self.store.commit(vec![PreferenceEdit::PutStringSet {
            key: self.favourites_key.clone(),
            values: favourites,
        }]);
        Resource::Success(committed)
    }
}
