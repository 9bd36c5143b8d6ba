//! Preference store double shared by the data-layer tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::local::{apply_edits, lock, PreferenceMap};
use super::{PreferenceEdit, PreferenceStore};

/// In-memory store that counts commits and can be told to reject them
#[derive(Debug, Default)]
pub(crate) struct MemoryPreferences {
    state: Mutex<PreferenceMap>,
    commits: AtomicUsize,
    fail_commits: AtomicBool,
}

impl MemoryPreferences {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_string_set<I, S>(key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        lock(&store.state).insert(key.to_string(), values.into_iter().map(Into::into).collect());
        store
    }

    /// Number of commits attempted so far
    pub(crate) fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub(crate) fn set_fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string_set(&self, key: &str) -> HashSet<String> {
        lock(&self.state)
            .get(key)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn commit(&self, edits: Vec<PreferenceEdit>) -> bool {
        self.commits.fetch_add(1, Ordering::SeqCst);
        if self.fail_commits.load(Ordering::SeqCst) {
            return false;
        }
        apply_edits(&mut lock(&self.state), edits);
        true
    }
}
