//! Existence cache for configuration probes.
//!
//! Entries are permanent: the filesystem is assumed stable for the lifetime
//! of a session, so there is no stamp check and no invalidation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Memoized `path -> exists` answers.
#[derive(Debug, Default)]
pub struct ExistenceCache {
    entries: RwLock<HashMap<PathBuf, bool>>,
}

impl ExistenceCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` exists, running `probe` only on the first query.
    ///
    /// The probe runs without the lock held. If two callers race on the same
    /// path, the first recorded answer wins and both return it.
    pub fn exists<F>(&self, path: &Path, probe: F) -> bool
    where
        F: FnOnce(&Path) -> bool,
    {
        if let Some(found) = self.cached(path) {
            return found;
        }

        let found = probe(path);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *entries.entry(path.to_path_buf()).or_insert(found)
    }

    /// Previously recorded answer for `path`, if any.
    #[must_use]
    pub fn cached(&self, path: &Path) -> Option<bool> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(path).copied()
    }

    /// Number of recorded paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_probe_runs_once_per_path() {
        let cache = ExistenceCache::new();
        let calls = Cell::new(0);
        let probe = |_: &Path| {
            calls.set(calls.get() + 1);
            true
        };

        let path = Path::new("/repo/tsconfig.json");
        assert!(cache.exists(path, probe));
        assert!(cache.exists(path, probe));
        assert!(cache.exists(path, probe));

        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_negative_answers_are_cached() {
        let cache = ExistenceCache::new();
        let path = Path::new("/repo/src/tsconfig.json");

        assert!(!cache.exists(path, |_| false));
        // A later probe that would say otherwise is never consulted.
        assert!(!cache.exists(path, |_| panic!("probe must not run for a cached path")));
        assert_eq!(cache.cached(path), Some(false));
    }

    #[test]
    fn test_distinct_paths_probe_independently() {
        let cache = ExistenceCache::new();
        assert!(cache.is_empty());

        assert!(cache.exists(Path::new("/a/tsconfig.json"), |_| true));
        assert!(!cache.exists(Path::new("/b/tsconfig.json"), |_| false));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.cached(Path::new("/c/tsconfig.json")), None);
    }
}
