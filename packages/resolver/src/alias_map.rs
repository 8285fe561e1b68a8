//! Alias Map
//!
//! Ordered mapping from alias prefixes (`@core/`) to target directories.
//! Substitution runs in insertion order and later entries can rewrite text
//! produced by earlier ones, so the order is part of the map's meaning.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: IndexMap<String, PathBuf>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an alias. Re-inserting an existing key replaces its target but
    /// keeps its original position.
    pub fn insert(&mut self, alias: impl Into<String>, target: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(alias.into(), target.into())
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.entries.get(alias).map(PathBuf::as_path)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_path()))
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AliasMap
where
    K: Into<String>,
    V: Into<PathBuf>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AliasMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for AliasMap
where
    K: Into<String>,
    V: Into<PathBuf>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (alias, target) in iter {
            self.insert(alias, target);
        }
    }
}

impl From<IndexMap<String, PathBuf>> for AliasMap {
    fn from(entries: IndexMap<String, PathBuf>) -> Self {
        Self { entries }
    }
}
