use dashmap::DashMap;
use std::sync::Arc;

use crate::collection::Collection;

/// The top-level registry mapping collection names to collections.
///
/// A `Store` owns its collections exclusively and creates them lazily: the
/// first reference to an unseen name creates the backing collection, and
/// every subsequent reference returns a handle to the same backing state.
/// The accessor never errors.
///
/// `Store` is a cheap clonable handle; clones share the same registry.
/// Collections resolve lookup joins through a weak reference to this
/// registry, so a collection outliving its store simply joins empty sets.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::store::Store;
/// use memodb::doc;
///
/// let store = Store::new();
/// let users = store.collection("users");
/// users.insert_one(doc! { name: "Alice" })?;
///
/// // same backing state on every reference
/// assert_eq!(store.collection("users").size(), 1);
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

pub(crate) struct StoreInner {
    collections: DashMap<String, Collection>,
}

impl StoreInner {
    pub(crate) fn get(&self, name: &str) -> Option<Collection> {
        self.collections.get(name).map(|entry| entry.value().clone())
    }
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            inner: Arc::new(StoreInner {
                collections: DashMap::new(),
            }),
        }
    }

    /// Returns the collection with the given name, creating it on first
    /// reference.
    pub fn collection(&self, name: &str) -> Collection {
        let registry = Arc::downgrade(&self.inner);
        self.inner
            .collections
            .entry(name.to_string())
            .or_insert_with(|| {
                log::debug!("Creating collection {}", name);
                Collection::new(name, registry)
            })
            .value()
            .clone()
    }

    /// Checks whether a collection with the given name has been referenced.
    pub fn has_collection(&self, name: &str) -> bool {
        self.inner.collections.contains_key(name)
    }

    /// Returns the names of all collections in the store.
    pub fn list_collection_names(&self) -> Vec<String> {
        self.inner
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Drops every collection. Used by orchestrating callers between runs.
    pub fn clear(&self) {
        self.inner.collections.clear();
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}
