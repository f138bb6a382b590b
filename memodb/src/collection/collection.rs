use itertools::Itertools;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use uuid::Uuid;

use crate::aggregate::{Aggregation, PipelineStage};
use crate::collection::{Document, DocumentCursor, UpdateDocument};
use crate::common::{SortableFields, Value, DOC_ID};
use crate::errors::MemodbResult;
use crate::filter::Filter;
use crate::store::StoreInner;

/// A named, ordered collection of documents.
///
/// Collections are obtained from [Store::collection](crate::store::Store::collection)
/// and provide the full CRUD surface, `find` with deferred cursor
/// composition, and `aggregate` for pipeline evaluation. The backing
/// sequence preserves insertion order; that order is the natural order of
/// every read unless a sort is explicitly requested.
///
/// Identity (`_id`) is assigned at insertion when absent - a randomly
/// generated string - and never reassigned. Uniqueness is not enforced:
/// documents with equal identities may coexist, and identity lookups return
/// the first match in sequence order.
///
/// `Collection` is a cheap clonable handle; clones share the same backing
/// state. The backing sequence is guarded by a single reader-writer lock,
/// giving each collection single-writer semantics.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::store::Store;
/// use memodb::filter::{all, field};
/// use memodb::doc;
///
/// let store = Store::new();
/// let users = store.collection("users");
///
/// users.insert_one(doc! { name: "Alice", age: 30 })?;
/// let found = users.find_one(field("name").eq("Alice"))?;
/// ```
#[derive(Clone)]
pub struct Collection {
    inner: Arc<CollectionInner>,
}

impl Collection {
    pub(crate) fn new(name: &str, registry: Weak<StoreInner>) -> Self {
        Collection {
            inner: Arc::new(CollectionInner {
                name: name.to_string(),
                documents: RwLock::new(Vec::new()),
                indexes: RwLock::new(Vec::new()),
                registry,
            }),
        }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the first document matching the filter, in natural order.
    pub fn find_one(&self, filter: Filter) -> MemodbResult<Option<Document>> {
        self.inner.find_one(filter)
    }

    /// Finds documents matching the filter.
    ///
    /// Filtering happens eagerly at call time; the returned cursor defers
    /// sort, skip, and limit until it is drained.
    pub fn find(&self, filter: Filter) -> MemodbResult<DocumentCursor> {
        self.inner.find(filter)
    }

    /// Inserts a single document, assigning an identity if it has none.
    ///
    /// Returns the identity under which the document was stored. Duplicate
    /// identities are accepted without rejection.
    pub fn insert_one(&self, document: Document) -> MemodbResult<Value> {
        self.inner.insert_one(document)
    }

    /// Inserts every document in input order, returning the count inserted.
    pub fn insert_many(&self, documents: Vec<Document>) -> MemodbResult<usize> {
        self.inner.insert_many(documents)
    }

    /// Updates the first document matching the filter.
    ///
    /// Applies the update's `set` pairs, then its `inc` deltas, mutating the
    /// document in place. Returns the number of documents modified (0 or 1).
    pub fn update_one(&self, filter: Filter, update: &UpdateDocument) -> MemodbResult<usize> {
        self.inner.update_one(filter, update)
    }

    /// Updates every document matching the filter with the update's `set`
    /// pairs, returning the number modified.
    ///
    /// `inc` deltas are not applied in the multi-document path; only
    /// [update_one](Collection::update_one) honors them.
    pub fn update_many(&self, filter: Filter, update: &UpdateDocument) -> MemodbResult<usize> {
        self.inner.update_many(filter, update)
    }

    /// Removes the first document matching the filter, returning the number
    /// removed (0 or 1).
    pub fn delete_one(&self, filter: Filter) -> MemodbResult<usize> {
        self.inner.delete_one(filter)
    }

    /// Removes every document matching the filter, returning the number
    /// removed. An empty filter clears the entire collection.
    pub fn delete_many(&self, filter: Filter) -> MemodbResult<usize> {
        self.inner.delete_many(filter)
    }

    /// Returns the number of documents matching the filter.
    pub fn count_documents(&self, filter: Filter) -> MemodbResult<usize> {
        self.inner.count_documents(filter)
    }

    /// Returns the total number of documents in the collection.
    pub fn size(&self) -> usize {
        self.inner.documents.read().len()
    }

    /// Checks whether the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.inner.documents.read().is_empty()
    }

    /// Removes every document from the collection.
    pub fn clear(&self) {
        self.inner.documents.write().clear();
    }

    /// Registers an index over the given key fields and returns its
    /// synthesized name (`"a_1_b_-1"` form).
    ///
    /// Registration only: no index structure is built and query behavior is
    /// unaffected. Callers must not assume any performance effect.
    pub fn create_index(&self, fields: &SortableFields) -> MemodbResult<String> {
        self.inner.create_index(fields)
    }

    /// Returns the names of all registered indexes.
    pub fn list_indexes(&self) -> Vec<String> {
        self.inner.indexes.read().clone()
    }

    /// Unregisters an index by name, returning whether it was registered.
    pub fn drop_index(&self, name: &str) -> bool {
        let mut indexes = self.inner.indexes.write();
        match indexes.iter().position(|registered| registered == name) {
            Some(position) => {
                indexes.remove(position);
                true
            }
            None => false,
        }
    }

    /// Unregisters all indexes.
    pub fn drop_all_indexes(&self) {
        self.inner.indexes.write().clear();
    }

    /// Starts an aggregation over this collection's current documents.
    ///
    /// The pipeline executes when the returned handle is drained with
    /// [Aggregation::to_vec].
    pub fn aggregate(&self, pipeline: Vec<PipelineStage>) -> Aggregation {
        Aggregation::new(self.clone(), pipeline)
    }

    /// Snapshot of the full document sequence in natural order.
    pub(crate) fn snapshot(&self) -> Vec<Document> {
        self.inner.documents.read().clone()
    }

    /// Resolves a sibling collection through the owning store's registry.
    ///
    /// Returns `None` when the registry is gone or the collection has never
    /// been referenced; lookup joins treat both as an empty foreign set.
    pub(crate) fn sibling(&self, name: &str) -> Option<Collection> {
        self.inner
            .registry
            .upgrade()
            .and_then(|registry| registry.get(name))
    }
}

struct CollectionInner {
    name: String,
    documents: RwLock<Vec<Document>>,
    indexes: RwLock<Vec<String>>,
    registry: Weak<StoreInner>,
}

impl CollectionInner {
    fn find_one(&self, filter: Filter) -> MemodbResult<Option<Document>> {
        let documents = self.documents.read();
        Ok(documents.iter().find(|doc| filter.matches(doc)).cloned())
    }

    fn find(&self, filter: Filter) -> MemodbResult<DocumentCursor> {
        let documents = self.documents.read();
        let working_set: Vec<Document> = documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect();
        Ok(DocumentCursor::new(working_set))
    }

    fn insert_one(&self, mut document: Document) -> MemodbResult<Value> {
        if !document.has_id() {
            document.put(DOC_ID, Uuid::new_v4().to_string())?;
        }
        let identity = document.id().unwrap_or(Value::Null);

        let mut documents = self.documents.write();
        documents.push(document);
        log::debug!("Inserted document {} into {}", identity, self.name);
        Ok(identity)
    }

    fn insert_many(&self, documents: Vec<Document>) -> MemodbResult<usize> {
        let count = documents.len();
        for document in documents {
            self.insert_one(document)?;
        }
        Ok(count)
    }

    fn update_one(&self, filter: Filter, update: &UpdateDocument) -> MemodbResult<usize> {
        let mut documents = self.documents.write();
        for document in documents.iter_mut() {
            if filter.matches(document) {
                update.apply_set(document)?;
                update.apply_inc(document)?;
                return Ok(1);
            }
        }
        Ok(0)
    }

    fn update_many(&self, filter: Filter, update: &UpdateDocument) -> MemodbResult<usize> {
        // only set pairs apply here; inc deltas are an update_one-only operator
        let mut modified = 0;
        let mut documents = self.documents.write();
        for document in documents.iter_mut() {
            if filter.matches(document) {
                update.apply_set(document)?;
                modified += 1;
            }
        }
        Ok(modified)
    }

    fn delete_one(&self, filter: Filter) -> MemodbResult<usize> {
        let mut documents = self.documents.write();
        match documents.iter().position(|doc| filter.matches(doc)) {
            Some(position) => {
                documents.remove(position);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_many(&self, filter: Filter) -> MemodbResult<usize> {
        let mut documents = self.documents.write();
        if filter.is_empty() {
            let deleted = documents.len();
            documents.clear();
            return Ok(deleted);
        }

        let before = documents.len();
        documents.retain(|doc| !filter.matches(doc));
        Ok(before - documents.len())
    }

    fn count_documents(&self, filter: Filter) -> MemodbResult<usize> {
        let documents = self.documents.read();
        Ok(documents.iter().filter(|doc| filter.matches(doc)).count())
    }

    fn create_index(&self, fields: &SortableFields) -> MemodbResult<String> {
        let name = fields
            .sorting_order()
            .iter()
            .map(|(field_name, order)| format!("{}_{}", field_name, order.direction()))
            .join("_");

        let mut indexes = self.indexes.write();
        if !indexes.contains(&name) {
            indexes.push(name.clone());
        }
        log::debug!("Registered index {} on {}", name, self.name);
        Ok(name)
    }
}
