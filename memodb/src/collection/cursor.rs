use crate::collection::Document;
use crate::common::{SortOrder, SortableFields};

/// Sorts documents by the first configured sort key only.
///
/// Later keys in the specification are accepted but have no effect.
/// Incomparable or absent values are treated as unordered.
pub(crate) fn sort_documents(documents: &mut [Document], fields: &SortableFields) {
    let (field_name, sort_order) = match fields.first() {
        Some(first) => first,
        None => return,
    };

    documents.sort_by(|a, b| {
        let ordering = match (a.get(field_name), b.get(field_name)) {
            (Some(left), Some(right)) => {
                left.compare(&right).unwrap_or(std::cmp::Ordering::Equal)
            }
            _ => std::cmp::Ordering::Equal,
        };
        match sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// A deferred view over an already-filtered working set.
///
/// [find](crate::collection::Collection::find) evaluates its filter eagerly
/// and hands the matching documents to the cursor; `sort`, `skip`, and
/// `limit` only record configuration. The view is materialized by a terminal
/// call ([to_vec](DocumentCursor::to_vec), [first](DocumentCursor::first),
/// [count](DocumentCursor::count), or iteration), at which point the
/// operations apply in a fixed order: sort, then skip, then limit.
///
/// Reconfiguring an operation replaces its previous setting (last write
/// wins). Sorting compares only the first key of the configured
/// [SortableFields]; later keys are silently ignored.
///
/// # Examples
///
/// ```rust,ignore
/// let page = collection
///     .find(all())?
///     .sort(SortableFields::new().by("age", SortOrder::Ascending))
///     .skip(10)
///     .limit(5)
///     .to_vec();
/// ```
#[derive(Debug, Clone)]
pub struct DocumentCursor {
    working_set: Vec<Document>,
    sort_by: Option<SortableFields>,
    skip: Option<usize>,
    limit: Option<usize>,
}

impl DocumentCursor {
    pub(crate) fn new(working_set: Vec<Document>) -> Self {
        DocumentCursor {
            working_set,
            sort_by: None,
            skip: None,
            limit: None,
        }
    }

    /// Configures the sort specification, replacing any previous one.
    pub fn sort(mut self, fields: SortableFields) -> Self {
        self.sort_by = Some(fields);
        self
    }

    /// Configures the number of leading documents to drop, replacing any
    /// previous setting.
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Configures the maximum number of documents to return, replacing any
    /// previous setting.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Materializes the view: sort, then skip, then limit.
    pub fn to_vec(self) -> Vec<Document> {
        let mut documents = self.working_set;

        if let Some(fields) = &self.sort_by {
            sort_documents(&mut documents, fields);
        }
        if let Some(skip) = self.skip {
            documents = documents.into_iter().skip(skip).collect();
        }
        if let Some(limit) = self.limit {
            documents.truncate(limit);
        }
        documents
    }

    /// Materializes the view and returns its first document.
    pub fn first(self) -> Option<Document> {
        self.to_vec().into_iter().next()
    }

    /// Materializes the view and returns the number of documents in it.
    pub fn count(self) -> usize {
        self.to_vec().len()
    }
}

impl IntoIterator for DocumentCursor {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}
