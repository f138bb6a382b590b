use im::OrdMap;
use smallvec::SmallVec;

use crate::common::{Value, DOC_ID, FIELD_SEPARATOR};
use crate::errors::{ErrorKind, MemodbError, MemodbResult};
use std::fmt::Display;

type FieldVec<'a> = SmallVec<[&'a str; 8]>;

/// Represents a document: a mapping from field names to [Value]s.
///
/// Documents are composed of key-value pairs where the key is always a
/// [String] and the value is a [Value]. Nested documents are supported; the
/// key of an embedded field is a path separated by `.`, so for a document
/// `{"a": {"b": 1}}` the inner value can be read with `document.get("a.b")`.
///
/// The `_id` field carries the identity assigned by the store at insertion
/// time when the document does not already have one. The store never enforces
/// identity uniqueness, and a caller-supplied `_id` is kept as-is.
///
/// ## Cheap copies
///
/// The backing structure is `im::OrdMap`, a persistent ordered map: cloning a
/// document is O(1) via internal structural sharing, which keeps the
/// copy-per-stage evaluation model of cursors and aggregation pipelines cheap.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    /// Checks if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of top-level fields in the document.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates the specified [Value] with the specified key in this document.
    ///
    /// If the key already exists its value is replaced. Embedded keys
    /// (e.g. `"location.address.zip"`) create the intermediate documents as
    /// needed; a non-document intermediate value is replaced by a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the key (or any segment of an embedded key) is empty.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut doc = Document::new();
    /// doc.put("name", "Alice")?;
    /// doc.put("address.city", "New York")?;
    /// assert_eq!(doc.get("address.city"), Some(Value::from("New York")));
    /// ```
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> MemodbResult<()> {
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(MemodbError::new(
                "Document does not support empty key",
                ErrorKind::InvalidOperation,
            ));
        }

        let value = value.into();

        if key.contains(FIELD_SEPARATOR) {
            let splits: FieldVec = key.split(FIELD_SEPARATOR).collect();
            if splits.iter().any(|segment| segment.is_empty()) {
                log::error!("Document does not support empty key segment in {}", key);
                return Err(MemodbError::new(
                    "Document does not support empty key segment",
                    ErrorKind::InvalidOperation,
                ));
            }
            self.deep_put(&splits, value);
        } else {
            self.data = self.data.update(key.to_string(), value);
        }
        Ok(())
    }

    /// Returns the [Value] associated with the key, or `None` if this document
    /// contains no mapping for it.
    ///
    /// An absent field is distinct from a field stored as [Value::Null]:
    /// filters and accumulators treat absence as a silent non-match rather
    /// than a comparable value. Embedded keys traverse nested documents, and
    /// numeric segments index into arrays (`"items.0"`).
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.data.get(key) {
            Some(value) => Some(value.clone()),
            // only walk the path when the literal key is absent
            None if key.contains(FIELD_SEPARATOR) => self.deep_get(key),
            None => None,
        }
    }

    /// Removes a top-level field from the document, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.data.get(key).cloned();
        if removed.is_some() {
            self.data = self.data.without(key);
        }
        removed
    }

    /// Checks whether this document has an identity assigned.
    pub fn has_id(&self) -> bool {
        self.data.contains_key(DOC_ID)
    }

    /// Returns the identity of this document, if one has been assigned.
    ///
    /// Identity assignment happens in the collection at insertion time; this
    /// accessor never generates one.
    pub fn id(&self) -> Option<Value> {
        self.data.get(DOC_ID).cloned()
    }

    /// Returns an iterator over the document's top-level fields.
    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    /// Returns an iterator over the document's top-level entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    fn deep_put(&mut self, splits: &[&str], value: Value) {
        let (first, rest) = match splits.split_first() {
            Some(parts) => parts,
            None => return,
        };

        if rest.is_empty() {
            self.data = self.data.update(first.to_string(), value);
            return;
        }

        let mut child = match self.data.get(*first) {
            Some(Value::Document(doc)) => doc.clone(),
            _ => Document::new(),
        };
        child.deep_put(rest, value);
        self.data = self.data.update(first.to_string(), Value::Document(child));
    }

    fn deep_get(&self, key: &str) -> Option<Value> {
        let splits: FieldVec = key.split(FIELD_SEPARATOR).collect();
        let mut current = self.data.get(splits[0])?.clone();
        for segment in &splits[1..] {
            current = match current {
                Value::Document(doc) => doc.get(segment)?,
                Value::Array(values) => {
                    let index: usize = segment.parse().ok()?;
                    values.get(index)?.clone()
                }
                _ => return None,
            };
        }
        Some(current)
    }
}

impl Display for Document {
    /// Renders the document in its canonical serialized form (JSON style).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{:?}:{}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Strips the surrounding quotes that `stringify!` adds to string-literal
/// keys in the `doc!` macro.
pub fn normalize(key: &str) -> String {
    key.trim_matches('"').to_string()
}

/// Creates a [Document] from key-value pairs.
///
/// Keys can be bare identifiers or string literals; values can be literals,
/// expressions (in parentheses), nested documents, or arrays.
///
/// # Examples
///
/// ```ignore
/// let person = doc!{
///     name: "Alice",
///     age: 30,
///     address: {
///         city: "New York",
///         zip: 10001,
///     },
///     tags: ["admin", "user"],
/// };
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document
    () => {
        $crate::collection::Document::new()
    };

    // match a document with key value pairs
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(&$crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                    .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the `doc!` macro.
/// Handles nested documents, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, literal, arithmetic in parens, etc.)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
