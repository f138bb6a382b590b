use crate::collection::Document;
use crate::common::Value;
use crate::errors::MemodbResult;

/// An update specification: `set` replacements and `inc` numeric deltas.
///
/// The two operator groups are explicit, closed sets - there is no dynamic
/// operator lookup. `set` pairs merge field values into the target document
/// in place; `inc` deltas add to the current numeric value of a field,
/// treating a missing (or non-numeric) current value as zero.
///
/// Note that [update_many](crate::collection::Collection::update_many)
/// applies only the `set` group; `inc` deltas are honored exclusively by
/// [update_one](crate::collection::Collection::update_one).
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::collection::{set, inc};
///
/// collection.update_one(field("name").eq("Alice"), &set("city", "Berlin"))?;
/// collection.update_one(field("name").eq("Alice"), &inc("visits", 1))?;
/// collection.update_many(all(), &set("checked", true).set("state", "done"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct UpdateDocument {
    set: Vec<(String, Value)>,
    inc: Vec<(String, Value)>,
}

/// Creates an [UpdateDocument] with a single `set` pair.
pub fn set<T: Into<Value>>(field_name: &str, value: T) -> UpdateDocument {
    UpdateDocument::new().set(field_name, value)
}

/// Creates an [UpdateDocument] with a single `inc` delta.
pub fn inc<T: Into<Value>>(field_name: &str, delta: T) -> UpdateDocument {
    UpdateDocument::new().inc(field_name, delta)
}

impl UpdateDocument {
    /// Creates an empty update specification.
    pub fn new() -> Self {
        UpdateDocument::default()
    }

    /// Adds a `set` pair, returning the specification for chaining.
    pub fn set<T: Into<Value>>(mut self, field_name: &str, value: T) -> Self {
        self.set.push((field_name.to_string(), value.into()));
        self
    }

    /// Adds an `inc` delta, returning the specification for chaining.
    pub fn inc<T: Into<Value>>(mut self, field_name: &str, delta: T) -> Self {
        self.inc.push((field_name.to_string(), delta.into()));
        self
    }

    /// Checks whether this specification contains no operators.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.inc.is_empty()
    }

    /// Merges the `set` pairs into the document in place.
    pub(crate) fn apply_set(&self, document: &mut Document) -> MemodbResult<()> {
        for (field_name, value) in &self.set {
            document.put(field_name, value.clone())?;
        }
        Ok(())
    }

    /// Adds the `inc` deltas to the document in place. A missing or
    /// non-numeric current value counts as zero.
    pub(crate) fn apply_inc(&self, document: &mut Document) -> MemodbResult<()> {
        for (field_name, delta) in &self.inc {
            let current = document.get(field_name).unwrap_or(Value::I64(0));
            let current = if current.is_number() {
                current
            } else {
                Value::I64(0)
            };
            document.put(field_name, current.add(delta))?;
        }
        Ok(())
    }
}
