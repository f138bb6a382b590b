use crate::common::Value;

use super::{Condition, Filter};

/// Creates the filter that matches every document.
///
/// Used for full-collection scans, e.g. `collection.find(all())`.
pub fn all() -> Filter {
    Filter::empty()
}

/// Creates a fluent filter builder for the specified field name.
///
/// The returned builder provides methods for equality, comparison, and
/// membership conditions on the field.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::filter::field;
///
/// let adults = field("age").gte(18);
/// let cities = field("city").in_array(vec!["London", "Paris"]);
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// A fluent builder for constructing filters on a specific field.
///
/// Each method consumes the builder and returns a [Filter] that can be used
/// directly with collection operations or conjoined with [Filter::and].
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Creates a filter that matches documents where the field equals the
    /// specified value.
    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> Filter {
        Filter::with_condition(self.field_name, Condition::Equals(value.into()))
    }

    /// Creates a filter that matches documents where the field equals any of
    /// the specified values.
    #[inline]
    pub fn in_array<T: Into<Value>>(self, values: Vec<T>) -> Filter {
        let values = values.into_iter().map(Into::into).collect();
        Filter::with_condition(self.field_name, Condition::In(values))
    }

    /// Creates a filter that matches documents where the field is greater
    /// than the specified value.
    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> Filter {
        Filter::with_condition(self.field_name, Condition::Gt(value.into()))
    }

    /// Creates a filter that matches documents where the field is greater
    /// than or equal to the specified value.
    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> Filter {
        Filter::with_condition(self.field_name, Condition::Gte(value.into()))
    }

    /// Creates a filter that matches documents where the field is less than
    /// the specified value.
    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> Filter {
        Filter::with_condition(self.field_name, Condition::Lt(value.into()))
    }

    /// Creates a filter that matches documents where the field is less than
    /// or equal to the specified value.
    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> Filter {
        Filter::with_condition(self.field_name, Condition::Lte(value.into()))
    }
}
