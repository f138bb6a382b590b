use crate::common::SortOrder;

/// An ordered list of sort keys for find and aggregation operations.
///
/// Keys are added with [SortableFields::by] and retain their configuration
/// order. Only the first configured key participates in comparisons at drain
/// time; later keys are accepted but have no effect on the resulting order.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::common::{SortableFields, SortOrder};
///
/// let fields = SortableFields::new()
///     .by("age", SortOrder::Ascending)
///     .by("name", SortOrder::Descending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortableFields {
    fields: Vec<(String, SortOrder)>,
}

impl SortableFields {
    /// Creates an empty sort specification.
    pub fn new() -> Self {
        SortableFields { fields: Vec::new() }
    }

    /// Appends a sort key with the given order, returning the specification
    /// for chaining.
    pub fn by(mut self, field_name: &str, sort_order: SortOrder) -> Self {
        self.fields.push((field_name.to_string(), sort_order));
        self
    }

    /// Returns the first configured sort key, which is the only one applied.
    pub fn first(&self) -> Option<&(String, SortOrder)> {
        self.fields.first()
    }

    /// Returns all configured sort keys in configuration order.
    pub fn sorting_order(&self) -> &[(String, SortOrder)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Creates a single-key [SortableFields], the common case.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> SortableFields {
    SortableFields::new().by(field_name, sort_order)
}
