/// Specifies the direction for sorting documents.
///
/// # Purpose
/// Defines whether documents should be sorted in ascending (low to high) or descending
/// (high to low) order. Used in cursors and sort stages to control result ordering.
///
/// # Usage
/// Used with [SortableFields](crate::common::SortableFields) when querying collections:
/// ```text
/// let cursor = collection.find(all())?
///     .sort(SortableFields::new().by("age", SortOrder::Ascending));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z, oldest to newest)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A, newest to oldest)
    Descending,
}

impl SortOrder {
    /// Numeric direction marker used when synthesizing index names: `1` for
    /// ascending, `-1` for descending.
    pub(crate) fn direction(&self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}
