/// The reserved identity field of a document. Assigned at insertion when
/// absent; never reassigned afterward.
pub const DOC_ID: &str = "_id";

/// Separator for embedded field paths, e.g. `"address.city"`.
pub const FIELD_SEPARATOR: &str = ".";

/// Marker prefix for field references in dynamically built filter and
/// aggregation specifications, e.g. `"$qty"`.
pub const FIELD_REFERENCE: &str = "$";
