//! Collections, documents, and cursors.
//!
//! A [Collection] is an ordered, named sequence of [Document]s with CRUD
//! operations, eager filtering via [Collection::find], and pipeline
//! evaluation via [Collection::aggregate]. Insertion order is the natural
//! order of every read unless a sort is requested.
//!
//! # Documents
//!
//! A [Document] is a key-value map where keys are strings and values are
//! [Value](crate::common::Value)s. Embedded fields use `.`-separated paths:
//!
//! ```rust,ignore
//! use memodb::doc;
//!
//! let doc = doc! {
//!     name: "Alice",
//!     address: { city: "New York" },
//! };
//! assert!(doc.get("address.city").is_some());
//! ```
//!
//! # Document identities
//!
//! Each inserted document carries an identity in its `_id` field, assigned as
//! a random string at insertion when absent. Identities are never reassigned
//! and never checked for uniqueness.

#[allow(clippy::module_inception)]
mod collection;
mod cursor;
mod document;
mod update;

pub use collection::*;
pub use cursor::*;
pub(crate) use cursor::sort_documents;
pub use document::*;
pub use update::*;
