//! # memodb - Embedded In-Memory Document Store
//!
//! memodb is a lightweight, embedded, in-memory NoSQL document store written
//! in Rust. It provides collection-oriented document storage with filtered
//! queries, deferred cursor composition, and staged aggregation pipelines
//! with grouping and cross-collection joins.
//!
//! ## Key Features
//!
//! - **Embedded**: no separate server process, no I/O - everything lives in
//!   process memory
//! - **Schemaless**: documents are dynamic field-to-value mappings with
//!   nested documents and arrays
//! - **Querying**: conjunctive filters with equality, membership, and range
//!   operators
//! - **Cursors**: deferred sort / skip / limit composition over filtered
//!   result sets
//! - **Aggregation**: match, sort, skip, limit, group (with sum / avg / min /
//!   max accumulators), and lookup joins across collections
//! - **Permissive by contract**: malformed filter shapes, absent fields, and
//!   unknown foreign collections degrade to silent non-matches, never errors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use memodb::store::Store;
//! use memodb::filter::{all, field};
//! use memodb::common::{SortOrder, SortableFields};
//! use memodb::doc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new();
//! let users = store.collection("users");
//!
//! users.insert_one(doc! { name: "Alice", age: 30 })?;
//! users.insert_one(doc! { name: "Bob", age: 25 })?;
//!
//! let adults = users
//!     .find(field("age").gte(18))?
//!     .sort(SortableFields::new().by("age", SortOrder::Ascending))
//!     .to_vec();
//!
//! assert_eq!(adults.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! Handles (`Store`, `Collection`) follow the PIMPL pattern: cheap clonable
//! wrappers around shared state, safe to pass between threads. Each
//! collection guards its backing sequence with a single reader-writer lock,
//! giving single-writer semantics per collection. Cursor and aggregation
//! evaluation copy per stage instead of mutating the backing sequence;
//! documents are persistent maps, so those copies are structural shares.
//!
//! ## Module Organization
//!
//! - [`aggregate`] - Aggregation pipelines, stages, and accumulators
//! - [`collection`] - Collections, documents, cursors, and update
//!   specifications
//! - [`common`] - Values, sort specifications, and shared constants
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Query filters and fluent filter builders
//! - [`store`] - The top-level collection registry

pub mod aggregate;
pub mod collection;
pub mod common;
pub mod errors;
pub mod filter;
pub mod store;

pub use common::{SortOrder, SortableFields, Value};
pub use store::Store;
