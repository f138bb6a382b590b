//! Query filters: conjunctive predicates over document fields.
//!
//! A [Filter] is a set of (field, [Condition]) pairs that a document must
//! satisfy in full. The condition set is closed - recognized comparison
//! operators plus the never-matching [Condition::Nothing] - so malformed or
//! unsupported shapes degrade to silent non-matches rather than errors.
//!
//! Filters are usually built with the fluent helpers:
//!
//! ```rust,ignore
//! use memodb::filter::{all, field};
//!
//! let everything = all();
//! let adults = field("age").gte(18);
//! let named = field("name").eq("Alice").and(field("age").lt(65));
//! ```

#[allow(clippy::module_inception)]
mod filter;
mod fluent;

pub use filter::*;
pub use fluent::*;
