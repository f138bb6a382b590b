//! Staged aggregation pipelines with grouping and cross-collection joins.
//!
//! A pipeline is an ordered list of [PipelineStage]s executed eagerly: each
//! stage consumes the full output of the previous one and produces a new
//! list. [Group](PipelineStage::Group) partitions by a [GroupKey] and emits
//! one document per group with [Accumulator] outputs;
//! [Lookup](PipelineStage::Lookup) performs a nested-loop equality join
//! against another collection held in the same store.

mod engine;
mod stage;

pub use engine::*;
pub use stage::*;
