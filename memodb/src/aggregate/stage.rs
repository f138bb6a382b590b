use crate::common::{SortableFields, Value, FIELD_REFERENCE};
use crate::filter::Filter;

/// One stage of an aggregation pipeline.
///
/// Stages form a closed set and execute strictly in pipeline order; each
/// consumes the full output list of the previous stage and produces a new
/// full list. Adding a stage kind extends this enum and every evaluation
/// site is an exhaustive match, so a new kind is a compile-time-visible gap
/// rather than a silently ignored specification.
#[derive(Debug, Clone)]
pub enum PipelineStage {
    /// Retains documents matching the filter.
    Match(Filter),
    /// Truncates the list to the first `n` documents.
    Limit(usize),
    /// Drops the first `n` documents.
    Skip(usize),
    /// Sorts by the first configured key (later keys are ignored, as in
    /// cursor sorting).
    Sort(SortableFields),
    /// Partitions the list by a group key and emits one document per group
    /// with the configured accumulator outputs.
    Group(GroupStage),
    /// Nested-loop equality join against another collection in the same
    /// store.
    Lookup(Lookup),
}

/// The key a [Group](PipelineStage::Group) stage partitions by.
#[derive(Debug, Clone)]
pub enum GroupKey {
    /// A constant key: the whole input forms a single group. `Value::Null`
    /// is the conventional choice for whole-input aggregation.
    Literal(Value),
    /// A field reference: each document's value for the field becomes its
    /// group key. Documents where the field is absent share one group whose
    /// synthesized identity is `Value::Null`.
    Field(String),
}

impl GroupKey {
    /// Shorthand for a field-reference key.
    pub fn field(field_name: &str) -> Self {
        GroupKey::Field(field_name.to_string())
    }

    /// Shorthand for a literal key.
    pub fn literal<T: Into<Value>>(value: T) -> Self {
        GroupKey::Literal(value.into())
    }

    /// Interprets a dynamically supplied key specification: a string starting
    /// with the field-reference marker (`"$city"`) is a field reference,
    /// anything else is a literal.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) if text.starts_with(FIELD_REFERENCE) => {
                GroupKey::Field(text[FIELD_REFERENCE.len()..].to_string())
            }
            other => GroupKey::Literal(other),
        }
    }
}

/// The operand of an accumulator: a constant per document, or a document
/// field resolved per document.
#[derive(Debug, Clone)]
pub enum AccumulatorExpr {
    /// The same value for every document; `Sum` of literal `1` counts
    /// documents.
    Literal(Value),
    /// The document's value for the named field; absent fields contribute
    /// nothing (or zero, depending on the accumulator).
    Field(String),
}

impl AccumulatorExpr {
    /// Shorthand for a field operand.
    pub fn field(field_name: &str) -> Self {
        AccumulatorExpr::Field(field_name.to_string())
    }

    /// Shorthand for a literal operand.
    pub fn literal<T: Into<Value>>(value: T) -> Self {
        AccumulatorExpr::Literal(value.into())
    }

    /// Interprets a dynamically supplied operand, with `"$field"` strings as
    /// field references.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) if text.starts_with(FIELD_REFERENCE) => {
                AccumulatorExpr::Field(text[FIELD_REFERENCE.len()..].to_string())
            }
            other => AccumulatorExpr::Literal(other),
        }
    }
}

/// A per-group aggregate computation.
#[derive(Debug, Clone)]
pub enum Accumulator {
    /// Arithmetic total of the operand across the group; missing and
    /// non-numeric values contribute zero.
    Sum(AccumulatorExpr),
    /// Mean of the operand over the documents where it resolves; zero when
    /// it never does.
    Avg(AccumulatorExpr),
    /// Smallest numeric value of the operand across the group.
    Min(AccumulatorExpr),
    /// Largest numeric value of the operand across the group.
    Max(AccumulatorExpr),
}

/// A [Group](PipelineStage::Group) stage: key plus named accumulators.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::aggregate::{Accumulator, AccumulatorExpr, GroupKey, GroupStage};
///
/// let by_status = GroupStage::new(GroupKey::field("status"))
///     .accumulate("count", Accumulator::Sum(AccumulatorExpr::literal(1)))
///     .accumulate("total", Accumulator::Sum(AccumulatorExpr::field("qty")));
/// ```
#[derive(Debug, Clone)]
pub struct GroupStage {
    pub(crate) key: GroupKey,
    pub(crate) accumulators: Vec<(String, Accumulator)>,
}

impl GroupStage {
    /// Creates a group stage with no accumulators.
    pub fn new(key: GroupKey) -> Self {
        GroupStage {
            key,
            accumulators: Vec::new(),
        }
    }

    /// Adds a named accumulator output, returning the stage for chaining.
    pub fn accumulate(mut self, alias: &str, accumulator: Accumulator) -> Self {
        self.accumulators.push((alias.to_string(), accumulator));
        self
    }
}

/// A [Lookup](PipelineStage::Lookup) join specification.
///
/// For every document in the current list, the entire foreign collection
/// `from` is scanned and the documents whose `foreign_field` equals the
/// local document's `local_field` are attached as an array under
/// `target_field`.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub from: String,
    pub local_field: String,
    pub foreign_field: String,
    pub target_field: String,
}

impl Lookup {
    pub fn new(from: &str, local_field: &str, foreign_field: &str, target_field: &str) -> Self {
        Lookup {
            from: from.to_string(),
            local_field: local_field.to_string(),
            foreign_field: foreign_field.to_string(),
            target_field: target_field.to_string(),
        }
    }
}
