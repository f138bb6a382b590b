use crate::collection::Document;
use crate::common::{Value, FIELD_REFERENCE};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A single predicate evaluated against one document field.
///
/// Conditions form a closed set: the recognized comparison operators plus
/// [Condition::Nothing], the explicit never-matching rendition of an
/// unrecognized operator shape. Evaluation is silent by contract - an absent
/// field, an incomparable pair, or an unrecognized shape fails the predicate
/// without raising an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Matches when the field value strictly equals the given value.
    Equals(Value),
    /// Matches when the field value equals any member of the set.
    In(Vec<Value>),
    /// Matches when the field value is greater than or equal to the given value.
    Gte(Value),
    /// Matches when the field value is less than or equal to the given value.
    Lte(Value),
    /// Matches when the field value is strictly greater than the given value.
    Gt(Value),
    /// Matches when the field value is strictly less than the given value.
    Lt(Value),
    /// Never matches. Produced for operator shapes the engine does not
    /// recognize; kept as an explicit variant so malformed specifications
    /// stay silent non-matches instead of errors.
    Nothing,
}

impl Condition {
    /// Evaluates this condition against a resolved field value.
    ///
    /// `None` means the field is absent from the document, which fails every
    /// operator.
    fn matches(&self, field_value: Option<&Value>) -> bool {
        let value = match field_value {
            Some(value) => value,
            None => return false,
        };

        match self {
            Condition::Equals(expected) => value == expected,
            Condition::In(set) => set.iter().any(|member| member == value),
            Condition::Gte(bound) => {
                matches!(value.compare(bound), Some(Ordering::Greater | Ordering::Equal))
            }
            Condition::Lte(bound) => {
                matches!(value.compare(bound), Some(Ordering::Less | Ordering::Equal))
            }
            Condition::Gt(bound) => matches!(value.compare(bound), Some(Ordering::Greater)),
            Condition::Lt(bound) => matches!(value.compare(bound), Some(Ordering::Less)),
            Condition::Nothing => false,
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Equals(value) => write!(f, "== {}", value),
            Condition::In(set) => write!(f, "in {}", Value::Array(set.clone())),
            Condition::Gte(value) => write!(f, ">= {}", value),
            Condition::Lte(value) => write!(f, "<= {}", value),
            Condition::Gt(value) => write!(f, "> {}", value),
            Condition::Lt(value) => write!(f, "< {}", value),
            Condition::Nothing => write!(f, "nothing"),
        }
    }
}

/// A conjunctive predicate over document fields.
///
/// A filter holds zero or more (field, condition) pairs; a document matches
/// only when every pair succeeds. The empty filter matches every document and
/// is used for full-collection scans. Multiple conditions on the same field
/// are independently ANDed.
///
/// Filters are built fluently:
///
/// ```rust,ignore
/// use memodb::filter::{all, field};
///
/// let everything = all();
/// let adults = field("age").gte(18);
/// let narrow = field("age").gte(18).and(field("city").eq("London"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Condition)>,
}

impl Filter {
    /// Creates the empty filter, which matches every document.
    pub fn empty() -> Self {
        Filter {
            conditions: Vec::new(),
        }
    }

    pub(crate) fn with_condition(field_name: String, condition: Condition) -> Self {
        Filter {
            conditions: vec![(field_name, condition)],
        }
    }

    /// Conjoins another filter onto this one.
    pub fn and(mut self, other: Filter) -> Filter {
        self.conditions.extend(other.conditions);
        self
    }

    /// Checks whether this filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluates the filter against a document.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|(field_name, condition)| {
            let value = document.get(field_name);
            condition.matches(value.as_ref())
        })
    }

    /// Builds a filter from a document-shaped specification, the form the
    /// benchmark harness supplies from externally loaded datasets.
    ///
    /// Every top-level (field, value) pair contributes conjunctively. A value
    /// that is a document containing operator keys (`$in`, `$gte`, `$lte`,
    /// `$gt`, `$lt`) contributes each recognized operator; any other
    /// `$`-prefixed key contributes [Condition::Nothing]. A value without
    /// operator keys - document or not - contributes a strict equality test.
    pub fn from_spec(spec: &Document) -> Filter {
        let mut conditions = Vec::new();
        for (field_name, value) in spec.iter() {
            match value {
                Value::Document(operators) if has_operator_keys(operators) => {
                    for (key, operand) in operators.iter() {
                        if !key.starts_with(FIELD_REFERENCE) {
                            continue;
                        }
                        conditions.push((field_name.clone(), parse_operator(key, operand)));
                    }
                }
                other => conditions.push((field_name.clone(), Condition::Equals(other.clone()))),
            }
        }
        Filter { conditions }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.conditions.is_empty() {
            return write!(f, "(all)");
        }
        for (i, (field_name, condition)) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " && ")?;
            }
            write!(f, "{} {}", field_name, condition)?;
        }
        Ok(())
    }
}

fn has_operator_keys(operators: &Document) -> bool {
    operators.fields().any(|key| key.starts_with(FIELD_REFERENCE))
}

fn parse_operator(key: &str, operand: &Value) -> Condition {
    match key {
        "$in" => match operand {
            Value::Array(set) => Condition::In(set.clone()),
            _ => {
                log::debug!("$in operand is not an array; condition matches nothing");
                Condition::Nothing
            }
        },
        "$gte" => Condition::Gte(operand.clone()),
        "$lte" => Condition::Lte(operand.clone()),
        "$gt" => Condition::Gt(operand.clone()),
        "$lt" => Condition::Lt(operand.clone()),
        _ => {
            log::debug!("Unrecognized filter operator {}; condition matches nothing", key);
            Condition::Nothing
        }
    }
}
