use indexmap::IndexMap;
use std::cmp::Ordering;

use crate::aggregate::{Accumulator, AccumulatorExpr, GroupKey, GroupStage, Lookup, PipelineStage};
use crate::collection::{sort_documents, Collection, Document};
use crate::common::{Value, DOC_ID};
use crate::errors::MemodbResult;

/// A pipeline bound to a collection, executed on drain.
///
/// Obtained from [Collection::aggregate](crate::collection::Collection::aggregate).
/// Evaluation starts from the collection's full document sequence at drain
/// time and applies each stage in pipeline order; every stage consumes the
/// complete output of the previous one and produces a new list, so no stage
/// mutates the collection's own documents.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::aggregate::{Accumulator, AccumulatorExpr, GroupKey, GroupStage, PipelineStage};
///
/// let totals = orders
///     .aggregate(vec![
///         PipelineStage::Match(field("status").eq("paid")),
///         PipelineStage::Group(
///             GroupStage::new(GroupKey::field("customer"))
///                 .accumulate("count", Accumulator::Sum(AccumulatorExpr::literal(1))),
///         ),
///     ])
///     .to_vec()?;
/// ```
pub struct Aggregation {
    collection: Collection,
    pipeline: Vec<PipelineStage>,
}

impl Aggregation {
    pub(crate) fn new(collection: Collection, pipeline: Vec<PipelineStage>) -> Self {
        Aggregation {
            collection,
            pipeline,
        }
    }

    /// Executes the pipeline and returns the final list.
    pub fn to_vec(self) -> MemodbResult<Vec<Document>> {
        let mut documents = self.collection.snapshot();
        for stage in &self.pipeline {
            documents = self.apply_stage(documents, stage)?;
        }
        Ok(documents)
    }

    fn apply_stage(
        &self,
        documents: Vec<Document>,
        stage: &PipelineStage,
    ) -> MemodbResult<Vec<Document>> {
        match stage {
            PipelineStage::Match(filter) => Ok(documents
                .into_iter()
                .filter(|doc| filter.matches(doc))
                .collect()),
            PipelineStage::Limit(limit) => Ok(documents.into_iter().take(*limit).collect()),
            PipelineStage::Skip(skip) => Ok(documents.into_iter().skip(*skip).collect()),
            PipelineStage::Sort(fields) => {
                let mut documents = documents;
                sort_documents(&mut documents, fields);
                Ok(documents)
            }
            PipelineStage::Group(group) => apply_group(documents, group),
            PipelineStage::Lookup(lookup) => self.apply_lookup(documents, lookup),
        }
    }

    fn apply_lookup(
        &self,
        documents: Vec<Document>,
        lookup: &Lookup,
    ) -> MemodbResult<Vec<Document>> {
        // an unknown foreign collection joins as an empty set, never an error
        let foreign_documents = match self.collection.sibling(&lookup.from) {
            Some(foreign) => foreign.snapshot(),
            None => {
                log::debug!(
                    "Lookup against unknown collection {}; joining empty set",
                    lookup.from
                );
                Vec::new()
            }
        };

        let mut results = Vec::with_capacity(documents.len());
        for document in documents {
            let local_value = document.get(&lookup.local_field);
            let matches: Vec<Value> = foreign_documents
                .iter()
                .filter(|foreign| foreign.get(&lookup.foreign_field) == local_value)
                .map(|foreign| Value::Document(foreign.clone()))
                .collect();

            let mut augmented = document;
            augmented.put(&lookup.target_field, Value::Array(matches))?;
            results.push(augmented);
        }
        Ok(results)
    }
}

fn apply_group(documents: Vec<Document>, group: &GroupStage) -> MemodbResult<Vec<Document>> {
    // buckets are keyed by the serialized rendering of the resolved key and
    // retain first-encounter order
    let mut buckets: IndexMap<String, (Value, Vec<Document>)> = IndexMap::new();

    for document in documents {
        let resolved = match &group.key {
            GroupKey::Literal(value) => Some(value.clone()),
            GroupKey::Field(field_name) => document.get(field_name),
        };
        let (rendering, identity) = match resolved {
            Some(value) => (value.to_string(), value),
            // documents without the key field share one group
            None => ("undefined".to_string(), Value::Null),
        };
        buckets
            .entry(rendering)
            .or_insert_with(|| (identity, Vec::new()))
            .1
            .push(document);
    }

    let mut results = Vec::with_capacity(buckets.len());
    for (_, (identity, members)) in buckets {
        let mut synthesized = Document::new();
        synthesized.put(DOC_ID, identity)?;
        for (alias, accumulator) in &group.accumulators {
            if let Some(output) = evaluate_accumulator(accumulator, &members) {
                synthesized.put(alias, output)?;
            }
        }
        results.push(synthesized);
    }
    Ok(results)
}

fn resolve(expr: &AccumulatorExpr, document: &Document) -> Option<Value> {
    match expr {
        AccumulatorExpr::Literal(value) => Some(value.clone()),
        AccumulatorExpr::Field(field_name) => document.get(field_name),
    }
}

fn evaluate_accumulator(accumulator: &Accumulator, members: &[Document]) -> Option<Value> {
    match accumulator {
        Accumulator::Sum(expr) => {
            let total = members.iter().fold(Value::I64(0), |acc, document| {
                let contribution = match resolve(expr, document) {
                    Some(value) if value.is_number() => value,
                    _ => Value::I64(0),
                };
                acc.add(&contribution)
            });
            Some(total)
        }
        Accumulator::Avg(expr) => {
            let mut count = 0usize;
            let mut total = 0.0f64;
            for document in members {
                if let Some(value) = resolve(expr, document) {
                    count += 1;
                    total += value.as_number().unwrap_or(0.0);
                }
            }
            if count == 0 {
                Some(Value::F64(0.0))
            } else {
                Some(Value::F64(total / count as f64))
            }
        }
        Accumulator::Min(expr) => extremal(expr, members, Ordering::Less),
        Accumulator::Max(expr) => extremal(expr, members, Ordering::Greater),
    }
}

fn extremal(expr: &AccumulatorExpr, members: &[Document], keep: Ordering) -> Option<Value> {
    let mut extreme: Option<Value> = None;
    for document in members {
        let value = match resolve(expr, document) {
            Some(value) if value.is_number() => value,
            _ => continue,
        };
        extreme = match extreme {
            None => Some(value),
            Some(current) => {
                if value.compare(&current) == Some(keep) {
                    Some(value)
                } else {
                    Some(current)
                }
            }
        };
    }
    extreme
}
