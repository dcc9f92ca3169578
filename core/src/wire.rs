//! Wire rendering: the pure transformation from a query's step sequence to
//! the JSON payload a graph server parses.
//!
//! A rendered query is an ordered array; each element is a single-key object
//! whose key is the step tag. Nested sub-queries (`match`) are expanded by
//! the same algorithm, so an embedded query serializes exactly as it would
//! at top level.

use serde_json::{Map as JsonMap, Value as JsonValue, json};

use crate::ast::{Condition, HasFilter, Labels, Query, SearchSpec, SortOrder, Step, Value};
use crate::error::{GroveError, GroveResult};

/// Nesting bound for the recursive renderer. Builder-constructed queries own
/// their sub-queries as a strict tree and stay far below this.
pub const MAX_DEPTH: usize = 32;

/// Wire form of a payload value.
pub trait ToWire {
    fn to_wire(&self) -> JsonValue;
}

impl ToWire for Value {
    fn to_wire(&self) -> JsonValue {
        match self {
            Value::Int(n) => json!({ "n": n }),
            Value::Real(r) => json!({ "r": r }),
            Value::Text(s) => json!({ "s": s }),
            Value::List(items) => JsonValue::Array(items.iter().map(ToWire::to_wire).collect()),
            Value::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_wire()))
                    .collect(),
            ),
        }
    }
}

impl ToWire for Condition {
    fn to_wire(&self) -> JsonValue {
        let body = match self {
            Condition::Eq(v)
            | Condition::Neq(v)
            | Condition::Gt(v)
            | Condition::Gte(v)
            | Condition::Lt(v)
            | Condition::Lte(v) => v.to_wire(),
            Condition::Between { lower, upper }
            | Condition::Inside { lower, upper }
            | Condition::Outside { lower, upper } => json!({
                "lower": lower.to_wire(),
                "upper": upper.to_wire(),
            }),
            Condition::Within(values) | Condition::Without(values) => {
                JsonValue::Array(values.iter().map(ToWire::to_wire).collect())
            }
        };
        tagged(self.tag(), body)
    }
}

impl ToWire for SearchSpec {
    fn to_wire(&self) -> JsonValue {
        let mut out = JsonMap::new();
        if let Some(term) = &self.term {
            out.insert("term".to_string(), json!(term));
        }
        out.insert("search".to_string(), json!(self.search));
        JsonValue::Object(out)
    }
}

impl Query {
    /// Render to the serialized wire text. Pure and repeatable; an empty
    /// query renders to `[]` and is legally executable.
    pub fn render(&self) -> GroveResult<String> {
        Ok(serde_json::to_string(&self.to_wire()?)?)
    }

    /// The wire representation: an ordered array of single-key step objects.
    pub fn to_wire(&self) -> GroveResult<JsonValue> {
        Ok(JsonValue::Array(self.wire_steps(0)?))
    }

    pub(crate) fn wire_steps(&self, depth: usize) -> GroveResult<Vec<JsonValue>> {
        if depth > MAX_DEPTH {
            return Err(GroveError::NestingTooDeep { depth });
        }
        self.steps().iter().map(|step| step.wire(depth)).collect()
    }
}

impl Step {
    fn wire(&self, depth: usize) -> GroveResult<JsonValue> {
        let payload = match self {
            Step::In(labels)
            | Step::Out(labels)
            | Step::InEdge(labels)
            | Step::OutEdge(labels) => edge_filter(labels),
            Step::InVertex | Step::OutVertex | Step::Count | Step::Path | Step::Drop => {
                JsonValue::Bool(true)
            }
            Step::As(labels) | Step::Select(labels) | Step::Values(labels) => {
                json!({ "labels": labels.as_slice() })
            }
            Step::By(key) => json!({ "key": key }),
            Step::Label => json!({}),
            Step::Limit(n) => json!(n),
            Step::Order { key, order } => json!({
                "key": key,
                "ascending": matches!(order, SortOrder::Asc),
            }),
            Step::Range { lower, upper } => json!({ "lower": lower, "upper": upper }),
            Step::Dedup => json!([]),
            Step::Aggregate(label) => json!(label),
            Step::Group(keys) => json!({
                "bys": keys.iter().map(|k| json!({ "key": k })).collect::<Vec<_>>(),
            }),
            Step::GroupCount(None) => json!({}),
            Step::GroupCount(Some(key)) => json!({ "key": key }),
            Step::Is(condition) => condition.to_wire(),
            Step::Has { key, filter } => has_wire(key, filter.as_ref()),
            Step::HasNot(key) => json!(key),
            Step::Match(queries) => {
                let rendered = queries
                    .iter()
                    .map(|q| q.wire_steps(depth + 1).map(JsonValue::Array))
                    .collect::<GroveResult<Vec<_>>>()?;
                json!({ "queries": rendered })
            }
            Step::SearchVertex(spec) | Step::SearchEdge(spec) => spec.to_wire(),
            Step::AddVertex(s) | Step::AddEdge(s) | Step::To(s) => json!(s),
            Step::Property(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_wire()))
                    .collect(),
            ),
        };
        Ok(tagged(self.tag(), payload))
    }
}

/// Unfiltered traversals serialize as an empty array, labeled ones as a
/// labels object.
fn edge_filter(labels: &Labels) -> JsonValue {
    if labels.is_empty() {
        json!([])
    } else {
        json!({ "labels": labels.as_slice() })
    }
}

fn has_wire(key: &str, filter: Option<&HasFilter>) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("key".to_string(), json!(key));
    match filter {
        Some(HasFilter::Literal(value)) => {
            out.insert("value".to_string(), value.to_wire());
        }
        Some(HasFilter::Predicate(condition)) => {
            out.insert("condition".to_string(), condition.to_wire());
        }
        None => {}
    }
    JsonValue::Object(out)
}

/// Single-key object keyed by a step or condition tag.
fn tagged(tag: &str, payload: JsonValue) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(tag.to_string(), payload);
    JsonValue::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::between;
    use std::collections::BTreeMap;

    #[test]
    fn test_value_tagging() {
        assert_eq!(Value::from(5).to_wire(), json!({ "n": 5 }));
        assert_eq!(Value::from(5.0).to_wire(), json!({ "r": 5.0 }));
        assert_eq!(Value::from("x").to_wire(), json!({ "s": "x" }));
    }

    #[test]
    fn test_collection_tagging() {
        let list = Value::List(vec![Value::Int(1), Value::Text("a".to_string())]);
        assert_eq!(list.to_wire(), json!([{ "n": 1 }, { "s": "a" }]));

        let mut map = BTreeMap::new();
        map.insert("k".to_string(), Value::Int(1));
        assert_eq!(Value::Map(map).to_wire(), json!({ "k": { "n": 1 } }));
    }

    #[test]
    fn test_condition_wire() {
        assert_eq!(
            between(1, 10).to_wire(),
            json!({ "between": { "lower": { "n": 1 }, "upper": { "n": 10 } } })
        );
    }

    #[test]
    fn test_has_condition_wire() {
        let step = Query::new().has("age", between(1, 10));
        assert_eq!(
            step.to_wire().unwrap(),
            json!([{ "has": {
                "key": "age",
                "condition": { "between": { "lower": { "n": 1 }, "upper": { "n": 10 } } },
            } }])
        );
    }

    #[test]
    fn test_depth_guard() {
        let mut query = Query::new().count();
        for _ in 0..(MAX_DEPTH + 2) {
            query = Query::new().matching([query]);
        }
        assert!(matches!(
            query.render(),
            Err(GroveError::NestingTooDeep { .. })
        ));
    }
}
