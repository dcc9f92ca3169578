use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::{Condition, Value};

/// Normalized label sequence for label-bearing steps.
///
/// A single scalar label becomes a one-element sequence before storage, so
/// the wire format always carries a list. An empty sequence is the
/// unfiltered form of a traversal step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels(Vec<String>);

impl Labels {
    /// The empty sequence (unfiltered traversal).
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Labels {
    fn from(label: &str) -> Self {
        Self(vec![label.to_string()])
    }
}

impl From<String> for Labels {
    fn from(label: String) -> Self {
        Self(vec![label])
    }
}

impl From<Vec<String>> for Labels {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl From<Vec<&str>> for Labels {
    fn from(labels: Vec<&str>) -> Self {
        Self(labels.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Labels {
    fn from(labels: &[&str]) -> Self {
        Self(labels.iter().map(|l| l.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Labels {
    fn from(labels: [&str; N]) -> Self {
        Self(labels.iter().map(|l| l.to_string()).collect())
    }
}

/// Payload of a keyed filter: a literal value or a predicate.
///
/// Which form applies is decided at the call boundary by the `From` impls,
/// so a condition can never be mistaken for a literal on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HasFilter {
    Literal(Value),
    Predicate(Condition),
}

impl From<Condition> for HasFilter {
    fn from(condition: Condition) -> Self {
        HasFilter::Predicate(condition)
    }
}

impl From<Value> for HasFilter {
    fn from(value: Value) -> Self {
        HasFilter::Literal(value)
    }
}

impl From<i32> for HasFilter {
    fn from(n: i32) -> Self {
        HasFilter::Literal(n.into())
    }
}

impl From<i64> for HasFilter {
    fn from(n: i64) -> Self {
        HasFilter::Literal(n.into())
    }
}

impl From<f64> for HasFilter {
    fn from(n: f64) -> Self {
        HasFilter::Literal(n.into())
    }
}

impl From<&str> for HasFilter {
    fn from(s: &str) -> Self {
        HasFilter::Literal(s.into())
    }
}

impl From<String> for HasFilter {
    fn from(s: String) -> Self {
        HasFilter::Literal(s.into())
    }
}

impl<V: Into<Value>> From<Vec<V>> for HasFilter {
    fn from(items: Vec<V>) -> Self {
        HasFilter::Literal(Value::List(items.into_iter().map(|v| v.into()).collect()))
    }
}

/// Full-text search payload: an expression plus an optional
/// disambiguating term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpec {
    pub term: Option<String>,
    pub search: String,
}

impl From<&str> for SearchSpec {
    fn from(search: &str) -> Self {
        Self {
            term: None,
            search: search.to_string(),
        }
    }
}

impl From<String> for SearchSpec {
    fn from(search: String) -> Self {
        Self { term: None, search }
    }
}

impl From<(&str, &str)> for SearchSpec {
    fn from((term, search): (&str, &str)) -> Self {
        Self {
            term: Some(term.to_string()),
            search: search.to_string(),
        }
    }
}

impl From<(String, String)> for SearchSpec {
    fn from((term, search): (String, String)) -> Self {
        Self {
            term: Some(term),
            search,
        }
    }
}

/// Sort direction for the order step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A single traversal or query-manipulation instruction.
///
/// Steps are immutable once appended to a query; insertion order is
/// execution order on the server. `Match` is the one recursive spot:
/// it owns fully independent sub-queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Step {
    In(Labels),
    Out(Labels),
    InEdge(Labels),
    OutEdge(Labels),
    InVertex,
    OutVertex,
    As(Labels),
    Select(Labels),
    By(String),
    Label,
    Values(Labels),
    Limit(i64),
    Order { key: String, order: SortOrder },
    Range { lower: i64, upper: i64 },
    Count,
    Dedup,
    Path,
    Aggregate(String),
    Group(Vec<String>),
    GroupCount(Option<String>),
    Is(Condition),
    Has { key: String, filter: Option<HasFilter> },
    HasNot(String),
    Match(Vec<crate::ast::Query>),
    SearchVertex(SearchSpec),
    SearchEdge(SearchSpec),
    AddVertex(String),
    AddEdge(String),
    To(String),
    Property(BTreeMap<String, Value>),
    Drop,
}

impl Step {
    /// The wire tag keying this step's serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            Step::In(_) => "in",
            Step::Out(_) => "out",
            Step::InEdge(_) => "inEdge",
            Step::OutEdge(_) => "outEdge",
            Step::InVertex => "inVertex",
            Step::OutVertex => "outVertex",
            Step::As(_) => "as",
            Step::Select(_) => "select",
            Step::By(_) => "by",
            Step::Label => "label",
            Step::Values(_) => "values",
            Step::Limit(_) => "limit",
            Step::Order { .. } => "order",
            Step::Range { .. } => "range",
            Step::Count => "count",
            Step::Dedup => "dedup",
            Step::Path => "path",
            Step::Aggregate(_) => "aggregate",
            Step::Group(_) => "group",
            Step::GroupCount(_) => "groupCount",
            Step::Is(_) => "is",
            Step::Has { .. } => "has",
            Step::HasNot(_) => "hasNot",
            Step::Match(_) => "match",
            Step::SearchVertex(_) => "searchVertex",
            Step::SearchEdge(_) => "searchEdge",
            Step::AddVertex(_) => "addV",
            Step::AddEdge(_) => "addE",
            Step::To(_) => "to",
            Step::Property(_) => "property",
            Step::Drop => "drop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_normalization() {
        assert_eq!(Labels::from("x"), Labels::from(vec!["x"]));
        assert!(Labels::none().is_empty());
        assert_eq!(Labels::from(["a", "b"]).as_slice().len(), 2);
    }

    #[test]
    fn test_search_spec_forms() {
        let plain = SearchSpec::from("symbol:BRAF");
        assert_eq!(plain.term, None);

        let scoped = SearchSpec::from(("gene", "symbol:BRAF"));
        assert_eq!(scoped.term.as_deref(), Some("gene"));
        assert_eq!(scoped.search, "symbol:BRAF");
    }

    #[test]
    fn test_has_filter_boundary() {
        assert!(matches!(HasFilter::from(5), HasFilter::Literal(_)));
        assert!(matches!(
            HasFilter::from(crate::ast::builders::eq(5)),
            HasFilter::Predicate(_)
        ));
    }
}
