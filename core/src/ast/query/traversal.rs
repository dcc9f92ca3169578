//! Traversal, filter, projection, and aggregation steps.

use crate::ast::{Condition, HasFilter, Labels, Query, SearchSpec, SortOrder, Step};

impl Query {
    /// Walk incoming edges with the given label(s) to their source vertices.
    pub fn incoming(self, labels: impl Into<Labels>) -> Self {
        self.push(Step::In(labels.into()))
    }

    /// Walk all incoming edges, regardless of label.
    pub fn incoming_all(self) -> Self {
        self.push(Step::In(Labels::none()))
    }

    /// Walk outgoing edges with the given label(s) to their target vertices.
    pub fn outgoing(self, labels: impl Into<Labels>) -> Self {
        self.push(Step::Out(labels.into()))
    }

    /// Walk all outgoing edges, regardless of label.
    pub fn outgoing_all(self) -> Self {
        self.push(Step::Out(Labels::none()))
    }

    /// Move to incoming edges with the given label(s).
    pub fn in_edge(self, labels: impl Into<Labels>) -> Self {
        self.push(Step::InEdge(labels.into()))
    }

    pub fn in_edge_all(self) -> Self {
        self.push(Step::InEdge(Labels::none()))
    }

    /// Move to outgoing edges with the given label(s).
    pub fn out_edge(self, labels: impl Into<Labels>) -> Self {
        self.push(Step::OutEdge(labels.into()))
    }

    pub fn out_edge_all(self) -> Self {
        self.push(Step::OutEdge(Labels::none()))
    }

    /// From an edge position, move to the edge's source vertex.
    pub fn in_vertex(self) -> Self {
        self.push(Step::InVertex)
    }

    /// From an edge position, move to the edge's target vertex.
    pub fn out_vertex(self) -> Self {
        self.push(Step::OutVertex)
    }

    /// Name the current traversal position for later `select`.
    pub fn mark(self, labels: impl Into<Labels>) -> Self {
        self.push(Step::As(labels.into()))
    }

    /// Project named positions into the result tuple.
    pub fn select(self, labels: impl Into<Labels>) -> Self {
        self.push(Step::Select(labels.into()))
    }

    pub fn by(self, key: impl Into<String>) -> Self {
        self.push(Step::By(key.into()))
    }

    pub fn label(self) -> Self {
        self.push(Step::Label)
    }

    /// Request specific property values at the current position.
    pub fn values(self, labels: impl Into<Labels>) -> Self {
        self.push(Step::Values(labels.into()))
    }

    pub fn limit(self, n: i64) -> Self {
        self.push(Step::Limit(n))
    }

    pub fn order(self, key: impl Into<String>, order: SortOrder) -> Self {
        self.push(Step::Order {
            key: key.into(),
            order,
        })
    }

    pub fn order_asc(self, key: impl Into<String>) -> Self {
        self.order(key, SortOrder::Asc)
    }

    pub fn order_desc(self, key: impl Into<String>) -> Self {
        self.order(key, SortOrder::Desc)
    }

    pub fn range(self, begin: i64, end: i64) -> Self {
        self.push(Step::Range {
            lower: begin,
            upper: end,
        })
    }

    pub fn count(self) -> Self {
        self.push(Step::Count)
    }

    pub fn dedup(self) -> Self {
        self.push(Step::Dedup)
    }

    pub fn path(self) -> Self {
        self.push(Step::Path)
    }

    pub fn aggregate(self, label: impl Into<String>) -> Self {
        self.push(Step::Aggregate(label.into()))
    }

    pub fn group<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push(Step::Group(
            keys.into_iter().map(|k| k.as_ref().to_string()).collect(),
        ))
    }

    pub fn group_count(self) -> Self {
        self.push(Step::GroupCount(None))
    }

    pub fn group_count_by(self, label: impl Into<String>) -> Self {
        self.push(Step::GroupCount(Some(label.into())))
    }

    /// Filter the current position by an arbitrary condition tree.
    pub fn satisfies(self, condition: Condition) -> Self {
        self.push(Step::Is(condition))
    }

    /// Keep elements whose property matches a literal or a condition.
    pub fn has(self, key: impl Into<String>, filter: impl Into<HasFilter>) -> Self {
        self.push(Step::Has {
            key: key.into(),
            filter: Some(filter.into()),
        })
    }

    /// Keep elements that carry the property at all.
    pub fn has_key(self, key: impl Into<String>) -> Self {
        self.push(Step::Has {
            key: key.into(),
            filter: None,
        })
    }

    /// Keep elements that do not carry the property.
    pub fn has_not(self, key: impl Into<String>) -> Self {
        self.push(Step::HasNot(key.into()))
    }

    /// Run independently-built sub-queries against the current position.
    ///
    /// Each branch should end in `mark` so `select` can disambiguate it
    /// afterwards. Branch order is preserved on the wire.
    pub fn matching<I>(self, queries: I) -> Self
    where
        I: IntoIterator<Item = Query>,
    {
        self.push(Step::Match(queries.into_iter().collect()))
    }

    /// Full-text search over vertices. Accepts an expression or a
    /// `(term, expression)` pair.
    pub fn search_vertex(self, spec: impl Into<SearchSpec>) -> Self {
        self.push(Step::SearchVertex(spec.into()))
    }

    /// Full-text search over edges.
    pub fn search_edge(self, spec: impl Into<SearchSpec>) -> Self {
        self.push(Step::SearchEdge(spec.into()))
    }
}
