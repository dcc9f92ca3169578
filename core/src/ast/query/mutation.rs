//! Graph mutation steps.

use std::collections::BTreeMap;

use crate::ast::{Query, Step, Value};
use crate::error::{GroveError, GroveResult};

impl Query {
    /// Create a vertex with the given id.
    pub fn add_vertex(self, id: impl Into<String>) -> Self {
        self.push(Step::AddVertex(id.into()))
    }

    /// Create an edge with the given label from the current vertex.
    pub fn add_edge(self, label: impl Into<String>) -> Self {
        self.push(Step::AddEdge(label.into()))
    }

    /// Target vertex of an edge being created.
    pub fn to(self, dst: impl Into<String>) -> Self {
        self.push(Step::To(dst.into()))
    }

    /// Set a single property on the element being created.
    pub fn property(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key.into(), value.into());
        self.push(Step::Property(map))
    }

    /// Set properties from a pre-built mapping.
    ///
    /// The argument must be a `Value::Map`; any other shape is a caller
    /// contract violation and fails immediately.
    pub fn property_map(self, properties: impl Into<Value>) -> GroveResult<Self> {
        match properties.into() {
            Value::Map(map) => Ok(self.push(Step::Property(map))),
            other => Err(GroveError::invalid(format!(
                "property expects a mapping, got {other:?}"
            ))),
        }
    }

    /// Remove the elements at the current position. Serialized under the
    /// `drop` wire tag.
    pub fn delete(self) -> Self {
        self.push(Step::Drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_map_rejects_non_mapping() {
        let err = Query::new()
            .add_vertex("vertex1")
            .property_map(5)
            .unwrap_err();
        assert!(matches!(err, GroveError::InvalidArgument(_)));
    }

    #[test]
    fn test_property_map_accepts_mapping() {
        let mut props = BTreeMap::new();
        props.insert("type".to_string(), Value::from("sample"));
        let query = Query::new()
            .add_vertex("vertex1")
            .property_map(props)
            .unwrap();
        assert_eq!(query.len(), 2);
    }
}
