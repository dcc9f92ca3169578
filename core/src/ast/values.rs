use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literal value in a step payload.
///
/// The wire protocol is untyped JSON, so every literal is tagged by its
/// primitive kind before transmission (`{"n": ..}`, `{"r": ..}`, `{"s": ..}`).
/// The set of kinds is closed; conversion happens once, at the call boundary,
/// through the `From` impls below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Real(f64),
    Text(String),
    List(Vec<Value>),
    /// Key-preserved mapping. Ordered so renders stay deterministic.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// True when the value is a mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Real(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Real(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Text(u.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Text(dt.to_rfc3339())
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::List(items.into_iter().map(|v| v.into()).collect())
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(map: BTreeMap<String, V>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from(5), Value::Int(5));
        assert_eq!(Value::from(5i64), Value::Int(5));
        assert_eq!(Value::from(5.0), Value::Real(5.0));
        assert_eq!(Value::from("x"), Value::Text("x".to_string()));
    }

    #[test]
    fn test_nested_conversions() {
        let list = Value::from(vec![1, 2]);
        assert_eq!(list, Value::List(vec![Value::Int(1), Value::Int(2)]));

        let mut map = BTreeMap::new();
        map.insert("k".to_string(), 1);
        let map = Value::from(map);
        assert!(map.is_map());
    }
}
