//! Condition builders for filter steps.

use crate::ast::{Condition, Value};

/// Equality condition (property = value).
pub fn eq(value: impl Into<Value>) -> Condition {
    Condition::Eq(value.into())
}

pub fn neq(value: impl Into<Value>) -> Condition {
    Condition::Neq(value.into())
}

pub fn gt(value: impl Into<Value>) -> Condition {
    Condition::Gt(value.into())
}

pub fn gte(value: impl Into<Value>) -> Condition {
    Condition::Gte(value.into())
}

pub fn lt(value: impl Into<Value>) -> Condition {
    Condition::Lt(value.into())
}

pub fn lte(value: impl Into<Value>) -> Condition {
    Condition::Lte(value.into())
}

/// Closed range condition (lower <= property <= upper).
pub fn between(lower: impl Into<Value>, upper: impl Into<Value>) -> Condition {
    Condition::Between {
        lower: lower.into(),
        upper: upper.into(),
    }
}

/// Open range condition (lower < property < upper).
pub fn inside(lower: impl Into<Value>, upper: impl Into<Value>) -> Condition {
    Condition::Inside {
        lower: lower.into(),
        upper: upper.into(),
    }
}

/// Exclusion range condition (property < lower or property > upper).
pub fn outside(lower: impl Into<Value>, upper: impl Into<Value>) -> Condition {
    Condition::Outside {
        lower: lower.into(),
        upper: upper.into(),
    }
}

pub fn within<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Condition {
    Condition::Within(values.into_iter().map(|v| v.into()).collect())
}

pub fn without<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Condition {
    Condition::Without(values.into_iter().map(|v| v.into()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_builders() {
        assert_eq!(eq(5), Condition::Eq(Value::Int(5)));
        assert_eq!(neq("x"), Condition::Neq(Value::Text("x".to_string())));
        assert_eq!(gt(1.5), Condition::Gt(Value::Real(1.5)));
    }

    #[test]
    fn test_range_builders() {
        assert_eq!(
            between(1, 10),
            Condition::Between {
                lower: Value::Int(1),
                upper: Value::Int(10),
            }
        );
        assert_eq!(between(1, 10).tag(), "between");
    }

    #[test]
    fn test_set_builders() {
        assert_eq!(
            within(vec!["a", "b"]),
            Condition::Within(vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string()),
            ])
        );
    }
}
