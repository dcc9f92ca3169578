use serde::{Deserialize, Serialize};

use crate::ast::Value;

/// A comparison, range, or set-membership predicate.
///
/// Conditions are pure values consumed as filter payload by `has` and
/// `satisfies`. Construct them with the free functions in
/// [`crate::ast::builders`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    Eq(Value),
    Neq(Value),
    Gt(Value),
    Gte(Value),
    Lt(Value),
    Lte(Value),
    Between { lower: Value, upper: Value },
    Inside { lower: Value, upper: Value },
    Outside { lower: Value, upper: Value },
    Within(Vec<Value>),
    Without(Vec<Value>),
}

impl Condition {
    /// The wire tag for this predicate.
    pub fn tag(&self) -> &'static str {
        match self {
            Condition::Eq(_) => "eq",
            Condition::Neq(_) => "neq",
            Condition::Gt(_) => "gt",
            Condition::Gte(_) => "gte",
            Condition::Lt(_) => "lt",
            Condition::Lte(_) => "lte",
            Condition::Between { .. } => "between",
            Condition::Inside { .. } => "inside",
            Condition::Outside { .. } => "outside",
            Condition::Within(_) => "within",
            Condition::Without(_) => "without",
        }
    }
}
