use serde::{Deserialize, Serialize};

use crate::ast::Step;

/// An ordered sequence of traversal steps.
///
/// Built fluently: every step method consumes the query and returns it with
/// one more step appended, so a chain of N calls yields exactly N steps in
/// call order. The step list is append-only; clone before branching if two
/// traversals share a prefix.
///
/// A query may itself be embedded inside a `match` step of another query,
/// which is the one recursive spot in the model. Ownership keeps the
/// structure a strict tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    steps: Vec<Step>,
}

impl Query {
    /// Create an empty query. An empty query is legal and renders to `[]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated steps, in insertion order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }
}

// Step-append methods, grouped by concern
mod mutation;
mod traversal;
