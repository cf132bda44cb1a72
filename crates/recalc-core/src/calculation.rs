#![forbid(unsafe_code)]

//! The immutable record of one performed calculation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ops::OpKind;

/// One performed operation: operands, kind, result, and creation time.
///
/// Constructed by the calculator facade after a successful evaluation and
/// never mutated. Field order matches the persisted column order
/// (`operand_a, operand_b, operation, result, timestamp`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    pub operand_a: f64,
    pub operand_b: f64,
    pub operation: OpKind,
    pub result: f64,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Calculation {
    /// Record a performed operation, stamped with the current time.
    #[must_use]
    pub fn new(operation: OpKind, operand_a: f64, operand_b: f64, result: f64) -> Self {
        Self {
            operand_a,
            operand_b,
            operation,
            result,
            created_at: Utc::now(),
        }
    }
}

/// Equality ignores the timestamp: two records of the same operation over
/// the same operands with the same result are the same calculation.
impl PartialEq for Calculation {
    fn eq(&self, other: &Self) -> bool {
        self.operation == other.operation
            && self.operand_a == other.operand_a
            && self.operand_b == other.operand_b
            && self.result == other.result
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) = {}",
            self.operation, self.operand_a, self.operand_b, self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_operation_and_result() {
        let calc = Calculation::new(OpKind::Add, 2.0, 3.0, 5.0);
        assert_eq!(calc.to_string(), "add(2, 3) = 5");
    }

    #[test]
    fn equality_ignores_the_timestamp() {
        let mut first = Calculation::new(OpKind::Multiply, 5.0, 4.0, 20.0);
        let second = Calculation::new(OpKind::Multiply, 5.0, 4.0, 20.0);
        first.created_at = first.created_at - chrono::Duration::days(1);
        assert_eq!(first, second);
    }

    #[test]
    fn equality_distinguishes_operations() {
        let add = Calculation::new(OpKind::Add, 2.0, 2.0, 4.0);
        let multiply = Calculation::new(OpKind::Multiply, 2.0, 2.0, 4.0);
        assert_ne!(add, multiply);
    }
}
