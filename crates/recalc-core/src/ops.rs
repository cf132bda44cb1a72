#![forbid(unsafe_code)]

//! The operation registry: a closed set of operation kinds dispatched
//! through one pure function.
//!
//! [`OpKind::from_str`] is the factory (command name → operation);
//! [`evaluate`] is the strategy dispatch. Each operation validates its own
//! domain and every operation rejects a result that is not a finite real
//! number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, UnknownOperation};

/// The closed set of supported operations.
///
/// Serde names match the REPL command names, so the same spelling flows
/// from the command line through the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
}

impl OpKind {
    /// All operations, in command-surface order.
    pub const ALL: [OpKind; 6] = [
        OpKind::Add,
        OpKind::Subtract,
        OpKind::Multiply,
        OpKind::Divide,
        OpKind::Power,
        OpKind::Root,
    ];

    /// The command name for this operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Subtract => "subtract",
            OpKind::Multiply => "multiply",
            OpKind::Divide => "divide",
            OpKind::Power => "power",
            OpKind::Root => "root",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpKind {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for kind in OpKind::ALL {
            if s.eq_ignore_ascii_case(kind.name()) {
                return Ok(kind);
            }
        }
        Err(UnknownOperation {
            name: s.to_string(),
        })
    }
}

/// Execute one operation over two finite operands.
///
/// # Domain rules
///
/// - `divide`: zero divisor → [`OperationError::DivisionByZero`]
/// - `power`: any real base/exponent pair is attempted; a non-real result
///   (negative base with a fractional exponent) is rejected
/// - `root`: degree zero is rejected; a negative radicand is accepted only
///   for odd integer degrees, where the real root exists
/// - all operations: a non-finite result (overflow, NaN) is rejected with
///   [`OperationError::InvalidOperation`]
pub fn evaluate(kind: OpKind, a: f64, b: f64) -> Result<f64, OperationError> {
    let result = match kind {
        OpKind::Add => a + b,
        OpKind::Subtract => a - b,
        OpKind::Multiply => a * b,
        OpKind::Divide => {
            if b == 0.0 {
                return Err(OperationError::DivisionByZero);
            }
            a / b
        }
        OpKind::Power => {
            // IEEE 754 pow handles negative bases with integral exponents;
            // only a fractional exponent over a negative base yields NaN.
            let value = a.powf(b);
            if value.is_nan() {
                return Err(OperationError::invalid(format!(
                    "{a} raised to {b} has no real value"
                )));
            }
            value
        }
        OpKind::Root => nth_root(a, b)?,
    };

    if !result.is_finite() {
        return Err(OperationError::invalid(format!(
            "{kind}({a}, {b}) does not produce a finite number"
        )));
    }

    Ok(result)
}

/// The b-th root of a.
///
/// Negative radicands have a real root only for odd integer degrees; the
/// `b % 2.0` test identifies those without overflowing for large degrees
/// (degrees too large to represent an odd integer fall into the reject
/// branch).
fn nth_root(a: f64, b: f64) -> Result<f64, OperationError> {
    if b == 0.0 {
        return Err(OperationError::invalid("zeroth root is undefined"));
    }
    if a < 0.0 {
        if (b % 2.0).abs() == 1.0 {
            return Ok(-((-a).powf(b.recip())));
        }
        return Err(OperationError::invalid(format!(
            "root of negative number {a} with degree {b} has no real value"
        )));
    }
    Ok(a.powf(b.recip()))
}
