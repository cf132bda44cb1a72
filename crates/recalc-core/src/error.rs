#![forbid(unsafe_code)]

//! Error taxonomy for validation and arithmetic.
//!
//! All errors here are recoverable at the REPL boundary: they are rendered
//! as a one-line message and the session continues.

use thiserror::Error;

/// Rejection of a raw operand string before it reaches an operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("empty operand")]
    Empty,

    #[error("not a number: {input}")]
    NotNumeric { input: String },

    #[error("operand {value} exceeds the maximum allowed magnitude {max}")]
    TooLarge { value: f64, max: f64 },
}

/// A command name that does not map to any operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {name}")]
pub struct UnknownOperation {
    pub name: String,
}

/// Domain violation raised while executing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid operation: {message}")]
    InvalidOperation { message: String },
}

impl OperationError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_constructor_preserves_message() {
        let error = OperationError::invalid("boom");
        assert_eq!(error.to_string(), "invalid operation: boom");
    }

    #[test]
    fn unknown_operation_names_the_command() {
        let error = UnknownOperation {
            name: "modulo".to_string(),
        };
        assert_eq!(error.to_string(), "unknown operation: modulo");
    }

    #[test]
    fn validation_errors_render_the_offending_input() {
        let error = ValidationError::NotNumeric {
            input: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "not a number: abc");

        let error = ValidationError::TooLarge {
            value: 2_000_000.0,
            max: 1_000_000.0,
        };
        assert!(error.to_string().contains("2000000"));
    }
}
