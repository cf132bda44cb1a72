#![forbid(unsafe_code)]

//! Core value types for the recalc calculator.
//!
//! This crate holds everything below the history layer:
//!
//! - [`validate::validate_operand`]: operand string → checked `f64`
//! - [`ops::OpKind`] and [`ops::evaluate`]: the closed set of arithmetic
//!   operations and their dispatch
//! - [`calculation::Calculation`]: the immutable record of one performed
//!   operation
//! - [`error`]: the validation/operation error taxonomy
//!
//! Everything here is pure and synchronous; persistence and history live in
//! their own crates.

pub mod calculation;
pub mod error;
pub mod ops;
pub mod validate;

pub use calculation::Calculation;
pub use error::{OperationError, UnknownOperation, ValidationError};
pub use ops::{OpKind, evaluate};
pub use validate::{format_number, validate_operand};
