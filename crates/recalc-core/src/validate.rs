#![forbid(unsafe_code)]

//! Operand validation and display formatting.
//!
//! Raw operand strings are normalized here before they reach an operation.
//! Invalid input is always rejected with a [`ValidationError`]; nothing is
//! silently coerced to a default.

use crate::error::ValidationError;

/// Parse and check a raw operand string.
///
/// Leading/trailing whitespace is trimmed. Empty input, non-numeric input,
/// and non-finite input ("nan", "inf") are rejected, as is any value whose
/// magnitude exceeds `max_abs`.
pub fn validate_operand(raw: &str, max_abs: f64) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotNumeric {
        input: trimmed.to_string(),
    })?;

    // f64's parser accepts "nan"/"inf" spellings; those are not usable
    // operands.
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric {
            input: trimmed.to_string(),
        });
    }

    if value.abs() > max_abs {
        return Err(ValidationError::TooLarge {
            value,
            max: max_abs,
        });
    }

    Ok(value)
}

/// Format a value with at most `precision` decimal places, trailing zeros
/// trimmed.
///
/// Display only. Persistence always uses the shortest round-trip
/// representation instead.
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
