//! Arithmetic helper functions.
//!
//! Stateless calculator primitives used by the `sum` command and the
//! calculator screen in the TUI. `add` keeps its fixed five-argument
//! arity; callers pass zeros for unused slots.

use thiserror::Error;

/// Error condition raised by the arithmetic helpers.
#[derive(Debug, Error, PartialEq)]
pub enum MathError {
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

/// Sum five numbers.
pub fn add(a: f64, b: f64, c: f64, d: f64, e: f64) -> f64 {
    a + b + c + d + e
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Square a number.
pub fn square(a: f64) -> f64 {
    a * a
}

/// Divide `a` by `b`, failing when `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Parse two numeric strings and sum them.
///
/// Mirrors the calculator form: both inputs must parse to finite
/// numbers, otherwise `None` signals a validation failure. Division by
/// zero never arises on this path since it only ever sums.
pub fn sum_inputs(a: &str, b: &str) -> Option<f64> {
    let a: f64 = a.trim().parse().ok()?;
    let b: f64 = b.trim().parse().ok()?;
    if !a.is_finite() || !b.is_finite() {
        return None;
    }
    Some(add(a, b, 0.0, 0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_five_args() {
        assert_eq!(add(5.0, 3.0, 0.0, 0.0, 0.0), 8.0);
        assert_eq!(add(1.0, 2.0, 3.0, 4.0, 5.0), 15.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(10.0, 4.0), 6.0);
    }

    #[test]
    fn test_square() {
        assert_eq!(square(7.0), 49.0);
        assert_eq!(square(-3.0), 9.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(20.0, 4.0), Ok(5.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(5.0, 0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_sum_inputs_valid() {
        assert_eq!(sum_inputs("5", "3"), Some(8.0));
        assert_eq!(sum_inputs(" 2.5 ", "0.5"), Some(3.0));
    }

    #[test]
    fn test_sum_inputs_invalid() {
        assert_eq!(sum_inputs("five", "3"), None);
        assert_eq!(sum_inputs("", "3"), None);
        assert_eq!(sum_inputs("inf", "1"), None);
        assert_eq!(sum_inputs("NaN", "1"), None);
    }
}
