//! Small reusable argument checks.

use crate::error::{DomainError, DomainResult};

/// Whether `value` is empty or consists only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails with `message` when `value` is blank.
pub fn ensure_not_blank(value: &str, message: &str) -> DomainResult<()> {
    if is_blank(value) {
        return Err(DomainError::invalid_argument(message));
    }
    Ok(())
}

/// Fails with `message` unless `value` is strictly positive.
///
/// NaN is rejected.
pub fn ensure_positive(value: f64, message: &str) -> DomainResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::invalid_argument(message))
    }
}

/// Fails with `message` when `value` is negative.
pub fn ensure_non_negative(value: i64, message: &str) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::invalid_argument(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive(0.0, "x").is_err());
        assert!(ensure_positive(-1.5, "x").is_err());
        assert!(ensure_positive(f64::NAN, "x").is_err());
        assert!(ensure_positive(0.001, "x").is_ok());
    }

    #[test]
    fn ensure_non_negative_accepts_zero() {
        assert!(ensure_non_negative(0, "x").is_ok());
        let err = ensure_non_negative(-1, "must not be negative").unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("must not be negative"));
    }
}
