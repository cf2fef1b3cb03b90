//! Per-field validators for the person form
//!
//! Each validator is a pure function of a field's raw text value. `None`
//! means the value passes; `Some(Violation)` carries the structured tag the
//! UI binds to. Aggregate form validity is the conjunction of all per-field
//! results, computed in [`FormState`](super::state::FormState).

use std::fmt;

use super::date;

/// CPF document numbers are always 11 characters
pub const CPF_LEN: usize = 11;

/// Structured violation tag produced by a field validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    /// Value is empty or blank
    Required,
    /// Value is shorter than the minimum length
    TooShort {
        /// Minimum number of characters
        min: usize,
    },
    /// Value is longer than the maximum length
    TooLong {
        /// Maximum number of characters
        max: usize,
    },
    /// Numeric value is missing, unparseable, or below the allowed minimum
    BelowMinimum {
        /// Smallest accepted value
        min: f64,
    },
    /// Value is not a real calendar date in an accepted shape
    InvalidDate,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "required"),
            Violation::TooShort { min } => write!(f, "too short (minimum {min} characters)"),
            Violation::TooLong { max } => write!(f, "too long (maximum {max} characters)"),
            Violation::BelowMinimum { min } => write!(f, "below minimum ({min})"),
            Violation::InvalidDate => write!(f, "not a valid date"),
        }
    }
}

/// Rejects empty or whitespace-only text
pub fn required(value: &str) -> Option<Violation> {
    if value.trim().is_empty() {
        Some(Violation::Required)
    } else {
        None
    }
}

/// Requires exactly `len` characters (counted as chars, not bytes)
pub fn exact_length(value: &str, len: usize) -> Option<Violation> {
    let count = value.chars().count();
    if count < len {
        Some(Violation::TooShort { min: len })
    } else if count > len {
        Some(Violation::TooLong { max: len })
    } else {
        None
    }
}

/// Numeric minimum check. Empty input violates `Required`; unparseable input
/// violates `BelowMinimum` (it cannot be shown to satisfy the minimum).
/// Never panics.
pub fn min_number(value: &str, min: f64) -> Option<Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(Violation::Required);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n >= min => None,
        _ => Some(Violation::BelowMinimum { min }),
    }
}

/// Numeric check with a minimum of zero
pub fn non_negative(value: &str) -> Option<Violation> {
    min_number(value, 0.0)
}

/// Requires a real calendar date in `DD-MM-YYYY` or `YYYY-MM-DD` shape
pub fn valid_date(value: &str) -> Option<Violation> {
    if value.trim().is_empty() {
        return Some(Violation::Required);
    }
    if date::to_canonical(value).is_err() {
        Some(Violation::InvalidDate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("" => Some(Violation::Required) ; "empty")]
    #[test_case("   " => Some(Violation::Required) ; "blank")]
    #[test_case("Ana" => None ; "filled")]
    fn required_cases(value: &str) -> Option<Violation> {
        required(value)
    }

    #[test_case("1234567890" => Some(Violation::TooShort { min: CPF_LEN }) ; "ten chars")]
    #[test_case("123456789012" => Some(Violation::TooLong { max: CPF_LEN }) ; "twelve chars")]
    #[test_case("12345678901" => None ; "exactly eleven")]
    fn cpf_length_cases(value: &str) -> Option<Violation> {
        exact_length(value, CPF_LEN)
    }

    #[test_case("" => Some(Violation::Required) ; "empty is required")]
    #[test_case("  " => Some(Violation::Required) ; "blank is required")]
    #[test_case("abc" => Some(Violation::BelowMinimum { min: 0.0 }) ; "non numeric")]
    #[test_case("-0.1" => Some(Violation::BelowMinimum { min: 0.0 }) ; "negative")]
    #[test_case("NaN" => Some(Violation::BelowMinimum { min: 0.0 }) ; "nan")]
    #[test_case("0" => None ; "zero")]
    #[test_case("1.65" => None ; "positive")]
    fn non_negative_cases(value: &str) -> Option<Violation> {
        non_negative(value)
    }

    #[test_case("" => Some(Violation::Required) ; "empty is required")]
    #[test_case("15-03-1990" => None ; "day first")]
    #[test_case("1990-03-15" => None ; "canonical")]
    #[test_case("31-02-1990" => Some(Violation::InvalidDate) ; "impossible")]
    #[test_case("yesterday" => Some(Violation::InvalidDate) ; "free text")]
    fn valid_date_cases(value: &str) -> Option<Violation> {
        valid_date(value)
    }

    #[test]
    fn test_violation_display() {
        assert_eq!(Violation::Required.to_string(), "required");
        assert_eq!(
            Violation::TooShort { min: 11 }.to_string(),
            "too short (minimum 11 characters)"
        );
    }
}
