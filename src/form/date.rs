//! Date text normalization
//!
//! The form accepts free-text dates in either `DD-MM-YYYY` or canonical
//! `YYYY-MM-DD` order; the registry API accepts canonical order only. This
//! module is the single source of truth for converting between the two
//! conventions, in both directions, idempotently.

use chrono::NaiveDate;
use thiserror::Error;

/// Marker error for text that matches neither accepted date shape or does
/// not name a real calendar date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized date text: {text}")]
pub struct DateParseError {
    /// The offending input, verbatim
    pub text: String,
}

impl DateParseError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Converts free-text date input to canonical `YYYY-MM-DD`.
///
/// Text already in canonical order is kept (zero-padded if needed); anything
/// else is interpreted as `DD-MM-YYYY` and reordered. The year decides which
/// shape applies: a 4-digit first segment means canonical order. Impossible
/// dates (e.g. day 31 of February) are rejected.
///
/// # Examples
///
/// ```
/// use cadastro::form::date::to_canonical;
///
/// assert_eq!(to_canonical("15-03-1990").unwrap(), "1990-03-15");
/// assert_eq!(to_canonical("5-3-1990").unwrap(), "1990-03-05");
/// assert_eq!(to_canonical("1990-03-15").unwrap(), "1990-03-15");
/// assert!(to_canonical("not a date").is_err());
/// ```
pub fn to_canonical(text: &str) -> Result<String, DateParseError> {
    let (year, month, day) = split_date(text.trim(), false).ok_or_else(|| DateParseError::new(text))?;
    format_checked(year, month, day).ok_or_else(|| DateParseError::new(text))
}

/// Re-emits a canonical date with guaranteed zero padding.
///
/// The form's date widget expects canonical order; this exists so that month
/// and day come out padded even when the stored value was produced elsewhere
/// without padding. `to_canonical(to_display(x)) == x` for every valid
/// canonical `x`.
pub fn to_display(canonical: &str) -> Result<String, DateParseError> {
    let (year, month, day) =
        split_date(canonical.trim(), true).ok_or_else(|| DateParseError::new(canonical))?;
    format_checked(year, month, day).ok_or_else(|| DateParseError::new(canonical))
}

/// Splits `Y-M-D` or `D-M-Y` text into numeric parts. With `canonical_only`
/// the first segment must be the 4-digit year.
fn split_date(text: &str, canonical_only: bool) -> Option<(i32, u32, u32)> {
    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !is_digits(p)) {
        return None;
    }

    let (y, m, d) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else if !canonical_only && parts[2].len() == 4 {
        (parts[2], parts[1], parts[0])
    } else {
        return None;
    };

    Some((y.parse().ok()?, m.parse().ok()?, d.parse().ok()?))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Zero-padded reassembly, rejecting dates the calendar does not contain
fn format_checked(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}
