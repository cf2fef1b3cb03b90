//! Domain identifier types
//!
//! Newtype wrapper for the server-assigned person identifier. Keeping the id
//! behind a newtype prevents mixing it up with other integers (list indexes,
//! counts) at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Person identifier newtype wrapper
///
/// Assigned by the registry server on create and immutable afterwards.
/// Required for update, delete, and ideal-weight operations.
///
/// # Examples
///
/// ```
/// use cadastro::domain::PersonId;
/// use std::str::FromStr;
///
/// let id = PersonId::from_str("42").unwrap();
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Creates a new PersonId from a raw integer
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| format!("Invalid person id: {s}"))
    }
}

impl From<i64> for PersonId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_roundtrip() {
        let id = PersonId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(PersonId::from_str("7").unwrap(), id);
    }

    #[test]
    fn test_person_id_from_str_invalid() {
        assert!(PersonId::from_str("abc").is_err());
        assert!(PersonId::from_str("").is_err());
    }

    #[test]
    fn test_person_id_serializes_transparently() {
        let json = serde_json::to_string(&PersonId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: PersonId = serde_json::from_str("42").unwrap();
        assert_eq!(back.value(), 42);
    }
}
