//! Person domain model
//!
//! Defines the entity managed by the remote registry. Field names match the
//! registry's wire contract, so the struct serializes directly into request
//! bodies and out of response bodies.

use super::ids::PersonId;
use serde::{Deserialize, Serialize};

/// A person record in the registry
///
/// A `Person` without an `id` is a draft that has not been persisted yet;
/// the server assigns the `id` on create and it never changes afterwards.
/// `data_nasc` always carries canonical `YYYY-MM-DD` date text on the wire.
///
/// # Examples
///
/// ```
/// use cadastro::domain::Person;
///
/// let draft = Person {
///     id: None,
///     nome: "Ana".to_string(),
///     data_nasc: "1990-03-15".to_string(),
///     cpf: "12345678901".to_string(),
///     sexo: "F".to_string(),
///     altura: 1.65,
///     peso: 60.0,
/// };
/// assert!(draft.is_draft());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned identifier, absent on a draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,

    /// Full name
    pub nome: String,

    /// Birth date as canonical `YYYY-MM-DD` text
    pub data_nasc: String,

    /// CPF document number, exactly 11 characters
    pub cpf: String,

    /// Sex as categorical text
    pub sexo: String,

    /// Height, non-negative
    pub altura: f64,

    /// Weight, non-negative
    pub peso: f64,
}

impl Person {
    /// Returns true if this person has not been persisted yet
    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }
}
