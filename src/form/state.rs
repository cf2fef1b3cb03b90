//! Person form state
//!
//! Holds the raw text the user typed per field, the per-field violations,
//! and the aggregate validity. Validity is recomputed synchronously inside
//! [`FormState::set`]; there is no subscription machinery, so there are no
//! hidden event-ordering dependencies.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::Person;

use super::date;
use super::validators::{self, Violation, CPF_LEN};

/// Form fields, one per editable Person attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Nome,
    DataNasc,
    Cpf,
    Sexo,
    Altura,
    Peso,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 6] = [
        Field::Nome,
        Field::DataNasc,
        Field::Cpf,
        Field::Sexo,
        Field::Altura,
        Field::Peso,
    ];

    /// Wire/form name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::DataNasc => "data_nasc",
            Field::Cpf => "cpf",
            Field::Sexo => "sexo",
            Field::Altura => "altura",
            Field::Peso => "peso",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Logical form mode
///
/// Derived from what the form holds: blank fields with no edit target is
/// `Empty`; user-typed fields with no edit target is `EditingNew`; fields
/// loaded from a selected persisted person is `EditingExisting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Empty,
    EditingNew,
    EditingExisting,
}

/// The person form: raw field text plus per-field validity
///
/// # Examples
///
/// ```
/// use cadastro::form::{Field, FormState, Violation};
///
/// let mut form = FormState::new();
/// assert!(!form.is_valid());
///
/// form.set(Field::Cpf, "123");
/// assert_eq!(form.violation(Field::Cpf), Some(Violation::TooShort { min: 11 }));
/// ```
#[derive(Debug, Clone)]
pub struct FormState {
    values: BTreeMap<Field, String>,
    violations: BTreeMap<Field, Violation>,
    loaded_existing: bool,
}

impl FormState {
    /// Creates an empty form. An empty form is never valid: every field is
    /// required.
    pub fn new() -> Self {
        let mut form = Self {
            values: BTreeMap::new(),
            violations: BTreeMap::new(),
            loaded_existing: false,
        };
        form.revalidate_all();
        form
    }

    /// Records a field change and synchronously recomputes that field's
    /// violation. Mode is unaffected by edits.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.revalidate(field);
    }

    /// Blanks every field and drops the edit target
    pub fn reset(&mut self) {
        self.values.clear();
        self.loaded_existing = false;
        self.revalidate_all();
    }

    /// Populates every field from a persisted person and marks the form as
    /// editing that entity. The date is shown in canonical order with
    /// guaranteed padding; a malformed stored date is shown verbatim and
    /// left to fail validation.
    pub fn load(&mut self, person: &Person) {
        let shown_date = date::to_display(&person.data_nasc)
            .unwrap_or_else(|_| person.data_nasc.clone());
        self.values.insert(Field::Nome, person.nome.clone());
        self.values.insert(Field::DataNasc, shown_date);
        self.values.insert(Field::Cpf, person.cpf.clone());
        self.values.insert(Field::Sexo, person.sexo.clone());
        self.values.insert(Field::Altura, person.altura.to_string());
        self.values.insert(Field::Peso, person.peso.to_string());
        self.loaded_existing = true;
        self.revalidate_all();
    }

    /// Current raw text of a field (empty string when untouched)
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Violation of a single field, if any
    pub fn violation(&self, field: Field) -> Option<Violation> {
        self.violations.get(&field).copied()
    }

    /// Per-field violation mapping for UI binding
    pub fn violations(&self) -> &BTreeMap<Field, Violation> {
        &self.violations
    }

    /// Aggregate validity: every field validator passes
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Current logical mode
    pub fn mode(&self) -> FormMode {
        if self.loaded_existing {
            FormMode::EditingExisting
        } else if self.values.values().any(|v| !v.trim().is_empty()) {
            FormMode::EditingNew
        } else {
            FormMode::Empty
        }
    }

    /// Converts a valid form into a draft person ready for the gateway,
    /// with the date normalized to canonical order. Returns `None` while
    /// any field is in violation.
    pub fn draft(&self) -> Option<Person> {
        if !self.is_valid() {
            return None;
        }
        // The validators above guarantee these conversions succeed.
        let data_nasc = date::to_canonical(self.value(Field::DataNasc)).ok()?;
        let altura = self.value(Field::Altura).trim().parse().ok()?;
        let peso = self.value(Field::Peso).trim().parse().ok()?;
        Some(Person {
            id: None,
            nome: self.value(Field::Nome).to_string(),
            data_nasc,
            cpf: self.value(Field::Cpf).to_string(),
            sexo: self.value(Field::Sexo).to_string(),
            altura,
            peso,
        })
    }

    fn revalidate_all(&mut self) {
        for field in Field::ALL {
            self.revalidate(field);
        }
    }

    fn revalidate(&mut self, field: Field) {
        let value = self.value(field);
        let violation = match field {
            Field::Nome | Field::Sexo => validators::required(value),
            Field::DataNasc => validators::valid_date(value),
            Field::Cpf => {
                validators::required(value).or_else(|| validators::exact_length(value, CPF_LEN))
            }
            Field::Altura | Field::Peso => validators::non_negative(value),
        };
        match violation {
            Some(v) => self.violations.insert(field, v),
            None => self.violations.remove(&field),
        };
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PersonId;

    fn fill_valid(form: &mut FormState) {
        form.set(Field::Nome, "Ana");
        form.set(Field::DataNasc, "15-03-1990");
        form.set(Field::Cpf, "12345678901");
        form.set(Field::Sexo, "F");
        form.set(Field::Altura, "1.65");
        form.set(Field::Peso, "60");
    }

    fn persisted() -> Person {
        Person {
            id: Some(PersonId::new(7)),
            nome: "Ana".to_string(),
            data_nasc: "1990-3-5".to_string(),
            cpf: "12345678901".to_string(),
            sexo: "F".to_string(),
            altura: 1.65,
            peso: 60.0,
        }
    }

    #[test]
    fn test_empty_form_is_invalid_and_empty_mode() {
        let form = FormState::new();
        assert!(!form.is_valid());
        assert_eq!(form.mode(), FormMode::Empty);
        assert_eq!(form.violation(Field::Nome), Some(Violation::Required));
    }

    #[test]
    fn test_filling_all_fields_makes_form_valid() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        assert!(form.is_valid());
        assert_eq!(form.mode(), FormMode::EditingNew);
        assert!(form.violations().is_empty());
    }

    #[test]
    fn test_cpf_length_always_blocks_validity() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        form.set(Field::Cpf, "1234567890");
        assert!(!form.is_valid());
        assert_eq!(
            form.violation(Field::Cpf),
            Some(Violation::TooShort { min: 11 })
        );
    }

    #[test]
    fn test_negative_measurements_block_validity() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        form.set(Field::Altura, "-1");
        assert!(!form.is_valid());
        form.set(Field::Altura, "1.65");
        form.set(Field::Peso, "-0.5");
        assert!(!form.is_valid());
    }

    #[test]
    fn test_reset_returns_to_empty() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        form.reset();
        assert_eq!(form.mode(), FormMode::Empty);
        assert_eq!(form.value(Field::Nome), "");
        assert!(!form.is_valid());
    }

    #[test]
    fn test_load_populates_every_field_with_padded_date() {
        let mut form = FormState::new();
        form.load(&persisted());
        assert_eq!(form.mode(), FormMode::EditingExisting);
        assert_eq!(form.value(Field::Nome), "Ana");
        assert_eq!(form.value(Field::DataNasc), "1990-03-05");
        assert_eq!(form.value(Field::Cpf), "12345678901");
        assert_eq!(form.value(Field::Sexo), "F");
        assert_eq!(form.value(Field::Altura), "1.65");
        assert_eq!(form.value(Field::Peso), "60");
        assert!(form.is_valid());
    }

    #[test]
    fn test_edits_keep_editing_existing_mode() {
        let mut form = FormState::new();
        form.load(&persisted());
        form.set(Field::Peso, "61");
        assert_eq!(form.mode(), FormMode::EditingExisting);
    }

    #[test]
    fn test_draft_normalizes_date_and_has_no_id() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        let draft = form.draft().unwrap();
        assert!(draft.is_draft());
        assert_eq!(draft.data_nasc, "1990-03-15");
        assert_eq!(draft.altura, 1.65);
        assert_eq!(draft.peso, 60.0);
    }

    #[test]
    fn test_draft_is_none_while_invalid() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        form.set(Field::DataNasc, "31-02-1990");
        assert!(form.draft().is_none());
    }
}
