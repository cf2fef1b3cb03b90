//! Selection state
//!
//! Tracks which persisted person, if any, is the current edit target. Set
//! only by an explicit select on a search result; cleared by reset, by a
//! successful delete, or by a new search landing.

use crate::domain::{Person, PersonId};

/// At most one selected persisted person
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<Person>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `person` the current edit target
    pub fn select(&mut self, person: Person) {
        self.selected = Some(person);
    }

    /// Drops the current edit target
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The current edit target, if any
    pub fn selected(&self) -> Option<&Person> {
        self.selected.as_ref()
    }

    /// Server id of the current edit target. `None` when nothing is selected
    /// or the selected record somehow carries no id; id-requiring actions
    /// treat both the same way.
    pub fn selected_id(&self) -> Option<PersonId> {
        self.selected.as_ref().and_then(|p| p.id)
    }
}
