//! Form orchestrator
//!
//! Composes the form state, the selection, the result list, and the injected
//! registry gateway into the create/search/select/update/delete cycle plus
//! the ideal-weight lookup.
//!
//! Every action is guarded locally before anything reaches the network:
//! guard misses come back as [`Outcome::Blocked`] and make no gateway call,
//! while transport failures come back as `Err` and abort the transition,
//! leaving prior state intact. Each outgoing search carries a monotonically
//! increasing sequence number; a response that is no longer the latest
//! issued is discarded instead of overwriting a newer result list.

use std::sync::Arc;

use crate::domain::{ApiError, Person};
use crate::gateway::PersonApi;

use super::selection::SelectionState;
use super::state::{Field, FormState};

/// Why a guarded action did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// The form does not satisfy every field validator
    InvalidForm,
    /// No persisted person is selected
    NoSelection,
    /// The name field is blank, so there is nothing to search for
    EmptyQuery,
}

/// Result of a guarded action: either it ran, or a local guard stopped it
/// before any gateway call was made
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    Blocked(Blocked),
}

impl<T> Outcome<T> {
    /// True when a local guard stopped the action
    pub fn is_blocked(&self) -> bool {
        matches!(self, Outcome::Blocked(_))
    }
}

/// What happened to a search response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Result list replaced with this many entries
    Applied(usize),
    /// A newer search was issued while this one was in flight; the response
    /// was dropped without touching the result list
    Superseded,
}

/// Merges form-schema fields over a selected person.
///
/// Only fields the form edits are overridden; selection-only fields (the
/// server-assigned `id`) are preserved from `selected`.
pub fn merge_for_update(selected: &Person, draft: &Person) -> Person {
    Person {
        id: selected.id,
        nome: draft.nome.clone(),
        data_nasc: draft.data_nasc.clone(),
        cpf: draft.cpf.clone(),
        sexo: draft.sexo.clone(),
        altura: draft.altura,
        peso: draft.peso,
    }
}

/// Coordinates user actions onto the form, the selection, and the gateway
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use cadastro::config::ApiConfig;
/// use cadastro::form::{Field, FormOrchestrator, Outcome};
/// use cadastro::gateway::HttpPersonGateway;
///
/// # async fn example() -> cadastro::domain::Result<()> {
/// let gateway = HttpPersonGateway::new(&ApiConfig::default())?;
/// let mut orchestrator = FormOrchestrator::new(Arc::new(gateway));
///
/// orchestrator.on_field_change(Field::Nome, "Ana");
/// orchestrator.search().await?;
/// for person in orchestrator.results() {
///     println!("{} ({})", person.nome, person.cpf);
/// }
/// # Ok(())
/// # }
/// ```
pub struct FormOrchestrator {
    gateway: Arc<dyn PersonApi>,
    form: FormState,
    selection: SelectionState,
    results: Vec<Person>,
    last_search: Option<String>,
    /// Sequence number of the most recently issued search
    search_seq: u64,
}

impl FormOrchestrator {
    /// Creates an orchestrator around an injected gateway
    pub fn new(gateway: Arc<dyn PersonApi>) -> Self {
        Self {
            gateway,
            form: FormState::new(),
            selection: SelectionState::new(),
            results: Vec::new(),
            last_search: None,
            search_seq: 0,
        }
    }

    /// Records a field edit and synchronously recomputes validity
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Read-only view of the form
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Current result list, newest search wins
    pub fn results(&self) -> &[Person] {
        &self.results
    }

    /// Currently selected person, if any
    pub fn selected(&self) -> Option<&Person> {
        self.selection.selected()
    }

    /// Query text of the last applied search
    pub fn last_search(&self) -> Option<&str> {
        self.last_search.as_deref()
    }

    /// Blanks the form and drops the selection
    pub fn reset(&mut self) {
        self.form.reset();
        self.selection.clear();
    }

    /// Submits the form as a create request.
    ///
    /// Blocked while the form is invalid. On success the form reverts to
    /// empty; a failed create leaves the form untouched so the user can
    /// retry without retyping.
    pub async fn submit(&mut self) -> Result<Outcome<Person>, ApiError> {
        let Some(draft) = self.form.draft() else {
            tracing::debug!("submit blocked, form is not valid");
            return Ok(Outcome::Blocked(Blocked::InvalidForm));
        };

        let created = self.gateway.create(&draft).await?;
        tracing::info!(id = ?created.id.map(|i| i.value()), nome = %created.nome, "person created");
        self.reset();
        Ok(Outcome::Done(created))
    }

    /// Searches by the current name field.
    ///
    /// Blocked while the name field is blank. On success the result list is
    /// replaced and the selection cleared; on failure the previous list is
    /// kept. A response superseded by a newer search is discarded.
    pub async fn search(&mut self) -> Result<Outcome<SearchOutcome>, ApiError> {
        let nome = self.form.value(Field::Nome).trim().to_string();
        if nome.is_empty() {
            tracing::debug!("search blocked, name field is blank");
            return Ok(Outcome::Blocked(Blocked::EmptyQuery));
        }

        let seq = self.issue_search();
        let found = self.gateway.search(&nome).await?;
        Ok(Outcome::Done(self.apply_search(seq, nome, found)))
    }

    /// Makes a search result the current edit target and loads it into the
    /// form, date shown in canonical order.
    pub fn select(&mut self, person: Person) {
        tracing::debug!(id = ?person.id.map(|i| i.value()), nome = %person.nome, "person selected");
        self.form.load(&person);
        self.selection.select(person);
    }

    /// Sends the current form merged over the selected person as an update.
    ///
    /// Blocked without a selection or while the form is invalid. On success
    /// the last search re-runs to refresh the list (which also clears the
    /// selection, as any landing search does).
    pub async fn update(&mut self) -> Result<Outcome<Person>, ApiError> {
        let Some(selected) = self.selection.selected().cloned() else {
            tracing::debug!("update blocked, no selection");
            return Ok(Outcome::Blocked(Blocked::NoSelection));
        };
        let Some(id) = selected.id else {
            tracing::debug!("update blocked, selected record has no id");
            return Ok(Outcome::Blocked(Blocked::NoSelection));
        };
        let Some(draft) = self.form.draft() else {
            tracing::debug!("update blocked, form is not valid");
            return Ok(Outcome::Blocked(Blocked::InvalidForm));
        };

        let merged = merge_for_update(&selected, &draft);
        let updated = self.gateway.update(id, &merged).await?;
        tracing::info!(id = %id, "person updated");
        self.refresh_results().await;
        Ok(Outcome::Done(updated))
    }

    /// Deletes the selected person.
    ///
    /// Blocked without a selection. On success the last search re-runs with
    /// its original query text, the selection is cleared, and the form
    /// reverts to empty.
    pub async fn delete(&mut self) -> Result<Outcome<()>, ApiError> {
        let Some(id) = self.selection.selected_id() else {
            tracing::debug!("delete blocked, no selection");
            return Ok(Outcome::Blocked(Blocked::NoSelection));
        };

        self.gateway.delete(id).await?;
        tracing::info!(id = %id, "person deleted");
        self.refresh_results().await;
        self.selection.clear();
        self.form.reset();
        Ok(Outcome::Done(()))
    }

    /// Fetches the server-computed ideal weight for the selected person.
    ///
    /// Blocked without a selection. Neither outcome alters any state.
    pub async fn calculate_ideal_weight(&mut self) -> Result<Outcome<f64>, ApiError> {
        let Some(id) = self.selection.selected_id() else {
            tracing::debug!("ideal weight blocked, no selection");
            return Ok(Outcome::Blocked(Blocked::NoSelection));
        };

        let ideal = self.gateway.fetch_ideal_weight(id).await?;
        Ok(Outcome::Done(ideal))
    }

    /// Tags a new outgoing search and returns its sequence number
    fn issue_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_seq
    }

    /// Installs a search response unless a newer search was issued since
    fn apply_search(&mut self, seq: u64, query: String, found: Vec<Person>) -> SearchOutcome {
        if seq != self.search_seq {
            tracing::debug!(seq, latest = self.search_seq, "dropping superseded search response");
            return SearchOutcome::Superseded;
        }
        let count = found.len();
        tracing::debug!(query = %query, count, "search results applied");
        self.results = found;
        self.selection.clear();
        self.last_search = Some(query);
        SearchOutcome::Applied(count)
    }

    /// Re-runs the last search to refresh the list after a mutation. A
    /// failed refresh only logs and keeps the previous list; the mutation
    /// itself already went through.
    async fn refresh_results(&mut self) {
        let Some(query) = self.last_search.clone() else {
            return;
        };
        let seq = self.issue_search();
        match self.gateway.search(&query).await {
            Ok(found) => {
                self.apply_search(seq, query, found);
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "failed to refresh result list");
            }
        }
    }
}
