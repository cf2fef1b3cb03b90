//! Workflow tests for the form orchestrator
//!
//! Drives the full create/search/select/update/delete cycle against an
//! in-memory gateway double that records every call it receives.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cadastro::domain::{ApiError, Person, PersonId};
use cadastro::form::{Blocked, Field, FormMode, FormOrchestrator, Outcome, SearchOutcome};
use cadastro::gateway::PersonApi;

/// Gateway double: serves a fixed people list and records calls in order
#[derive(Default)]
struct FakeRegistry {
    calls: Mutex<Vec<String>>,
    people: Mutex<Vec<Person>>,
    failing: Mutex<bool>,
}

impl FakeRegistry {
    fn with_people(people: Vec<Person>) -> Arc<Self> {
        let registry = Self::default();
        *registry.people.lock().unwrap() = people;
        Arc::new(registry)
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    fn check_failing(&self) -> Result<(), ApiError> {
        if *self.failing.lock().unwrap() {
            Err(ApiError::ConnectionFailed("registry offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PersonApi for FakeRegistry {
    async fn create(&self, draft: &Person) -> Result<Person, ApiError> {
        self.record(format!("create:{}:{}", draft.nome, draft.data_nasc));
        self.check_failing()?;
        let mut created = draft.clone();
        created.id = Some(PersonId::new(1));
        self.people.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn search(&self, nome: &str) -> Result<Vec<Person>, ApiError> {
        self.record(format!("search:{nome}"));
        self.check_failing()?;
        Ok(self
            .people
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.nome.contains(nome))
            .cloned()
            .collect())
    }

    async fn update(&self, id: PersonId, person: &Person) -> Result<Person, ApiError> {
        self.record(format!("update:{id}:{}", person.peso));
        self.check_failing()?;
        Ok(person.clone())
    }

    async fn delete(&self, id: PersonId) -> Result<(), ApiError> {
        self.record(format!("delete:{id}"));
        self.check_failing()?;
        self.people
            .lock()
            .unwrap()
            .retain(|p| p.id != Some(id));
        Ok(())
    }

    async fn fetch_ideal_weight(&self, id: PersonId) -> Result<f64, ApiError> {
        self.record(format!("ideal_weight:{id}"));
        self.check_failing()?;
        Ok(62.5)
    }
}

fn ana(id: i64) -> Person {
    Person {
        id: Some(PersonId::new(id)),
        nome: "Ana".to_string(),
        data_nasc: "1990-03-15".to_string(),
        cpf: "12345678901".to_string(),
        sexo: "F".to_string(),
        altura: 1.65,
        peso: 60.0,
    }
}

fn fill_ana(orchestrator: &mut FormOrchestrator) {
    orchestrator.on_field_change(Field::Nome, "Ana");
    orchestrator.on_field_change(Field::DataNasc, "15-03-1990");
    orchestrator.on_field_change(Field::Cpf, "12345678901");
    orchestrator.on_field_change(Field::Sexo, "F");
    orchestrator.on_field_change(Field::Altura, "1.65");
    orchestrator.on_field_change(Field::Peso, "60");
}

#[tokio::test]
async fn test_submit_sends_canonical_date_and_reverts_to_empty() {
    let registry = FakeRegistry::with_people(vec![]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());
    fill_ana(&mut orchestrator);

    let outcome = orchestrator.submit().await.unwrap();
    match outcome {
        Outcome::Done(person) => assert_eq!(person.id, Some(PersonId::new(1))),
        other => panic!("expected Done, got {other:?}"),
    }

    // The gateway saw the date reordered and zero-padded.
    assert_eq!(registry.calls(), vec!["create:Ana:1990-03-15"]);

    assert_eq!(orchestrator.form().mode(), FormMode::Empty);
    assert_eq!(orchestrator.form().value(Field::Nome), "");
    assert!(orchestrator.selected().is_none());
}

#[tokio::test]
async fn test_invalid_form_blocks_submit_without_gateway_call() {
    let registry = FakeRegistry::with_people(vec![]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());
    fill_ana(&mut orchestrator);
    orchestrator.on_field_change(Field::Cpf, "1234567890");

    let outcome = orchestrator.submit().await.unwrap();
    assert_eq!(outcome, Outcome::Blocked(Blocked::InvalidForm));
    assert!(registry.calls().is_empty());
}

#[tokio::test]
async fn test_failed_create_leaves_form_intact() {
    let registry = FakeRegistry::with_people(vec![]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());
    fill_ana(&mut orchestrator);
    registry.set_failing(true);

    let result = orchestrator.submit().await;
    assert!(result.is_err());

    // Nothing was reset: the user can retry without retyping.
    assert_eq!(orchestrator.form().value(Field::Nome), "Ana");
    assert_eq!(orchestrator.form().value(Field::DataNasc), "15-03-1990");
    assert!(orchestrator.form().is_valid());
}

#[tokio::test]
async fn test_select_populates_every_field_in_canonical_order() {
    let mut person = ana(7);
    person.data_nasc = "1990-3-5".to_string();
    let registry = FakeRegistry::with_people(vec![person]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());

    orchestrator.on_field_change(Field::Nome, "Ana");
    orchestrator.search().await.unwrap();
    let found = orchestrator.results()[0].clone();
    orchestrator.select(found);

    let form = orchestrator.form();
    assert_eq!(form.mode(), FormMode::EditingExisting);
    assert_eq!(form.value(Field::Nome), "Ana");
    assert_eq!(form.value(Field::DataNasc), "1990-03-05");
    assert_eq!(form.value(Field::Cpf), "12345678901");
    assert_eq!(form.value(Field::Sexo), "F");
    assert_eq!(form.value(Field::Altura), "1.65");
    assert_eq!(form.value(Field::Peso), "60");
    assert!(orchestrator.selected().is_some());
}

#[tokio::test]
async fn test_update_without_select_makes_no_gateway_call() {
    let registry = FakeRegistry::with_people(vec![ana(7)]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());
    fill_ana(&mut orchestrator);

    let outcome = orchestrator.update().await.unwrap();
    assert_eq!(outcome, Outcome::Blocked(Blocked::NoSelection));
    assert!(registry.calls().is_empty());
}

#[tokio::test]
async fn test_update_merges_selected_id_and_refreshes_list() {
    let registry = FakeRegistry::with_people(vec![ana(7)]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());

    orchestrator.on_field_change(Field::Nome, "Ana");
    orchestrator.search().await.unwrap();
    let found = orchestrator.results()[0].clone();
    orchestrator.select(found);
    orchestrator.on_field_change(Field::Peso, "61");

    let outcome = orchestrator.update().await.unwrap();
    assert!(matches!(outcome, Outcome::Done(_)));

    // The update carried the selected id, then the last search re-ran.
    assert_eq!(
        registry.calls(),
        vec!["search:Ana", "update:7:61", "search:Ana"]
    );
    // The refresh is a landing search, so the selection is gone.
    assert!(orchestrator.selected().is_none());
}

#[tokio::test]
async fn test_delete_reruns_last_query_and_clears_everything() {
    let registry = FakeRegistry::with_people(vec![ana(7)]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());

    orchestrator.on_field_change(Field::Nome, "Ana");
    orchestrator.search().await.unwrap();
    let found = orchestrator.results()[0].clone();
    orchestrator.select(found);

    let outcome = orchestrator.delete().await.unwrap();
    assert_eq!(outcome, Outcome::Done(()));

    assert_eq!(
        registry.calls(),
        vec!["search:Ana", "delete:7", "search:Ana"]
    );
    assert!(orchestrator.selected().is_none());
    assert_eq!(orchestrator.form().mode(), FormMode::Empty);
    assert!(orchestrator.results().is_empty());
}

#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let registry = FakeRegistry::with_people(vec![ana(7)]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());

    orchestrator.on_field_change(Field::Nome, "Ana");
    orchestrator.search().await.unwrap();
    assert_eq!(orchestrator.results().len(), 1);

    registry.set_failing(true);
    let result = orchestrator.search().await;
    assert!(result.is_err());
    assert_eq!(orchestrator.results().len(), 1);
    assert_eq!(orchestrator.last_search(), Some("Ana"));
}

#[tokio::test]
async fn test_search_applies_count_and_clears_selection() {
    let registry = FakeRegistry::with_people(vec![ana(7)]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());

    orchestrator.on_field_change(Field::Nome, "Ana");
    orchestrator.search().await.unwrap();
    let found = orchestrator.results()[0].clone();
    orchestrator.select(found);

    let outcome = orchestrator.search().await.unwrap();
    assert_eq!(outcome, Outcome::Done(SearchOutcome::Applied(1)));
    assert!(orchestrator.selected().is_none());
}

#[tokio::test]
async fn test_ideal_weight_requires_selection_and_changes_nothing() {
    let registry = FakeRegistry::with_people(vec![ana(7)]);
    let mut orchestrator = FormOrchestrator::new(registry.clone());

    let outcome = orchestrator.calculate_ideal_weight().await.unwrap();
    assert_eq!(outcome, Outcome::Blocked(Blocked::NoSelection));
    assert!(registry.calls().is_empty());

    orchestrator.on_field_change(Field::Nome, "Ana");
    orchestrator.search().await.unwrap();
    let found = orchestrator.results()[0].clone();
    orchestrator.select(found);

    let outcome = orchestrator.calculate_ideal_weight().await.unwrap();
    assert_eq!(outcome, Outcome::Done(62.5));
    assert_eq!(orchestrator.results().len(), 1);
    assert!(orchestrator.selected().is_some());
}
