//! CLI command implementations
//!
//! This module contains all CLI command implementations. Each data command
//! builds a [`FormOrchestrator`] over the configured HTTP gateway and drives
//! it the same way an interactive form would: fields first, then the action.

pub mod create;
pub mod delete;
pub mod ideal_weight;
pub mod init;
pub mod search;
pub mod update;
pub mod validate;

use std::sync::Arc;

use crate::config::load_config;
use crate::domain::{ApiError, Person};
use crate::form::{Field, FormOrchestrator, Outcome};
use crate::gateway::HttpPersonGateway;

/// Exit code for validation and configuration problems
pub const EXIT_INVALID: i32 = 2;
/// Exit code for a person that could not be located
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code for transport/server failures
pub const EXIT_TRANSPORT: i32 = 4;

/// Loads configuration and wires an orchestrator over the HTTP gateway
pub(crate) fn build_orchestrator(config_path: &str) -> anyhow::Result<FormOrchestrator> {
    let config = load_config(config_path)?;
    let gateway = HttpPersonGateway::new(&config.api)?;
    Ok(FormOrchestrator::new(Arc::new(gateway)))
}

/// Searches for `query` and returns the result carrying `id`, if any
pub(crate) async fn locate(
    orchestrator: &mut FormOrchestrator,
    query: &str,
    id: i64,
) -> Result<Option<Person>, ApiError> {
    orchestrator.on_field_change(Field::Nome, query);
    match orchestrator.search().await? {
        Outcome::Done(_) => Ok(orchestrator
            .results()
            .iter()
            .find(|p| p.id.map(|i| i.value()) == Some(id))
            .cloned()),
        Outcome::Blocked(_) => Ok(None),
    }
}

/// Prints a result table of people
pub(crate) fn print_results(people: &[Person]) {
    println!(
        "{:>6}  {:<24} {:<12} {:<12} {:<6} {:>7} {:>7}",
        "id", "nome", "data_nasc", "cpf", "sexo", "altura", "peso"
    );
    for person in people {
        println!(
            "{:>6}  {:<24} {:<12} {:<12} {:<6} {:>7} {:>7}",
            person
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            person.nome,
            person.data_nasc,
            person.cpf,
            person.sexo,
            person.altura,
            person.peso,
        );
    }
}
