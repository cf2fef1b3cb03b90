//! Ideal-weight command implementation
//!
//! The formula lives on the server; this command only locates the person and
//! presents the number.

use clap::Args;

use crate::form::Outcome;

use super::{build_orchestrator, EXIT_INVALID, EXIT_NOT_FOUND, EXIT_TRANSPORT};

/// Arguments for the ideal-weight command
#[derive(Args, Debug)]
pub struct IdealWeightArgs {
    /// Id of the person
    #[arg(long)]
    pub id: i64,

    /// Name text used to locate the person
    #[arg(long)]
    pub search: String,
}

impl IdealWeightArgs {
    /// Execute the ideal-weight command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(id = self.id, query = %self.search, "Fetching ideal weight");

        let mut orchestrator = build_orchestrator(config_path)?;
        let person = match super::locate(&mut orchestrator, &self.search, self.id).await {
            Ok(Some(person)) => person,
            Ok(None) => {
                println!("❌ No person with id {} matched '{}'", self.id, self.search);
                return Ok(EXIT_NOT_FOUND);
            }
            Err(e) => {
                println!("❌ Search failed: {e}");
                return Ok(EXIT_TRANSPORT);
            }
        };
        let nome = person.nome.clone();
        orchestrator.select(person);

        match orchestrator.calculate_ideal_weight().await {
            Ok(Outcome::Done(ideal)) => {
                println!("Peso ideal de {nome}: {ideal:.2} kg");
                Ok(0)
            }
            Ok(Outcome::Blocked(_)) => {
                println!("❌ Nothing selected");
                Ok(EXIT_INVALID)
            }
            Err(e) => {
                println!("❌ Ideal weight lookup failed: {e}");
                Ok(EXIT_TRANSPORT)
            }
        }
    }
}
