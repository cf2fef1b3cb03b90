//! Update command implementation
//!
//! Locates the person through a search, selects the matching id, applies the
//! given field overrides on top of the loaded record, and sends the update.

use clap::Args;

use crate::form::{Field, Outcome};

use super::{build_orchestrator, EXIT_INVALID, EXIT_NOT_FOUND, EXIT_TRANSPORT};

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Id of the person to update
    #[arg(long)]
    pub id: i64,

    /// Name text used to locate the person (defaults to --nome)
    #[arg(long)]
    pub search: Option<String>,

    /// New full name
    #[arg(long)]
    pub nome: Option<String>,

    /// New birth date (DD-MM-YYYY or YYYY-MM-DD)
    #[arg(long = "data-nasc")]
    pub data_nasc: Option<String>,

    /// New CPF document number
    #[arg(long)]
    pub cpf: Option<String>,

    /// New sex
    #[arg(long)]
    pub sexo: Option<String>,

    /// New height
    #[arg(long)]
    pub altura: Option<String>,

    /// New weight
    #[arg(long)]
    pub peso: Option<String>,
}

impl UpdateArgs {
    /// Execute the update command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let Some(query) = self.search.clone().or_else(|| self.nome.clone()) else {
            println!("❌ Provide --search (or --nome) so the person can be located");
            return Ok(EXIT_INVALID);
        };

        tracing::info!(id = self.id, query = %query, "Updating person");

        let mut orchestrator = build_orchestrator(config_path)?;
        let person = match super::locate(&mut orchestrator, &query, self.id).await {
            Ok(Some(person)) => person,
            Ok(None) => {
                println!("❌ No person with id {} matched '{query}'", self.id);
                return Ok(EXIT_NOT_FOUND);
            }
            Err(e) => {
                println!("❌ Search failed: {e}");
                return Ok(EXIT_TRANSPORT);
            }
        };
        orchestrator.select(person);

        let overrides = [
            (Field::Nome, &self.nome),
            (Field::DataNasc, &self.data_nasc),
            (Field::Cpf, &self.cpf),
            (Field::Sexo, &self.sexo),
            (Field::Altura, &self.altura),
            (Field::Peso, &self.peso),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                orchestrator.on_field_change(field, value);
            }
        }

        match orchestrator.update().await {
            Ok(Outcome::Done(person)) => {
                println!("✅ Person {} updated", self.id);
                super::print_results(&[person]);
                Ok(0)
            }
            Ok(Outcome::Blocked(_)) => {
                println!("❌ The form is not valid:");
                for (field, violation) in orchestrator.form().violations() {
                    println!("   {field}: {violation}");
                }
                Ok(EXIT_INVALID)
            }
            Err(e) => {
                println!("❌ Update failed: {e}");
                Ok(EXIT_TRANSPORT)
            }
        }
    }
}
