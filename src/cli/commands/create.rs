//! Create command implementation
//!
//! Registers a new person. The field values go through the same form
//! validation the interactive cycle uses; the date may be typed in either
//! `DD-MM-YYYY` or `YYYY-MM-DD` order.

use clap::Args;

use crate::form::{Field, Outcome};

use super::{build_orchestrator, EXIT_INVALID, EXIT_TRANSPORT};

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Full name
    #[arg(long)]
    pub nome: String,

    /// Birth date (DD-MM-YYYY or YYYY-MM-DD)
    #[arg(long = "data-nasc")]
    pub data_nasc: String,

    /// CPF document number (11 characters)
    #[arg(long)]
    pub cpf: String,

    /// Sex
    #[arg(long)]
    pub sexo: String,

    /// Height
    #[arg(long)]
    pub altura: String,

    /// Weight
    #[arg(long)]
    pub peso: String,
}

impl CreateArgs {
    /// Execute the create command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(nome = %self.nome, "Creating person");

        let mut orchestrator = build_orchestrator(config_path)?;
        orchestrator.on_field_change(Field::Nome, &self.nome);
        orchestrator.on_field_change(Field::DataNasc, &self.data_nasc);
        orchestrator.on_field_change(Field::Cpf, &self.cpf);
        orchestrator.on_field_change(Field::Sexo, &self.sexo);
        orchestrator.on_field_change(Field::Altura, &self.altura);
        orchestrator.on_field_change(Field::Peso, &self.peso);

        match orchestrator.submit().await {
            Ok(Outcome::Done(person)) => {
                let id = person
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("✅ Person created with id {id}");
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
                println!("❌ Create failed: {e}");
                Ok(EXIT_TRANSPORT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_debug() {
        let args = CreateArgs {
            nome: "Ana".to_string(),
            data_nasc: "15-03-1990".to_string(),
            cpf: "12345678901".to_string(),
            sexo: "F".to_string(),
            altura: "1.65".to_string(),
            peso: "60".to_string(),
        };
        let _ = format!("{args:?}");
    }
}
