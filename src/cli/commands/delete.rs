//! Delete command implementation

use clap::Args;

use crate::form::Outcome;

use super::{build_orchestrator, EXIT_INVALID, EXIT_NOT_FOUND, EXIT_TRANSPORT};

/// Arguments for the delete command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the person to delete
    #[arg(long)]
    pub id: i64,

    /// Name text used to locate the person
    #[arg(long)]
    pub search: String,
}

impl DeleteArgs {
    /// Execute the delete command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(id = self.id, query = %self.search, "Deleting person");

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
        orchestrator.select(person);

        match orchestrator.delete().await {
            Ok(Outcome::Done(())) => {
                println!("✅ Person {} deleted", self.id);
                Ok(0)
            }
            Ok(Outcome::Blocked(_)) => {
                println!("❌ Nothing selected to delete");
                Ok(EXIT_INVALID)
            }
            Err(e) => {
                println!("❌ Delete failed: {e}");
                Ok(EXIT_TRANSPORT)
            }
        }
    }
}
