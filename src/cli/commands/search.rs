//! Search command implementation

use clap::Args;

use crate::form::{Field, Outcome};

use super::{build_orchestrator, print_results, EXIT_INVALID, EXIT_TRANSPORT};

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name text to search for
    pub nome: String,
}

impl SearchArgs {
    /// Execute the search command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(nome = %self.nome, "Searching people");

        let mut orchestrator = build_orchestrator(config_path)?;
        orchestrator.on_field_change(Field::Nome, &self.nome);

        match orchestrator.search().await {
            Ok(Outcome::Done(_)) => {
                let results = orchestrator.results();
                if results.is_empty() {
                    println!("No people matched '{}'", self.nome);
                } else {
                    print_results(results);
                }
                Ok(0)
            }
            Ok(Outcome::Blocked(_)) => {
                println!("❌ Nothing to search for: the name is blank");
                Ok(EXIT_INVALID)
            }
            Err(e) => {
                println!("❌ Search failed: {e}");
                Ok(EXIT_TRANSPORT)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_debug() {
        let args = SearchArgs {
            nome: "Ana".to_string(),
        };
        let _ = format!("{args:?}");
    }
}
