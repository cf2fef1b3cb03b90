//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

use super::EXIT_INVALID;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cadastro.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Cadastro configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_INVALID);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your registry URL", self.output);
                println!("  2. Validate configuration: cadastro validate-config");
                println!("  3. Try a search: cadastro search Ana");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Cadastro Configuration File
# Person registry client

[application]
log_level = "info"

[api]
base_url = "http://localhost:8000/api/pessoas"
timeout_seconds = 30
tls_verify = true

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Cadastro Configuration File
# Person registry client

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[api]
# Base URL of the person resource
base_url = "http://localhost:8000/api/pessoas"

# Request timeout in seconds
timeout_seconds = 30

# Disable only against trusted servers with self-signed certificates
tls_verify = true

[logging]
# Enable JSON file logging with rotation
local_enabled = false

# Directory for log files
local_path = "logs"

# Rotation policy: daily, hourly, size
local_rotation = "daily"

# Max file size in MB for size-based rotation
local_max_size_mb = 100

# Any value also accepts ${ENV_VAR} substitution, e.g.:
# base_url = "${CADASTRO_REGISTRY_URL}"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_configs_parse() {
        let minimal: crate::config::CadastroConfig =
            toml::from_str(&InitArgs::generate_minimal_config()).unwrap();
        assert!(minimal.validate().is_ok());

        let full: crate::config::CadastroConfig =
            toml::from_str(&InitArgs::generate_config_with_examples()).unwrap();
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "cadastro.toml".to_string(),
            with_examples: false,
            force: false,
        };
        assert!(!args.force);
    }
}
