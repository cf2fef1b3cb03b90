//! Configuration management for Cadastro.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadastro::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cadastro.toml")?;
//! println!("Registry URL: {}", config.api.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "http://localhost:8000/api/pessoas"
//! timeout_seconds = 30
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders in the file are substituted at load time, and
//! `CADASTRO_*` variables (e.g. `CADASTRO_API_BASE_URL`) override parsed
//! values afterwards.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApiConfig, ApplicationConfig, CadastroConfig, LoggingConfig};
