// Cadastro - Person Registry Client
// Copyright (c) 2025 Cadastro Contributors
// Licensed under the MIT License

//! # Cadastro - Person Registry Client
//!
//! Cadastro is a client for a remote person registry exposed over HTTP/REST.
//! It maintains the Person entity through a create/search/select/update/
//! delete cycle plus a server-computed ideal-weight lookup, with all input
//! validation and date normalization done locally before anything reaches
//! the network.
//!
//! ## Architecture
//!
//! Cadastro follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`form`] - Core logic (validators, date normalization, form state,
//!   selection, orchestration)
//! - [`gateway`] - The registry REST gateway, the only networked component
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cadastro::config::load_config;
//! use cadastro::form::{Field, FormOrchestrator, Outcome};
//! use cadastro::gateway::HttpPersonGateway;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("cadastro.toml")?;
//!     let gateway = HttpPersonGateway::new(&config.api)?;
//!     let mut orchestrator = FormOrchestrator::new(Arc::new(gateway));
//!
//!     orchestrator.on_field_change(Field::Nome, "Ana");
//!     orchestrator.search().await?;
//!     println!("Found {} people", orchestrator.results().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Validation
//!
//! Field validators are pure functions producing structured violation tags;
//! the form recomputes them synchronously on every change and actions are
//! gated on the aggregate:
//!
//! ```rust
//! use cadastro::form::{Field, FormState, Violation};
//!
//! let mut form = FormState::new();
//! form.set(Field::Cpf, "123");
//! assert_eq!(form.violation(Field::Cpf), Some(Violation::TooShort { min: 11 }));
//! assert!(!form.is_valid());
//! ```
//!
//! ## Date Normalization
//!
//! The form accepts `DD-MM-YYYY` or `YYYY-MM-DD`; the registry only ever
//! sees canonical `YYYY-MM-DD`:
//!
//! ```rust
//! use cadastro::form::date;
//!
//! assert_eq!(date::to_canonical("5-3-1990").unwrap(), "1990-03-05");
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`]; gateway calls surface
//! [`domain::ApiError`] without leaking HTTP client types. Validation
//! violations are values, never errors.
//!
//! ## Logging
//!
//! Cadastro uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!(nome = "Ana", "Searching");
//! error!(error = "connection refused", "Search failed");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod form;
pub mod gateway;
pub mod logging;
