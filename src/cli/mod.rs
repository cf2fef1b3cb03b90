//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Cadastro using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Cadastro - Person registry client
#[derive(Parser, Debug)]
#[command(name = "cadastro")]
#[command(version, about, long_about = None)]
#[command(author = "Cadastro Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cadastro.toml", env = "CADASTRO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CADASTRO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new person
    Create(commands::create::CreateArgs),

    /// Search people by name
    Search(commands::search::SearchArgs),

    /// Update a previously registered person
    Update(commands::update::UpdateArgs),

    /// Delete a previously registered person
    Delete(commands::delete::DeleteArgs),

    /// Fetch the server-computed ideal weight for a person
    IdealWeight(commands::ideal_weight::IdealWeightArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
