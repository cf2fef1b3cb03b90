//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CadastroConfig;
use crate::domain::errors::CadastroError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CadastroConfig
/// 4. Applies environment variable overrides (CADASTRO_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cadastro::config::loader::load_config;
///
/// let config = load_config("cadastro.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CadastroConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CadastroError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CadastroError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CadastroConfig = toml::from_str(&contents)
        .map_err(|e| CadastroError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        CadastroError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Referencing an unset variable is an
/// error listing every missing name at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CadastroError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the CADASTRO_* prefix
///
/// Environment variables follow the pattern: CADASTRO_<SECTION>_<KEY>
/// For example: CADASTRO_API_BASE_URL, CADASTRO_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut CadastroConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("CADASTRO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("CADASTRO_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("CADASTRO_API_TIMEOUT_SECONDS") {
        if let Ok(parsed) = val.parse() {
            config.api.timeout_seconds = parsed;
        }
    }
    if let Ok(val) = std::env::var("CADASTRO_API_TLS_VERIFY") {
        config.api.tls_verify = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CADASTRO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CADASTRO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
