//! Result type alias for Cadastro
//!
//! Convenience alias that uses [`CadastroError`] as the error type.

use super::errors::CadastroError;

/// Result type alias for Cadastro operations
///
/// # Examples
///
/// ```
/// use cadastro::domain::result::Result;
/// use cadastro::domain::errors::CadastroError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CadastroError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CadastroError>;
