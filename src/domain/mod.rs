//! Domain models and types for Cadastro.
//!
//! This module contains the core domain model for the person registry,
//! the identifier newtype, the error hierarchy, and the crate-wide
//! [`Result`] alias.
//!
//! # Type Safety
//!
//! The server-assigned identifier uses the newtype pattern so it cannot be
//! confused with other integers:
//!
//! ```rust
//! use cadastro::domain::PersonId;
//!
//! let id = PersonId::new(7);
//! assert_eq!(id.value(), 7);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CadastroError>`]:
//!
//! ```rust
//! use cadastro::domain::{CadastroError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(CadastroError::Validation("invalid input".to_string()))
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod person;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ApiError, CadastroError};
pub use ids::PersonId;
pub use person::Person;
pub use result::Result;
