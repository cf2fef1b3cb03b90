//! Registry gateway
//!
//! The only part of the crate that touches the network. [`PersonApi`]
//! abstracts the five registry operations behind a trait so the orchestrator
//! can be driven against a test double; [`HttpPersonGateway`] is the reqwest
//! implementation of the REST contract.

pub mod client;
pub mod models;

use async_trait::async_trait;

use crate::domain::{ApiError, Person, PersonId};

/// The five request operations of the person registry
///
/// Each operation is a single round trip with exactly two outcomes: a typed
/// payload, or an [`ApiError`] describing an opaque transport/server
/// failure. No operation is retried automatically.
///
/// Implementations are explicitly constructed and injected; there is no
/// process-wide gateway instance.
#[async_trait]
pub trait PersonApi: Send + Sync {
    /// Creates a person. The draft must carry no `id`; the server assigns
    /// one and echoes the stored record back.
    async fn create(&self, draft: &Person) -> Result<Person, ApiError>;

    /// Searches people by name substring. Empty/blank queries are rejected
    /// by the orchestrator before dispatch, not here.
    async fn search(&self, nome: &str) -> Result<Vec<Person>, ApiError>;

    /// Replaces the person stored under `id` and returns the stored record
    async fn update(&self, id: PersonId, person: &Person) -> Result<Person, ApiError>;

    /// Removes the person stored under `id`
    async fn delete(&self, id: PersonId) -> Result<(), ApiError>;

    /// Fetches the server-computed ideal weight for the person under `id`.
    /// The formula is server-side and opaque to this client.
    async fn fetch_ideal_weight(&self, id: PersonId) -> Result<f64, ApiError>;
}

// Re-export commonly used types for convenience
pub use client::HttpPersonGateway;
pub use models::IdealWeightResponse;
