//! HTTP gateway implementation
//!
//! Implements [`PersonApi`] over the registry's REST contract with reqwest.
//! Request/response mapping is the whole job: URL shape, JSON bodies, and
//! translating reqwest/status failures into [`ApiError`] without leaking
//! third-party types.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::domain::{ApiError, CadastroError, Person, PersonId};

use super::models::IdealWeightResponse;
use super::PersonApi;

/// reqwest-backed registry gateway
///
/// Explicitly constructed from [`ApiConfig`] and injected where needed;
/// holds no process-wide state beyond its connection pool.
///
/// # Example
///
/// ```no_run
/// use cadastro::config::ApiConfig;
/// use cadastro::gateway::HttpPersonGateway;
///
/// # fn example() -> cadastro::domain::Result<()> {
/// let config = ApiConfig::default();
/// let gateway = HttpPersonGateway::new(&config)?;
/// # Ok(())
/// # }
/// ```
pub struct HttpPersonGateway {
    /// Base URL of the person resource, without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,
}

impl HttpPersonGateway {
    /// Builds a gateway from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, CadastroError> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            CadastroError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL of the person resource
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn member_url(&self, id: PersonId) -> String {
        format!("{}/{}/", self.base_url, id)
    }

    fn send_error(e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else {
            ApiError::ConnectionFailed(e.to_string())
        }
    }

    async fn status_error(resp: Response) -> ApiError {
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => ApiError::PersonNotFound(message),
            s if s.is_client_error() => ApiError::ClientError {
                status: s.as_u16(),
                message,
            },
            s => ApiError::ServerError {
                status: s.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl PersonApi for HttpPersonGateway {
    async fn create(&self, draft: &Person) -> Result<Person, ApiError> {
        let url = self.collection_url();
        tracing::debug!(url = %url, nome = %draft.nome, "creating person");

        let resp = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(Self::send_error)?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        resp.json::<Person>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn search(&self, nome: &str) -> Result<Vec<Person>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(url = %url, nome = %nome, "searching people");

        let resp = self
            .client
            .get(&url)
            .query(&[("search", nome)])
            .send()
            .await
            .map_err(Self::send_error)?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        resp.json::<Vec<Person>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn update(&self, id: PersonId, person: &Person) -> Result<Person, ApiError> {
        let url = self.member_url(id);
        tracing::debug!(url = %url, id = %id, "updating person");

        let resp = self
            .client
            .put(&url)
            .json(person)
            .send()
            .await
            .map_err(Self::send_error)?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        resp.json::<Person>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn delete(&self, id: PersonId) -> Result<(), ApiError> {
        let url = self.member_url(id);
        tracing::debug!(url = %url, id = %id, "deleting person");

        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Self::send_error)?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        Ok(())
    }

    async fn fetch_ideal_weight(&self, id: PersonId) -> Result<f64, ApiError> {
        let url = format!("{}/{}/peso_ideal/", self.base_url, id);
        tracing::debug!(url = %url, id = %id, "fetching ideal weight");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::send_error)?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        let body = resp
            .json::<IdealWeightResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        Ok(body.peso_ideal)
    }
}
