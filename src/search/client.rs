use super::config::SearchConfig;
use super::error::SearchError;
use crate::query::SearchParams;
use crate::schemas::{SearchOutcome, SearchRequestBody};
use reqwest::blocking::{Client, ClientBuilder};
use serde_json::Value;
use tracing::debug;

/// Anything that can answer a search. The HTTP client is the production
/// implementation; tests substitute canned responses.
pub trait SearchBackend: Send + Sync {
    fn search(&self, params: &SearchParams) -> Result<SearchOutcome, SearchError>;
}

pub struct SearchClient {
    client: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let builder = Self::client_builder(&config);
        Self::build(builder, config)
    }

    /// Local test servers must not be routed through an environment proxy
    #[cfg(test)]
    pub(crate) fn without_proxy(config: SearchConfig) -> Result<Self, SearchError> {
        let builder = Self::client_builder(&config).no_proxy();
        Self::build(builder, config)
    }

    fn client_builder(config: &SearchConfig) -> ClientBuilder {
        // Blocking clients default to a 30s timeout; `None` lifts it.
        Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
    }

    fn build(builder: ClientBuilder, config: SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }
}

impl SearchBackend for SearchClient {
    fn search(&self, params: &SearchParams) -> Result<SearchOutcome, SearchError> {
        let body = SearchRequestBody::from(params);
        debug!(query = %params.query, status = params.status.as_param(), "posting search");

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .map_err(|e| SearchError::Decode(e.to_string()))?;
        let outcome = SearchOutcome::from_payload(&payload)?;
        debug!(hits = outcome.hits.len(), "search completed");
        Ok(outcome)
    }
}
