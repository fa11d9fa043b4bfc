use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Why a search request produced no results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The endpoint answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Decode(String),
}

impl SearchError {
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SearchError::Network(UNKNOWN_ERROR.to_string())
        } else {
            SearchError::Network(message)
        }
    }

    /// Text shown in place of the results
    pub fn user_message(&self) -> String {
        format!("Failed to fetch data: {self}")
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SearchError::Status(status.as_u16())
        } else if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::network(err.to_string())
        }
    }
}
