pub mod client;
pub mod config;
pub mod error;

#[cfg(test)]
mod client_test;

pub use client::{SearchBackend, SearchClient};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_ORIGIN, SearchConfig};
pub use error::SearchError;
