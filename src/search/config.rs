use anyhow::{Context, Result, bail};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://vit-tm-task.api.trademarkia.app/api/v3/us";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Where searches are sent and which origin shared links point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub endpoint: Url,
    pub origin: Url,
    /// `None` waits for the transport indefinitely
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    pub fn new(endpoint: &str, origin: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let endpoint = parse_http_url(endpoint).context("invalid search endpoint")?;
        let origin = parse_http_url(origin).context("invalid origin")?;

        Ok(Self {
            endpoint,
            origin,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }
}

fn parse_http_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).with_context(|| format!("'{input}' is not a URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("unsupported scheme '{other}' in '{input}'"),
    }
}
