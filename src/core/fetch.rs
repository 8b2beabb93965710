use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use std::time::Duration;

/// Upper bound on the single archive request; the API has no streaming
/// responses, so one bound covers connect and body read.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// One GET against the archive endpoint. Non-success statuses and
    /// transport failures are logged and surfaced as fetch errors; the
    /// body is returned as-is, schema validation happens in the cleaner.
    pub async fn fetch(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!("Error fetching data: {}", e);
                EtlError::Fetch(e)
            })?;

        tracing::debug!("API response status: {}", response.status());

        let raw = response.json::<serde_json::Value>().await.map_err(|e| {
            tracing::error!("Error decoding response body: {}", e);
            EtlError::Fetch(e)
        })?;

        Ok(raw)
    }
}
