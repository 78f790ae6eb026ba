// Snapshot source backed by the status endpoint

use std::time::Duration;

use async_trait::async_trait;

use super::{FetchError, SnapshotSource};
use crate::models::Snapshot;

/// Path of the status endpoint relative to the server base URL.
pub const STATUS_PATH: &str = "/api/dados";

/// Reads snapshots from a running `nocwatch` server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Source with a caller-supplied client (shared pools, tests).
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), STATUS_PATH);
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        let snapshot: Snapshot = serde_json::from_slice(&body)?;
        tracing::debug!(url = %self.url, sites = snapshot.len(), "snapshot fetched");
        Ok(snapshot)
    }
}
