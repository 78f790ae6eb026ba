//! Snapshot sources.
//!
//! The poller only sees [`SnapshotSource`]; the mock [`Generator`] and the
//! HTTP client are interchangeable behind it, so a real telemetry backend can
//! be plugged in without touching aggregation or rendering.

mod http;

pub use http::HttpSource;

use async_trait::async_trait;

use crate::generator::Generator;
use crate::models::Snapshot;

/// Errors a source may report while fetching a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("invalid snapshot payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce a point-in-time snapshot of the roster.
#[async_trait]
pub trait SnapshotSource: Send + Sync + 'static {
    async fn fetch(&self) -> Result<Snapshot, FetchError>;
}

#[async_trait]
impl SnapshotSource for Generator {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        Ok(self.generate())
    }
}
