// GET handlers: version, status feed, roster

use axum::{Json, extract::State, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/dados — fresh randomized snapshot, one record per roster site.
pub(super) async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.generator.generate();
    tracing::debug!(sites = snapshot.len(), "served status snapshot");
    Json(snapshot)
}

/// GET /api/roster — static site list without generated readings.
pub(super) async fn roster_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.generator.roster().clone())
}
