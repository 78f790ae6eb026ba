// HTTP routes

mod http;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::AppConfig;
use crate::generator::Generator;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) generator: Generator,
}

/// Builds the router. Unmatched routes go to `server.static_dir` when set.
pub fn app(generator: Generator, config: &AppConfig) -> Router {
    let state = AppState { generator };
    let router = Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/dados", get(http::status_handler)) // GET /api/dados
        .route("/api/roster", get(http::roster_handler)) // GET /api/roster
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state);

    match &config.server.static_dir {
        Some(dir) => {
            tracing::info!(static_dir = %dir, "Serving static assets for unmatched routes");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    }
}
