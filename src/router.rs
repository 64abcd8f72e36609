use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::config::Config;
use crate::db::Store;
use crate::handlers::{auth, tools};

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct CmsState {
    pub store: Store,
    pub session_ttl: chrono::Duration,
}

impl CmsState {
    pub fn new(store: Store, cfg: &Config) -> Self {
        Self {
            store,
            session_ttl: cfg.session_ttl(),
        }
    }
}

pub fn cms_router(state: CmsState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/tools", get(tools::list_tools))
        .route(
            "/api/tools/{id}",
            get(tools::get_tool).put(tools::update_tool),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "pdfmaster-cms"}))
}
