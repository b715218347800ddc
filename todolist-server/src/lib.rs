//! GraphQL server for the in-memory to-do list store.
//!
//! [`build_app`] wires the [`schema`] into an axum router together with the
//! health check, the [`sse`] change stream and, optionally, the front end's
//! static files. The binary in `main.rs` only parses arguments, loads
//! configuration and serves the router.

pub mod routes;
pub mod schema;
pub mod sse;
pub mod state;

use std::path::Path;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::schema::TodoSchema;
use crate::state::AppState;

/// Build the complete router for `state`.
///
/// `ui_dir`, when it exists, is served for every path not claimed by the API.
pub fn build_app(state: AppState, schema: TodoSchema, ui_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = routes::api_router(schema).layer(cors).with_state(state);

    match ui_dir {
        Some(dir) if dir.exists() => {
            info!(ui_dir = %dir.display(), "serving static UI files");
            app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
        }
        Some(dir) => {
            info!(ui_dir = %dir.display(), "UI directory not found, API-only mode");
        }
        None => {}
    }

    app
}
