//! HTTP surface for the per-user todo plugin service.
//!
//! # Overview
//! Exposes the three `/todos/{username}` operations plus the
//! `/.well-known/` plugin-discovery endpoints (logo, manifest, OpenAPI
//! document). All state lives in a single `TodoStore` injected through
//! axum state; handlers are pure translation between HTTP and store calls.
//!
//! # Design
//! - Every todo operation responds 200: unknown users list as `[]` and
//!   invalid delete indices are absorbed by the store. Only structural
//!   binding failures (malformed JSON, non-integer `todoIdx`) produce
//!   error statuses, and those come from axum's extractors.
//! - CORS admits the plugin host origin so the manifest and API are
//!   callable from the browser-side plugin client.

pub mod openapi;
pub mod todos;
pub mod well_known;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use todo_store::TodoStore;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared handle to the process-wide store, cloned into each handler.
pub type SharedStore = Arc<TodoStore>;

/// Origin allowed to call the API cross-site (the plugin host).
const PLUGIN_ORIGIN: &str = "https://chat.openai.com";

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/todos/{username}",
            get(todos::get_todos)
                .post(todos::add_todo)
                .delete(todos::delete_todo),
        )
        .route("/.well-known/logo.png", get(well_known::plugin_logo))
        .route("/.well-known/ai-plugin.json", get(well_known::plugin_manifest))
        .route("/.well-known/openapi.yaml", get(well_known::openapi_document))
        .layer(CorsLayer::new().allow_origin(HeaderValue::from_static(PLUGIN_ORIGIN)))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
