//! Handlers for the `/todos/{username}` routes.
//!
//! # Design
//! Each handler binds route input, delegates to the store, and shapes the
//! response. No business logic lives here, and no handler can fail: the
//! store absorbs unknown users and invalid indices, so every reachable
//! response is 200. Malformed input (bad JSON, non-integer `todoIdx`) is
//! rejected upstream by the `Json` and `Query` extractors.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use todo_store::TodoItem;

use crate::SharedStore;

/// Query parameters for delete; `todoIdx` is the wire name.
///
/// Bound as a signed integer: a negative index is a well-typed request
/// that the handler absorbs as a no-op, not a binding failure.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(rename = "todoIdx")]
    pub todo_idx: i64,
}

pub async fn add_todo(
    State(store): State<SharedStore>,
    Path(username): Path<String>,
    Json(item): Json<TodoItem>,
) -> StatusCode {
    tracing::debug!(%username, "adding todo");
    store.add(&username, item);
    StatusCode::OK
}

pub async fn get_todos(
    State(store): State<SharedStore>,
    Path(username): Path<String>,
) -> Json<Vec<TodoItem>> {
    Json(store.list(&username))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(username): Path<String>,
    Query(params): Query<DeleteParams>,
) -> StatusCode {
    tracing::debug!(%username, index = params.todo_idx, "deleting todo");
    if let Ok(index) = usize::try_from(params.todo_idx) {
        store.delete(&username, index);
    }
    StatusCode::OK
}
