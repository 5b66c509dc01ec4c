//! Domain types for the todo service.
//!
//! # Design
//! A todo item carries a single text field and nothing else — no id, no
//! completion flag. Identity is purely positional: the item's index within
//! its user's list. The JSON field name `todo` is the wire contract shared
//! with the OpenAPI document in the server crate.

use serde::{Deserialize, Serialize};

/// A single text-bearing task record. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub todo: String,
}

impl TodoItem {
    pub fn new(todo: impl Into<String>) -> Self {
        Self { todo: todo.into() }
    }
}
