//! The concurrent todo store.
//!
//! # Design
//! `TodoStore` maps usernames to ordered `Vec<TodoItem>` lists inside a
//! sharded concurrent map. `entry()` gives an atomic get-or-insert, so two
//! first adds for the same new username cannot lose a create, and the shard
//! write lock is held across the `push`/`remove` itself, so simultaneous
//! mutations of one user's list are serialized as well.
//!
//! All three operations always succeed: reads of unknown users return an
//! empty list, and deletes with an out-of-range index are silent no-ops.
//! The HTTP layer relies on this to keep its always-200 contract.

use dashmap::DashMap;

use crate::types::TodoItem;

/// Concurrent mapping from username to that user's ordered todo list.
///
/// Constructed once at startup and shared into handlers behind an `Arc`.
/// Usernames are case-sensitive and otherwise arbitrary; entries are
/// created lazily on first add and never removed.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: DashMap<String, Vec<TodoItem>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: DashMap::new(),
        }
    }

    /// Appends `item` to `username`'s list, creating the list if absent.
    pub fn add(&self, username: &str, item: TodoItem) {
        self.todos.entry(username.to_string()).or_default().push(item);
    }

    /// Returns a snapshot of `username`'s list, empty for unknown users.
    pub fn list(&self, username: &str) -> Vec<TodoItem> {
        self.todos
            .get(username)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Removes the item at `index` from `username`'s list.
    ///
    /// Unknown usernames and out-of-range indices are no-ops; the caller
    /// always observes success.
    pub fn delete(&self, username: &str, index: usize) {
        if let Some(mut list) = self.todos.get_mut(username) {
            if index < list.len() {
                list.remove(index);
            }
        }
    }
}
