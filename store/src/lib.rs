//! Per-user todo list storage.
//!
//! # Overview
//! A concurrent mapping from username to that user's ordered todo sequence,
//! shared by every request handler in the server crate. Lists are created
//! lazily on first add; usernames never seen before read as empty.
//!
//! # Design
//! - `TodoStore` wraps a sharded concurrent map, so map lookup/creation and
//!   per-user list mutation are both serialized without a store-wide lock.
//! - Every operation is infallible: unknown users and out-of-range delete
//!   indices are absorbed silently rather than surfaced as errors.
//! - The store carries no I/O or async dependencies; the server crate owns
//!   it behind an `Arc` and hands it to handlers through axum state.

pub mod store;
pub mod types;

pub use store::TodoStore;
pub use types::TodoItem;
