//! Core domain logic for Ticklist.
//! This crate is the single source of truth for list-state invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoId, TodoItem};
pub use service::session::{DeleteOutcome, TodoSession};
pub use state::confirm::{DeleteDecision, PendingDelete};
pub use state::list::{StateError, StateResult, TodoList};
pub use view::{DeletePrompt, InputBuffer, ListView, RowAction, RowView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
