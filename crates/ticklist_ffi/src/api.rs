//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the to-do screen's operations to Dart via FRB.
//! - Keep error semantics simple: every call returns an envelope.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Malformed ids come back as failure envelopes, never as exceptions.
//! - One process-wide session backs all calls; the UI serializes dispatch.

use log::warn;
use std::sync::{Mutex, OnceLock};
use ticklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    DeleteDecision, DeleteOutcome, ListView, RowAction, TodoId, TodoSession,
};
use uuid::Uuid;

static SESSION: OnceLock<Mutex<TodoSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One list row as rendered by the Flutter side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    /// Stable item id in string form; handed back on button presses.
    pub id: String,
    /// Row title text.
    pub title: String,
    /// Render the title struck through when true.
    pub struck: bool,
    /// Which control the row shows: `done` or `delete`.
    pub action: String,
}

/// Render payload for the whole screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    /// Rows in display order; empty when the placeholder applies.
    pub rows: Vec<TodoRow>,
    /// Empty-state message; `Some` exactly when `rows` is empty.
    pub placeholder: Option<String>,
}

/// Generic action response envelope for to-do mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Id of the affected item, when one exists.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Confirmation prompt payload for a requested deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPromptResponse {
    /// Whether the prompt request succeeded.
    pub ok: bool,
    /// Id of the item awaiting the decision.
    pub id: Option<String>,
    /// Title shown in the dialog body.
    pub title: Option<String>,
    /// Question line on success, error text on failure.
    pub message: String,
}

/// Returns the current render payload: rows, or the empty-state message.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; always returns a complete payload.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_rows() -> TodoListResponse {
    with_session(|session| match session.snapshot() {
        ListView::Empty { placeholder } => TodoListResponse {
            rows: Vec::new(),
            placeholder: Some(placeholder.to_string()),
        },
        ListView::Rows(rows) => TodoListResponse {
            rows: rows
                .into_iter()
                .map(|row| TodoRow {
                    id: row.id.to_string(),
                    title: row.title,
                    struck: row.struck,
                    action: row_action_label(row.action).to_string(),
                })
                .collect(),
            placeholder: None,
        },
    })
}

/// Submits the text field: appends a new item and clears the input buffer.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Accepts any title, including the empty string.
/// - Never panics; returns the created item id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(title: String) -> TodoActionResponse {
    with_session(|session| {
        session.set_input(title);
        let id = session.submit_input();
        TodoActionResponse::success("Todo added.", Some(id.to_string()))
    })
}

/// Marks the item with `id` as done.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Idempotent for already-done items.
/// - Never panics; unknown or malformed ids return failure envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_mark_done(id: String) -> TodoActionResponse {
    let parsed = match parse_todo_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => return TodoActionResponse::failure(message),
    };
    with_session(|session| match session.mark_done(parsed) {
        Ok(()) => TodoActionResponse::success("Todo marked as done.", Some(id)),
        Err(err) => {
            warn!("event=todo_done module=ffi status=error id={parsed} error={err}");
            TodoActionResponse::failure(format!("todo_mark_done failed: {err}"))
        }
    })
}

/// Requests deletion of the item with `id`, returning the prompt payload.
///
/// The deletion is not applied until `todo_resolve_delete` reports the
/// user's decision.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown or malformed ids return failure envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_request_delete(id: String) -> TodoPromptResponse {
    let parsed = match parse_todo_id(&id) {
        Ok(parsed) => parsed,
        Err(message) => {
            return TodoPromptResponse {
                ok: false,
                id: None,
                title: None,
                message,
            }
        }
    };
    with_session(|session| match session.request_delete(parsed) {
        Ok(prompt) => TodoPromptResponse {
            ok: true,
            id: Some(prompt.id.to_string()),
            title: Some(prompt.title),
            message: prompt.message.to_string(),
        },
        Err(err) => {
            warn!("event=todo_delete_requested module=ffi status=error id={parsed} error={err}");
            TodoPromptResponse {
                ok: false,
                id: None,
                title: None,
                message: format!("todo_request_delete failed: {err}"),
            }
        }
    })
}

/// Resolves the pending delete confirmation.
///
/// `confirm = true` applies the deletion; `false` cancels it. Calling with
/// no prompt pending is a harmless no-op, reported as such.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_resolve_delete(confirm: bool) -> TodoActionResponse {
    let decision = if confirm {
        DeleteDecision::Confirm
    } else {
        DeleteDecision::Cancel
    };
    with_session(|session| match session.resolve_delete(decision) {
        Ok(DeleteOutcome::Deleted(deleted)) => {
            TodoActionResponse::success("Todo deleted.", Some(deleted.id.to_string()))
        }
        Ok(DeleteOutcome::Cancelled) => TodoActionResponse::success("Deletion cancelled.", None),
        Ok(DeleteOutcome::NothingPending) => {
            TodoActionResponse::success("No deletion pending.", None)
        }
        Err(err) => {
            warn!("event=todo_delete_resolved module=ffi status=error error={err}");
            TodoActionResponse::failure(format!("todo_resolve_delete failed: {err}"))
        }
    })
}

fn with_session<T>(f: impl FnOnce(&mut TodoSession) -> T) -> T {
    let session = SESSION.get_or_init(|| Mutex::new(TodoSession::seeded()));
    // A poisoned lock means a panic mid-mutation; recover with whatever
    // state is there rather than panicking across the FFI boundary.
    let mut guard = session.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

fn parse_todo_id(id: &str) -> Result<TodoId, String> {
    Uuid::parse_str(id.trim()).map_err(|_| format!("invalid todo id: `{id}`"))
}

fn row_action_label(action: RowAction) -> &'static str {
    match action {
        RowAction::MarkDone => "done",
        RowAction::RequestDelete => "delete",
    }
}
