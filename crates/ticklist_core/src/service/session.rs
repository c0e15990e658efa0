//! To-do screen session service.
//!
//! # Responsibility
//! - Own the per-session state: list, input buffer, pending delete.
//! - Expose the exact operations the screen's event callbacks invoke.
//!
//! # Invariants
//! - All operations are synchronous; they apply in call order.
//! - At most one delete request is pending at a time.
//! - Log events carry metadata only, never item titles.

use crate::model::todo::{TodoId, TodoItem};
use crate::state::confirm::{DeleteDecision, PendingDelete};
use crate::state::list::{StateResult, TodoList};
use crate::view::{DeletePrompt, InputBuffer, ListView, DELETE_PROMPT_MESSAGE};
use log::{debug, info};

/// Result of answering (or failing to answer) the delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmed: the item was removed.
    Deleted(TodoItem),
    /// The user answered "No"; state unchanged.
    Cancelled,
    /// No request was pending; a stray dialog callback, state unchanged.
    NothingPending,
}

impl DeleteOutcome {
    /// The removed item, when the outcome deleted one.
    pub fn deleted(self) -> Option<TodoItem> {
        match self {
            Self::Deleted(item) => Some(item),
            Self::Cancelled | Self::NothingPending => None,
        }
    }
}

/// Use-case facade for one to-do screen session.
///
/// The host UI serializes event dispatch, so every method runs to
/// completion before the next event arrives; the only suspension point is
/// the delete confirmation, held here as the pending request between
/// [`TodoSession::request_delete`] and [`TodoSession::resolve_delete`].
#[derive(Debug, Default)]
pub struct TodoSession {
    list: TodoList,
    input: InputBuffer,
    pending: Option<PendingDelete>,
}

impl TodoSession {
    /// Creates a session with an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session pre-populated with the seed item.
    pub fn seeded() -> Self {
        info!("event=session_start module=session status=ok seeded=true");
        Self {
            list: TodoList::seeded(),
            input: InputBuffer::new(),
            pending: None,
        }
    }

    /// Replaces the input buffer with the text field's contents.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input.set(text);
    }

    /// Current input buffer contents.
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// Submits the input field: appends a new item titled with the buffered
    /// text and clears the buffer.
    ///
    /// Empty input still creates an item; titles are not validated.
    pub fn submit_input(&mut self) -> TodoId {
        let title = self.input.take();
        self.add(title)
    }

    /// Appends a new open item and returns its id.
    pub fn add(&mut self, title: impl Into<String>) -> TodoId {
        let id = self.list.add(title);
        debug!(
            "event=todo_add module=session status=ok id={id} list_len={}",
            self.list.len()
        );
        id
    }

    /// Marks the item with `id` as done. Idempotent.
    pub fn mark_done(&mut self, id: TodoId) -> StateResult<()> {
        self.list.mark_done(id)?;
        debug!("event=todo_done module=session status=ok id={id}");
        Ok(())
    }

    /// Opens the delete confirmation for the item with `id`.
    ///
    /// The returned prompt carries the title for display; the deletion is
    /// held until [`TodoSession::resolve_delete`]. A new request replaces
    /// any prompt still pending.
    pub fn request_delete(&mut self, id: TodoId) -> StateResult<DeletePrompt> {
        let request = PendingDelete::request(&self.list, id)?;
        let prompt = DeletePrompt {
            id: request.id(),
            title: request.title().to_string(),
            message: DELETE_PROMPT_MESSAGE,
        };
        self.pending = Some(request);
        debug!("event=todo_delete_requested module=session status=ok id={id}");
        Ok(prompt)
    }

    /// Resolves the pending delete with the user's decision.
    ///
    /// Distinguishes a real cancellation from the stray-callback case where
    /// no request was pending; both leave the state unchanged.
    pub fn resolve_delete(&mut self, decision: DeleteDecision) -> StateResult<DeleteOutcome> {
        let Some(request) = self.pending.take() else {
            return Ok(DeleteOutcome::NothingPending);
        };
        let id = request.id();
        let deleted = request.apply(&mut self.list, decision)?;
        debug!(
            "event=todo_delete_resolved module=session status=ok id={id} confirmed={} list_len={}",
            deleted.is_some(),
            self.list.len()
        );
        Ok(match deleted {
            Some(item) => DeleteOutcome::Deleted(item),
            None => DeleteOutcome::Cancelled,
        })
    }

    /// Prompt payload for a delete request still awaiting a decision.
    pub fn pending_prompt(&self) -> Option<DeletePrompt> {
        self.pending.as_ref().map(|request| DeletePrompt {
            id: request.id(),
            title: request.title().to_string(),
            message: DELETE_PROMPT_MESSAGE,
        })
    }

    /// Renderable snapshot of the current list.
    pub fn snapshot(&self) -> ListView {
        ListView::project(&self.list)
    }

    /// Read access to the underlying list state.
    pub fn list(&self) -> &TodoList {
        &self.list
    }
}
