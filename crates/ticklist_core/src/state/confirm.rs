//! Confirmation-gated deletion.
//!
//! # Responsibility
//! - Capture a delete request before the user has answered the prompt.
//! - Apply or discard the deletion once the decision arrives.
//!
//! # Invariants
//! - No state changes between request and decision; the request only
//!   snapshots the id and title needed to render the prompt.
//! - `Cancel` is always a no-op, even for ids that have since vanished.
//! - `Confirm` deletes by id; a stale id fails with `NotFound` instead of
//!   removing whatever row now sits at the old position.

use crate::model::todo::{TodoId, TodoItem};
use crate::state::list::{StateError, StateResult, TodoList};

/// User's answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    /// "Yes": apply the deletion.
    Confirm,
    /// "No": discard the request, state unchanged.
    Cancel,
}

/// A delete operation suspended on user confirmation.
///
/// Created by [`PendingDelete::request`]; consumed by [`PendingDelete::apply`]
/// once the user answers. There is no timeout: the request stays pending
/// until a decision arrives or the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    id: TodoId,
    title: String,
}

impl PendingDelete {
    /// Captures a delete request for the item with `id`.
    ///
    /// Fails with `NotFound` when the id does not resolve, so a prompt is
    /// never shown for a row that no longer exists.
    pub fn request(list: &TodoList, id: TodoId) -> StateResult<Self> {
        let item = list.get(id).ok_or(StateError::NotFound(id))?;
        Ok(Self {
            id,
            title: item.title.clone(),
        })
    }

    /// Id of the item this request targets.
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Title snapshot taken at request time, for prompt display.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resolves the request with the user's decision.
    ///
    /// Returns the deleted item on confirm, `None` on cancel. Confirming a
    /// request whose item was deleted in the meantime yields `NotFound`.
    pub fn apply(
        self,
        list: &mut TodoList,
        decision: DeleteDecision,
    ) -> StateResult<Option<TodoItem>> {
        match decision {
            DeleteDecision::Confirm => list.delete(self.id).map(Some),
            DeleteDecision::Cancel => Ok(None),
        }
    }
}
