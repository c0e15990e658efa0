//! Presentation-facing projections.
//!
//! # Responsibility
//! - Shape the list state into plain data a UI can render directly.
//! - Model the single-line input field with clear-on-submit semantics.
//!
//! # Invariants
//! - Projections are snapshots; rendering them never mutates state.
//! - An empty list always projects to the placeholder, never to zero rows.

use crate::model::todo::{TodoId, TodoItem};
use crate::state::list::TodoList;

/// Message shown instead of the list when no items exist.
pub const EMPTY_PLACEHOLDER: &str = "No todos!";

/// Question line of the delete confirmation prompt.
pub const DELETE_PROMPT_MESSAGE: &str = "Are you sure you want to delete this todo?";

/// The one action control a row offers in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Open item: show the "Done" control.
    MarkDone,
    /// Done item: show the "Delete" control, gated by confirmation.
    RequestDelete,
}

/// One rendered row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Stable id the UI hands back when the row's control is pressed.
    pub id: TodoId,
    pub title: String,
    /// Render the title struck through when true.
    pub struck: bool,
    pub action: RowAction,
}

impl RowView {
    fn for_item(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            struck: item.done,
            action: if item.done {
                RowAction::RequestDelete
            } else {
                RowAction::MarkDone
            },
        }
    }
}

/// What the screen shows: rows, or the empty-state placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty { placeholder: &'static str },
    Rows(Vec<RowView>),
}

impl ListView {
    /// Projects the current list state into renderable form.
    pub fn project(list: &TodoList) -> Self {
        if list.is_empty() {
            return Self::Empty {
                placeholder: EMPTY_PLACEHOLDER,
            };
        }
        Self::Rows(list.items().iter().map(RowView::for_item).collect())
    }
}

/// Payload for the delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    /// Id of the item the prompt is about.
    pub id: TodoId,
    /// Item title, shown so the user knows what they are deleting.
    pub title: String,
    /// Question line above the Yes/No controls.
    pub message: &'static str,
}

/// Single-line text input model.
///
/// Collects the next item's title; `take` yields the entered text and
/// clears the buffer, matching the field's clear-after-submit behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffered text with the field's current contents.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current buffered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Yields the buffered text and leaves the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
