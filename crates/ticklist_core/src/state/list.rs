//! Ordered to-do list container.
//!
//! # Responsibility
//! - Hold the session's item sequence in display order.
//! - Resolve stable ids to positions and apply transitions there.
//!
//! # Invariants
//! - Ids are unique within one list; resolution is unambiguous.
//! - Transitions replace items with new values instead of mutating a
//!   shared element in place.

use crate::model::todo::{TodoId, TodoItem};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Title of the single item every fresh session starts with.
const SEED_TITLE: &str = "Learn React";

pub type StateResult<T> = Result<T, StateError>;

/// Semantic error for list transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The id no longer resolves to an item; it was deleted between the
    /// moment the caller captured it and the moment it was used.
    NotFound(TodoId),
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "to-do item not found: {id}"),
        }
    }
}

impl Error for StateError {}

/// Ordered in-memory sequence of to-do items.
///
/// Insertion order is display order: `add` appends, `delete` closes the
/// gap, nothing reorders. All addressing goes through `TodoId`, so a stale
/// id yields `StateError::NotFound` rather than acting on the wrong row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the session's starting list with its single seed item.
    pub fn seeded() -> Self {
        let mut list = Self::new();
        list.add(SEED_TITLE);
        list
    }

    /// Builds a list from existing items, preserving their order.
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Appends a new open item and returns its generated id.
    ///
    /// The title is accepted as-is; the empty string is a legal title.
    pub fn add(&mut self, title: impl Into<String>) -> TodoId {
        let item = TodoItem::new(title);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Marks the item with `id` as done.
    ///
    /// Replaces the stored item with its `completed` value at the same
    /// position. Idempotent: a second call on a done item changes nothing.
    pub fn mark_done(&mut self, id: TodoId) -> StateResult<()> {
        let position = self.position_of(id)?;
        self.items[position] = self.items[position].completed();
        Ok(())
    }

    /// Removes the item with `id` and returns it.
    ///
    /// Items after the removed position shift up by one; relative order of
    /// the remaining items is preserved.
    pub fn delete(&mut self, id: TodoId) -> StateResult<TodoItem> {
        let position = self.position_of(id)?;
        Ok(self.items.remove(position))
    }

    /// Returns the item with `id`, if it is still present.
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position_of(&self, id: TodoId) -> StateResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StateError::NotFound(id))
    }
}
