//! In-memory list state container and its transitions.
//!
//! # Responsibility
//! - Own the ordered item sequence for one UI session.
//! - Apply add / mark-done / delete transitions addressed by stable id.
//!
//! # Invariants
//! - Insertion order is display order; new items are appended last.
//! - `mark_done` preserves length and touches exactly one item.
//! - `delete` preserves the relative order of the surviving items.
//! - The sequence lives for one session only; nothing here persists it.

pub mod confirm;
pub mod list;
