//! Domain model for to-do items.
//!
//! # Responsibility
//! - Define the canonical to-do record shared by state, service and FFI.
//! - Keep item mutation value-semantic: transitions produce new values.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId`.
//! - `done` is one-way: no model API clears it once set.

pub mod todo;
