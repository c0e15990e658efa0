//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate list state, input buffer and confirmation flow into
//!   use-case level APIs.
//! - Keep UI/FFI layers decoupled from container internals.

pub mod session;
