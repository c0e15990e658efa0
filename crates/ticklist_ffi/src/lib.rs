//! FFI crate for the Flutter to-do screen.

pub mod api;
