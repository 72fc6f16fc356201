//! Bookshelf application library
//!
//! Wires the project modules into the kernel registry and runs the HTTP
//! server.

pub mod bootstrap;
pub mod modules;

/// Re-export commonly used types
pub use modules::*;
