//! Core building blocks shared by every bookshelf crate: layered settings,
//! the `Module` trait, and the registry that drives module lifecycles.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
pub use settings::Settings;
