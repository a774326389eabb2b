//! Infrastructure adapters for Factory.
//!
//! This crate implements the ports defined in `factory_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{DirectoryStore, InMemoryStore};
