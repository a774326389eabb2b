//! Application layer for Factory.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService and the hydrate,
//!   append and inject primitives it executes)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming, layout and plan order live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
mod target;

pub use services::{DependencyInjector, GeneratedProject, Hydrator, LineAppender, ProjectService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
pub use target::TargetTree;
