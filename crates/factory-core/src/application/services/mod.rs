//! Application services - orchestrate use cases.
//!
//! [`ProjectService`] drives a generation run; the other three services are
//! the primitives its plan steps map onto.

pub mod hydrator;
pub mod line_appender;
pub mod manifest;
pub mod project_service;

pub use hydrator::Hydrator;
pub use line_appender::LineAppender;
pub use manifest::DependencyInjector;
pub use project_service::{GeneratedProject, ProjectService};
