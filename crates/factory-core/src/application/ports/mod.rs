//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `factory-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations on the target tree
//!   - `TemplateStore`: Template bundle lookup

pub mod output;

pub use output::{Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateStore};
