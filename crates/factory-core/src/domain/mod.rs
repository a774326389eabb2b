// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Factory.
//!
//! This module contains pure logic: the generation input ([`Config`]), the
//! template model ([`TemplateBundle`], [`RenderContext`]), the typed code-line
//! builders and the [`GenerationPlan`] that orders every mutation of a run.
//!
//! - **No I/O**: filesystem and template lookup go through ports
//! - **Synchronous**: a plan is built and executed on one thread
//! - **Immutable inputs**: `Config` is read, never changed
pub mod code_lines;
pub mod entities;
pub mod error;
pub mod layout;
pub mod naming;

mod validation;

pub use code_lines::{DependencyEntry, GeneratedLine, ReExport, UsageCall};
pub use entities::{
    common::RelativePath,
    config::{ComponentExports, Config, Package},
    plan::{GenerationPlan, Step},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    template::{
        BundleEntry, FileContent, RenderContext, TemplateBundle, TemplateName, TemplateSpec,
    },
};
pub use error::{DomainError, ErrorCategory};
pub use naming::camel_case;
pub use validation::DomainValidator;
