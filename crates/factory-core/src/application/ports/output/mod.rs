//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `factory-adapters` crate provides implementations.

use crate::domain::{TemplateBundle, TemplateName};
use crate::error::FactoryResult;
use std::path::Path;

/// Port for filesystem operations (the "directory store").
///
/// Implemented by:
/// - `factory_adapters::filesystem::LocalFilesystem` (production)
/// - `factory_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths handed to the port are already resolved against the target
/// root by [`TargetTree`](crate::application::TargetTree).
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FactoryResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> FactoryResult<()>;

    /// Write raw bytes to a file, replacing it.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> FactoryResult<()>;

    /// Read a file; `Ok(None)` if it does not exist.
    fn read_file(&self, path: &Path) -> FactoryResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove whatever is at `path`: a directory tree or a single file.
    /// A missing path is not an error.
    fn remove_all(&self, path: &Path) -> FactoryResult<()>;
}

/// Port for template bundle lookup.
///
/// Implemented by:
/// - `factory_adapters::template_store::InMemoryStore` (built-in templates)
/// - `factory_adapters::template_store::DirectoryStore` (one directory per bundle)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a bundle by name. Unknown names are `ApplicationError::UnknownTemplate`.
    fn get(&self, name: &TemplateName) -> FactoryResult<TemplateBundle>;

    /// Check whether a bundle with this name exists.
    fn contains(&self, name: &TemplateName) -> bool;

    /// All bundle names, sorted.
    fn list(&self) -> FactoryResult<Vec<TemplateName>>;
}
