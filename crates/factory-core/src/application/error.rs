//! Application layer errors.
//!
//! These errors represent failures while executing a generation run, not
//! invalid input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No bundle with this name exists in the template store.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// A bundle exists but could not be read.
    #[error("Failed to load template '{name}': {reason}")]
    TemplateLoad { name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A manifest expected to hold a JSON object did not.
    #[error("Manifest {path} is not a valid package manifest: {reason}")]
    ManifestCorrupt { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { name } => vec![
                format!("No template bundle is named '{}'", name),
                "Try: factory templates to see available templates".into(),
                "Or point --templates at a directory containing it".into(),
            ],
            Self::TemplateLoad { name, .. } => vec![
                format!("Check the files of template '{}'", name),
                "Template files must be valid UTF-8".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ManifestCorrupt { path, .. } => vec![
                format!("Inspect {}", path.display()),
                "The manifest must be produced by the ts-project template in the same run".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::TemplateLoad { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::ManifestCorrupt { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
