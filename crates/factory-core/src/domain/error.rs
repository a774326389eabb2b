// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Config Validation Errors
    // ========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: String },

    #[error("Package '{name}' is declared more than once")]
    DuplicatePackage { name: String },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig(msg) => vec![
                "Check your generation config".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add a value for '{}'", field),
                "Every package needs a name, main and types entry".into(),
            ],
            Self::DuplicatePackage { name } => vec![
                format!("Package names must be unique; '{}' appears twice", name),
                "Rename or merge the duplicated package entries".into(),
            ],
            Self::InvalidPackageName { .. } => vec![
                "Use a plain identifier such as 'ui-kit' or 'storage'".into(),
                "Package names become directory names under packages/".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig(_)
            | Self::MissingRequiredField { .. }
            | Self::DuplicatePackage { .. }
            | Self::InvalidPackageName { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::InvalidTemplate(_) | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
