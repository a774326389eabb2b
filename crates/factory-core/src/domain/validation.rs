use crate::domain::{
    entities::{Config, TemplateBundle},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &Config) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_bundle(bundle: &TemplateBundle) -> Result<(), DomainError> {
        bundle.validate()
    }
}
