pub mod common;
pub mod config;
pub mod plan;
pub mod project_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use config::Config;
pub use plan::GenerationPlan;
pub use project_structure::ProjectStructure;
pub use template::{TemplateBundle, TemplateSpec};
