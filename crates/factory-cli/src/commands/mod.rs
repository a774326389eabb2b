//! Command handlers. Each translates parsed arguments into core calls and
//! renders the result; no business logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod templates;

use std::path::Path;

use tracing::debug;

use factory_adapters::{DirectoryStore, InMemoryStore};
use factory_core::application::ports::TemplateStore;

use crate::error::{CliError, CliResult};

/// Pick the template source: an explicit directory, else the built-ins.
pub(crate) fn template_store(dir: Option<&Path>) -> CliResult<Box<dyn TemplateStore>> {
    match dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidInput {
            message: format!("templates directory not found: {}", dir.display()),
            source: None,
        }),
        Some(dir) => {
            debug!(dir = %dir.display(), "using template directory");
            Ok(Box::new(DirectoryStore::new(dir)))
        }
        None => {
            debug!("using built-in templates");
            Ok(Box::new(InMemoryStore::with_builtin()?))
        }
    }
}
