//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns it; `factory-core` never sees it. The workspace
//! description handed to `factory generate` is a different file and lives in
//! [`crate::commands::generate`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `FACTORY_*` environment variables, `__` between sections
//!    (`FACTORY_TEMPLATES__LOCAL_PATH=./templates`)
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of template bundles used when `--templates` is not given.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file and the
    /// environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        config::Config::builder()
            .add_source(
                config::Config::try_from(&Self::default())
                    .context("Failed to encode default configuration")?,
            )
            .add_source(config::File::from(file.as_path()).required(config_file.is_some()))
            .add_source(
                config::Environment::with_prefix("FACTORY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", file.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.factory.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "factory", "factory")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".factory.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "human");
        assert!(cfg.templates.local_path.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("factory.toml");
        fs::write(
            &file,
            "[templates]\nlocal_path = \"/srv/templates\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file)).unwrap();
        assert_eq!(
            cfg.templates.local_path.as_deref(),
            Some(Path::new("/srv/templates"))
        );
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&temp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
