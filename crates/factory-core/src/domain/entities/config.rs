//! Generation input: the [`Config`] and its [`Package`] descriptors.
//!
//! A `Config` is produced by an external caller (the CLI reads it from a JSON
//! or TOML file) and consumed once by
//! [`ProjectService::create_project`](crate::application::ProjectService::create_project).
//! It is never mutated during a run.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Root of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target directory. Destroyed and recreated at the start of every run.
    pub path: PathBuf,
    /// Packages to generate, in order.
    pub packages: Vec<Package>,
}

/// One generated package under `packages/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    pub main: String,
    pub types: String,
    /// Library identifiers; position `i` becomes `lib-{i + 1}`.
    pub libs: Vec<String>,
    /// Component identifiers; position `i` becomes `component-{i + 1}`.
    pub components: Vec<String>,
    pub component_exports: ComponentExports,
}

/// How generated components are exported from their module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentExports {
    /// `export default` per component, re-exported as `Component<n>`.
    Default,
    /// Named `Component<n>` export per component, wildcard re-exported.
    Named,
}

impl ComponentExports {
    /// Value substituted for `{{export}}` in component templates.
    pub fn export_name(self, n: usize) -> String {
        match self {
            Self::Default => "default".to_string(),
            Self::Named => format!("Component{n}"),
        }
    }
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            packages: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    /// Check the preconditions a run relies on.
    ///
    /// Duplicate package names are rejected outright: two packages sharing a
    /// name would hydrate into the same `packages/<name>` subtree.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.path.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "path".into(),
            });
        }

        let mut seen = HashSet::new();
        for package in &self.packages {
            package.validate()?;
            if !seen.insert(package.name.as_str()) {
                return Err(DomainError::DuplicatePackage {
                    name: package.name.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Package {
    pub fn new(name: impl Into<String>, exports: ComponentExports) -> Self {
        Self {
            name: name.into(),
            main: "src/index.ts".into(),
            types: "src/index.ts".into(),
            libs: Vec::new(),
            components: Vec::new(),
            component_exports: exports,
        }
    }

    pub fn with_lib(mut self, lib: impl Into<String>) -> Self {
        self.libs.push(lib.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "packages[].name".into(),
            });
        }
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            return Err(DomainError::InvalidPackageName {
                name: self.name.clone(),
                reason: "must be a single path segment".into(),
            });
        }
        if self.main.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: format!("packages[{}].main", self.name),
            });
        }
        if self.types.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: format!("packages[{}].types", self.name),
            });
        }
        if self.libs.iter().any(|l| l.trim().is_empty()) {
            return Err(DomainError::InvalidConfig(format!(
                "package '{}' has an empty library identifier",
                self.name
            )));
        }
        if self.components.iter().any(|c| c.trim().is_empty()) {
            return Err(DomainError::InvalidConfig(format!(
                "package '{}' has an empty component identifier",
                self.name
            )));
        }
        Ok(())
    }
}
