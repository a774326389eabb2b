//! Project Service - main application orchestrator.
//!
//! A generation run:
//! 1. Validate the configuration
//! 2. Compile it into a [`GenerationPlan`]
//! 3. Check every template the plan needs exists
//! 4. Reset the target directory
//! 5. Execute the plan steps in order
//!
//! Nothing on disk is touched until step 4, so configuration mistakes and
//! missing templates leave any previous output intact. Failures after that
//! point leave partial output behind.

use std::path::{Component, Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, TargetTree,
        ports::{Filesystem, TemplateStore},
        services::{DependencyInjector, Hydrator, LineAppender},
    },
    domain::{Config, DomainError, DomainValidator as validator, GenerationPlan, Step, TemplateName},
    error::FactoryResult,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// Absolute directory the workspace was written to.
    pub dir: PathBuf,
    /// Number of plan steps executed.
    pub steps: usize,
}

/// Generates monorepo workspaces from a [`Config`].
pub struct ProjectService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Validate `config` and compile it into the steps a run would execute,
    /// without touching the filesystem.
    ///
    /// # Errors
    /// - `DomainError` for an invalid configuration
    /// - `ApplicationError::UnknownTemplate` for the first referenced template
    ///   the store does not have
    pub fn plan(&self, config: &Config) -> FactoryResult<GenerationPlan> {
        validator::validate_config(config)?;

        let plan = GenerationPlan::build(config);
        if let Some(missing) = plan.templates().into_iter().find(|t| !self.store.contains(t)) {
            return Err(ApplicationError::UnknownTemplate {
                name: missing.to_string(),
            }
            .into());
        }
        Ok(plan)
    }

    /// Generate the workspace described by `config`.
    ///
    /// The target directory is deleted and recreated before anything is
    /// written. Relative `config.path` values resolve against the process
    /// working directory.
    #[instrument(skip_all, fields(path = %config.path.display(), packages = config.packages.len()))]
    pub fn create_project(&self, config: &Config) -> FactoryResult<GeneratedProject> {
        let plan = self.plan(config)?;
        let dir = resolve_target(&config.path)?;

        info!(dir = %dir.display(), steps = plan.len(), "Generating workspace");

        let tree = TargetTree::new(&dir, self.filesystem.as_ref());
        tree.reset()?;

        let hydrator = Hydrator::new(self.store.as_ref(), &tree);
        let appender = LineAppender::new(&tree);
        let injector = DependencyInjector::new(&tree);

        let steps = plan.len();
        for step in plan {
            match step {
                Step::Hydrate(spec) => hydrator.hydrate(&spec)?,
                Step::AppendLine { file, line } => {
                    appender.add_line(&file, &line.to_string())?;
                }
                Step::InjectDependency {
                    manifest,
                    dependency,
                } => injector.add(&manifest, &dependency)?,
            }
        }

        for package in &config.packages {
            info!(
                package = %package.name,
                libs = package.libs.len(),
                components = package.components.len(),
                "Package generated"
            );
        }

        Ok(GeneratedProject { dir, steps })
    }

    /// Names of every template the store can hydrate, sorted.
    pub fn list_templates(&self) -> FactoryResult<Vec<TemplateName>> {
        self.store.list()
    }
}

/// Absolute, lexically normalised target directory.
///
/// Refuses the filesystem root since the run begins by deleting the target.
fn resolve_target(path: &Path) -> FactoryResult<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to read current directory: {e}"),
        })?;
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    if normalized.parent().is_none() {
        return Err(DomainError::InvalidConfig(format!(
            "refusing to use {} as the output directory",
            normalized.display()
        ))
        .into());
    }
    Ok(normalized)
}
