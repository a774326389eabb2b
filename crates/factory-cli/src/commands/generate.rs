//! Implementation of the `factory generate` command.
//!
//! Responsibility: read the workspace description, pick the template source,
//! guard the destructive reset behind a confirmation, call the core
//! [`ProjectService`] and display results.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use factory_adapters::LocalFilesystem;
use factory_core::prelude::*;

use crate::{
    cli::{GenerateArgs, OutputFormat},
    commands::template_store,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    path: &'a Path,
    steps: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    path: &'a Path,
    packages: Vec<&'a str>,
    steps: usize,
}

/// Execute `factory generate`.
///
/// 1. Load the workspace description, apply `--path`
/// 2. Build the service over the chosen template store
/// 3. `--dry-run`: print the plan and stop
/// 4. Confirm before wiping a non-empty target unless `--yes`
/// 5. Generate and report
#[instrument(skip_all, fields(workspace = %args.workspace.display()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut workspace = load_workspace(&args.workspace)?;
    if let Some(path) = args.path {
        workspace.path = path;
    }
    debug!(
        path = %workspace.path.display(),
        packages = workspace.packages.len(),
        "workspace loaded"
    );

    let templates = args.templates.or(config.templates.local_path);
    let store = template_store(templates.as_deref())?;
    let service = ProjectService::new(store, Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let plan = service.plan(&workspace)?;
        return print_plan(&workspace.path, &plan, &output);
    }

    if is_non_empty_dir(&workspace.path) {
        confirm_replace(&workspace.path, args.yes, output.is_quiet())?;
        output.warning(&format!(
            "Replacing existing contents of {}",
            workspace.path.display()
        ))?;
    }

    let spinner = output.spinner("Generating workspace...");
    let result = service.create_project(&workspace);
    spinner.finish_and_clear();
    let project = result?;

    info!(dir = %project.dir.display(), steps = project.steps, "Generation completed");

    if output.format() == OutputFormat::Json {
        output.json(&RunReport {
            path: &project.dir,
            packages: workspace.packages.iter().map(|p| p.name.as_str()).collect(),
            steps: project.steps,
        })?;
        return Ok(());
    }

    output.success(&format!(
        "Generated {} package(s) into {}",
        workspace.packages.len(),
        project.dir.display()
    ))?;
    for package in &workspace.packages {
        output.print(&format!(
            "  packages/{:<20} {} lib(s), {} component(s)",
            package.name,
            package.libs.len(),
            package.components.len()
        ))?;
    }

    Ok(())
}

/// Parse a workspace description; `.toml` files as TOML, anything else as JSON.
pub fn load_workspace(path: &Path) -> CliResult<Config> {
    let raw = fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read {}", path.display()))?;

    let invalid = |message: String, source: Box<dyn std::error::Error + Send + Sync>| {
        CliError::WorkspaceConfig {
            path: path.to_path_buf(),
            message,
            source: Some(source),
        }
    };

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            toml::from_str(&raw).map_err(|e| invalid(e.message().to_owned(), Box::new(e)))
        }
        _ => serde_json::from_str(&raw).map_err(|e| invalid(e.to_string(), Box::new(e))),
    }
}

fn print_plan(path: &Path, plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    let steps: Vec<String> = plan.steps().iter().map(ToString::to_string).collect();

    if output.format() == OutputFormat::Json {
        output.json(&PlanReport { path, steps })?;
        return Ok(());
    }

    output.header(&format!(
        "Dry run: {} step(s) into {}",
        steps.len(),
        path.display()
    ))?;
    for step in &steps {
        output.print(&format!("  {step}"))?;
    }
    output.info("Nothing was written.")?;
    Ok(())
}

/// Gate the destructive reset of a non-empty target.
///
/// `--yes` skips the prompt. `--quiet` never prompts, so without `--yes` it
/// refuses.
fn confirm_replace(path: &Path, yes: bool, quiet: bool) -> CliResult<()> {
    if yes {
        return Ok(());
    }
    if quiet {
        return Err(CliError::InvalidInput {
            message: format!(
                "{} is not empty; pass --yes to replace it in quiet mode",
                path.display()
            ),
            source: None,
        });
    }

    let prompt = format!("{} is not empty and will be deleted. Continue?", path.display());
    if confirm(&prompt)? {
        Ok(())
    } else {
        Err(CliError::Cancelled)
    }
}

fn is_non_empty_dir(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("confirmation prompt failed: {e}"),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_prompt: &str) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
