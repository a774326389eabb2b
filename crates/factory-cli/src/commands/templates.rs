//! `factory templates`: list the bundles a run can hydrate.

use serde::Serialize;

use crate::{
    cli::{ListFormat, OutputFormat, TemplatesArgs},
    commands::template_store,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct TemplateRow {
    name: String,
    kind: &'static str,
}

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = args.templates.or(config.templates.local_path);
    let store = template_store(dir.as_deref())?;

    let rows: Vec<TemplateRow> = store
        .list()?
        .into_iter()
        .map(|name| TemplateRow {
            kind: kind_of(name.as_str()),
            name: name.to_string(),
        })
        .collect();

    if args.format == ListFormat::Json || output.format() == OutputFormat::Json {
        output.json(&rows)?;
        return Ok(());
    }

    match args.format {
        ListFormat::List => {
            for row in &rows {
                output.print(&row.name)?;
            }
        }
        _ => {
            let source = dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "built-in".into());
            output.header(&format!("Available Templates ({source}):"))?;
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            for row in &rows {
                output.print(&format!("  {:<width$}  {}", row.name, row.kind))?;
            }
            if rows.is_empty() {
                output.warning("No templates found")?;
            }
        }
    }

    Ok(())
}

fn kind_of(name: &str) -> &'static str {
    use factory_core::domain::TemplateName;

    if name == TemplateName::PROJECT {
        "workspace"
    } else if name == TemplateName::PACKAGE {
        "package"
    } else if name.starts_with(TemplateName::LIB_PREFIX) {
        "library"
    } else if name.starts_with(TemplateName::COMPONENT_PREFIX) {
        "component"
    } else {
        "other"
    }
}
