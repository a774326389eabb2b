//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "factory",
    bin_name = "factory",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate multi-package TypeScript workspaces",
    long_about = "Factory reads a workspace description (packages, their libraries \
                  and components) and generates a TypeScript monorepo wired \
                  together through an aggregator package.",
    after_help = "EXAMPLES:\n\
        \x20 factory generate workspace.json\n\
        \x20 factory generate workspace.toml --path ./out --yes\n\
        \x20 factory generate workspace.json --dry-run\n\
        \x20 factory templates --format list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a workspace from a config file.
    #[command(
        visible_alias = "g",
        about = "Generate a workspace",
        after_help = "The target directory is deleted and recreated on every run.\n\n\
            EXAMPLES:\n\
            \x20 factory generate workspace.json\n\
            \x20 factory generate workspace.json --templates ./my-templates"
    )]
    Generate(GenerateArgs),

    /// List available template bundles.
    #[command(visible_alias = "ls", about = "List available templates")]
    Templates(TemplatesArgs),

    /// Inspect the application configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 factory config list\n\
            \x20 factory config get templates.local_path\n\
            \x20 factory config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 factory completions bash > ~/.local/share/bash-completion/completions/factory\n\
            \x20 factory completions zsh  > ~/.zfunc/_factory"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Workspace description (`.json` or `.toml`).
    #[arg(value_name = "WORKSPACE", help = "Workspace config file (.json or .toml)")]
    pub workspace: PathBuf,

    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Override the target directory from the config file"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Directory of template bundles (default: built-in templates)"
    )]
    pub templates: Option<PathBuf>,

    #[arg(long = "dry-run", help = "Print the generation plan without writing")]
    pub dry_run: bool,

    #[arg(
        short = 'y',
        long = "yes",
        help = "Overwrite a non-empty target directory without asking"
    )]
    pub yes: bool,
}

// ── templates ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Directory of template bundles (default: built-in templates)"
    )]
    pub templates: Option<PathBuf>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Listing format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    List,
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `output.format`.
    Get { key: String },
    /// Print the effective configuration as TOML.
    List,
    /// Print the default config file location.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parses_generate_with_flags() {
        let cli = Cli::try_parse_from([
            "factory",
            "-vv",
            "generate",
            "ws.json",
            "--path",
            "out",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.global.verbose, 2);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.workspace, PathBuf::from("ws.json"));
                assert_eq!(args.path, Some(PathBuf::from("out")));
                assert!(args.dry_run);
                assert!(!args.yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["factory", "-q", "-v", "templates"]).is_err());
    }

    #[test]
    fn templates_alias() {
        let cli = Cli::try_parse_from(["factory", "ls", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Templates(TemplatesArgs {
                format: ListFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn generate_requires_workspace_file() {
        let err = Cli::try_parse_from(["factory", "generate"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn command_has_expected_subcommands() {
        let cmd = Cli::command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        for expected in ["generate", "templates", "config", "completions"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }
}
