//! CLI argument types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::templates::Template;

/// Sonador: beatmap diffusion training manifests
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sonador")]
#[command(version)]
#[command(about = "Manifest tooling for beatmap diffusion training runs")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write a starter training manifest
    Init(InitArgs),

    /// Validate a manifest without training
    Validate(ValidateArgs),

    /// Display the resolved manifest
    Info(InfoArgs),
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Destination path for the manifest
    #[arg(value_name = "PATH", default_value = "train.yaml")]
    pub path: PathBuf,

    /// Starter template (default, smoke)
    #[arg(short, long, default_value = "default")]
    pub template: TemplateArg,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the manifest file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show a configuration summary after validating
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to the manifest file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Template selector for the init command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TemplateArg {
    #[default]
    Default,
    Smoke,
}

impl TemplateArg {
    /// The template this argument selects
    pub fn template(self) -> Template {
        match self {
            TemplateArg::Default => Template::Default,
            TemplateArg::Smoke => Template::Smoke,
        }
    }
}

impl std::str::FromStr for TemplateArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(TemplateArg::Default),
            "smoke" => Ok(TemplateArg::Smoke),
            _ => Err(format!("Unknown template: {s}. Valid templates: default, smoke")),
        }
    }
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json, yaml")),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_init_defaults() {
        let cli = parse_args(["sonador", "init"]).expect("should parse");
        match cli.command {
            Command::Init(args) => {
                assert_eq!(args.path, PathBuf::from("train.yaml"));
                assert_eq!(args.template, TemplateArg::Default);
                assert!(!args.force);
            }
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_init_smoke_template() {
        let cli =
            parse_args(["sonador", "init", "smoke.yaml", "--template", "smoke"]).expect("parse");
        match cli.command {
            Command::Init(args) => assert_eq!(args.template, TemplateArg::Smoke),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_validate_detailed() {
        let cli = parse_args(["sonador", "validate", "train.yaml", "-d"]).expect("parse");
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.config, PathBuf::from("train.yaml"));
                assert!(args.detailed);
            }
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_info_format() {
        let cli =
            parse_args(["sonador", "info", "train.yaml", "--format", "json"]).expect("parse");
        match cli.command {
            Command::Info(args) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("expected info, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(parse_args(["sonador", "info", "train.yaml", "--format", "toml"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["sonador", "validate", "x.yaml", "--verbose"]).expect("parse");
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
