pub mod cli;
pub mod toml_config;

use crate::core::report::DEFAULT_NAME_MARGIN;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub use crate::domain::model::OutputFormat;

pub const MAX_NAME_MARGIN: usize = 40;

#[derive(Debug, Clone, Parser)]
#[command(name = "gpa-report")]
#[command(about = "Compute per-student GPAs from a course roster and print a ranked report")]
pub struct CliConfig {
    /// Roster file, one `DEPT NUM SECTION CREDITS FIRST LAST GRADE` record per line
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Optional TOML file with a [report] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Spaces added after the longest name in the table
    #[arg(long)]
    pub name_margin: Option<usize>,

    /// Do not print the error log
    #[arg(long)]
    pub no_errors: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

/// Fully resolved run configuration: CLI flags win over the TOML file, which
/// wins over the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: String,
    pub format: OutputFormat,
    pub name_margin: usize,
    pub show_errors: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let report = file.and_then(|f| f.report.as_ref());

        Self {
            input: cli.input.clone(),
            format: cli
                .format
                .or_else(|| report.and_then(|r| r.format))
                .unwrap_or_default(),
            name_margin: cli
                .name_margin
                .or_else(|| report.and_then(|r| r.name_margin))
                .unwrap_or(DEFAULT_NAME_MARGIN),
            show_errors: !cli.no_errors && report.and_then(|r| r.show_errors).unwrap_or(true),
        }
    }

    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = cli
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;
        Ok(Self::resolve(cli, file.as_ref()))
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_range("name_margin", self.name_margin, 1, MAX_NAME_MARGIN)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn name_margin(&self) -> usize {
        self.name_margin
    }

    fn show_errors(&self) -> bool {
        self.show_errors
    }
}
