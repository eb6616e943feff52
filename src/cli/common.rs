//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table (default)
    #[default]
    Human,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// `-o/--output` flag of list and describe commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,
}

/// Arguments shared by every `describe` command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Resource ID
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments shared by every `delete` command
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// One or more resource IDs
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

/// A single positional resource ID
#[derive(Args, Debug)]
pub struct IdArg {
    /// Resource ID
    pub id: String,
}
