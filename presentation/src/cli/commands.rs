//! CLI command definitions

use clap::{Parser, ValueEnum};
use festa_domain::{DocumentSelection, OutputFormat as DomainOutputFormat};
use std::path::PathBuf;

/// Output format for rendered party text
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The rendered text blocks
    Text,
    /// JSON object with the rendered blocks
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// Documents to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Documents {
    /// Only the invitation
    Invitation,
    /// Only the buffet/music preference sheet
    Preferences,
    /// Invitation followed by preferences
    All,
}

impl From<Documents> for DocumentSelection {
    fn from(documents: Documents) -> Self {
        match documents {
            Documents::Invitation => DocumentSelection::Invitation,
            Documents::Preferences => DocumentSelection::Preferences,
            Documents::All => DocumentSelection::All,
        }
    }
}

/// CLI arguments for festa
#[derive(Parser, Debug)]
#[command(name = "festa")]
#[command(author, version, about = "Render party invitations and preference sheets")]
#[command(long_about = r#"
festa renders a party record into the invitation sent to guests and the
buffet/music preference sheet.

The party is read from --party <file> (.toml or .json), or from the [party]
section of the configuration.

Configuration files are loaded from (in priority order):
1. FESTA_* environment variables (e.g. FESTA_PARTY__HOST_NAME=Ana)
2. --config <path>     Explicit config file
3. ./festa.toml        Project-level config
4. ~/.config/festa/config.toml   Global config

Example:
  festa --party ana.toml
  festa --party ana.json -d preferences -o json
"#)]
pub struct Cli {
    /// Party file to render (.toml or .json)
    #[arg(short, long, value_name = "PATH")]
    pub party: Option<PathBuf>,

    /// Documents to render [default: all]
    #[arg(short, long, value_enum)]
    pub documents: Option<Documents>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and summary on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
