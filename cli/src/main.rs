//! CLI entrypoint for festa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use festa_application::{PartySource, RenderPartyInput, RenderPartyUseCase};
use festa_domain::{DocumentSelection, OutputFormat};
use festa_infrastructure::{ConfigLoader, ConfigPartySource, FilePartySource};
use festa_presentation::{Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    // CLI flags win over config, config over built-in defaults
    let documents: DocumentSelection = cli
        .documents
        .map(Into::into)
        .or(config.output.documents)
        .unwrap_or_default();
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let source: Arc<dyn PartySource> = match &cli.party {
        Some(path) => Arc::new(FilePartySource::new(path)),
        None if config.party.host_name.trim().is_empty() => {
            bail!("No party given. Use --party <file> or add a [party] section to festa.toml.")
        }
        None => Arc::new(ConfigPartySource::from_config(&config)),
    };

    info!("Rendering {:?} as {:?}", documents, format);

    if !cli.quiet {
        eprintln!("{}", ConsoleFormatter::header("festa"));
    }

    let use_case = RenderPartyUseCase::new(source);
    let output = use_case.execute(RenderPartyInput::new(documents))?;

    let rendered = match format {
        OutputFormat::Text => ConsoleFormatter::format_text(&output),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
    };

    println!("{}", rendered);

    if !cli.quiet {
        eprintln!("{}", ConsoleFormatter::summary(&output));
    }

    Ok(())
}
