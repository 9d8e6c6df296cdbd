//! Featureview CLI application entry point
//!
//! Loads a catalog of records, renders the featured one, and drives the
//! searchable-field flow against an offline catalog backend.
//!
//! # Usage
//!
//! ```bash
//! # Render the first record as a text outline
//! featureview render objects.json
//!
//! # Render the third record as HTML
//! featureview render objects.json -i 2 -f html
//!
//! # Click the first searchable field (culture) and feature the first hit
//! featureview click objects.json --field 0 --follow
//!
//! # Search directly
//! featureview search objects.json -t medium -v bronze
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/featureview/config.toml` on Linux). `RUST_LOG` overrides the
//! configured log filter.

use colored::Colorize;
use featureview::{
    FeatureError,
    cli::{self, Cli, Commands, ConfigCommands},
    config::FeatureConfig,
    record::{self, Record, text},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FeatureError>;

fn init_tracing(config: &FeatureConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load the catalog named on the command line, or the configured default
fn load_catalog(arg: Option<PathBuf>, config: &FeatureConfig) -> Result<Vec<Record>> {
    let path = arg.or_else(|| config.catalog.clone()).ok_or_else(|| {
        FeatureError::InvalidInput(
            "No catalog given and no default catalog configured".to_string(),
        )
    })?;
    Ok(record::load_records(path)?)
}

fn print_results(records: &[Record], quiet: bool, color: bool) {
    if !quiet {
        let summary = format!("{} result(s)", records.len());
        println!("{}", if color { summary.green().to_string() } else { summary });
    }
    for record in records {
        println!("{}", text(&record.title));
    }
}

fn handle_config_command(command: &ConfigCommands, config: &FeatureConfig) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| {
                FeatureError::InvalidInput(format!("Failed to serialize config: {e}"))
            })?;
            print!("{rendered}");
        }
        ConfigCommands::Path => println!("{}", FeatureConfig::config_path()?.display()),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = FeatureConfig::load()?;

    let cli = Cli::parse_args();
    init_tracing(&config);

    let color = config.color && !cli.no_color;

    match cli.command {
        Commands::Render {
            catalog,
            index,
            empty,
            format,
        } => {
            let records = load_catalog(catalog, &config)?;
            let index = (!empty).then_some(index);
            println!("{}", cli::render_record(&records, index, format, color)?);
        }
        Commands::Click {
            catalog,
            index,
            field,
            follow,
            format,
        } => {
            let records = load_catalog(catalog, &config)?;
            let follow = follow.then_some(format);
            let report =
                cli::click_field(records, index, field, follow, config.query_policy, color).await?;

            if !cli.quiet {
                println!("Searched for {}", report.term);
            }
            print_results(&report.results, cli.quiet, color);
            if let Some(rendered) = report.followed {
                println!("{rendered}");
            }
        }
        Commands::Search {
            catalog,
            term,
            value,
        } => {
            let records = load_catalog(catalog, &config)?;
            let found = cli::search_records(records, term, value).await?;
            print_results(&found, cli.quiet, color);
        }
        Commands::Config(command) => handle_config_command(&command, &config)?,
    }

    Ok(())
}
