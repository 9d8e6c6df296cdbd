//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! The command handlers ([`render_record`], [`click_field`],
//! [`search_records`]) live here so they can be driven without a process.
//!
//! - **render**: Render one record of a catalog as HTML or a text outline
//! - **click**: Render a record, activate one of its searchable fields, and
//!   report the resulting search
//! - **search**: Run a `(term, value)` search against a catalog
//! - **config**: Inspect configuration
//!
//! # Examples
//!
//! ```bash
//! featureview render objects.json --index 2 --format html
//! featureview click objects.json --field 0
//! featureview search objects.json --term Bronze
//! featureview config show
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::rc::Rc;

use crate::FeatureError;
use crate::query::{CatalogFetcher, QueryFetcher, SearchQuery};
use crate::record::Record;
use crate::state::{QueryPolicy, ViewController};
use crate::view::{Node, to_html, to_text};

/// Output format for rendered records
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented text outline
    #[default]
    Text,
    /// HTML markup
    Html,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "featureview")]
#[command(about = "Detail view for a featured catalog record", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Disable colored output (overrides config)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a record from a catalog
    #[command(visible_alias = "r")]
    Render {
        /// Catalog JSON file (array of records or `{ records: [...] }`)
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Index of the record to feature
        #[arg(short = 'i', long = "index", default_value_t = 0)]
        index: usize,

        /// Render the empty view instead of a record
        #[arg(long = "empty", conflicts_with = "index")]
        empty: bool,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Activate a searchable field of a rendered record
    #[command(visible_alias = "c")]
    Click {
        /// Catalog JSON file
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Index of the record to feature
        #[arg(short = 'i', long = "index", default_value_t = 0)]
        index: usize,

        /// Searchable field to activate, in document order
        #[arg(long = "field", default_value_t = 0)]
        field: usize,

        /// Feature the first result afterwards and render it
        #[arg(long = "follow")]
        follow: bool,

        /// Output format when following
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Search a catalog by term and value
    #[command(visible_alias = "s")]
    Search {
        /// Catalog JSON file
        #[arg(value_name = "CATALOG")]
        catalog: Option<PathBuf>,

        /// Search term (attribute name or label)
        #[arg(short = 't', long = "term")]
        term: String,

        /// Search value (defaults to the term)
        #[arg(short = 'v', long = "value")]
        value: Option<String>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Outcome of activating a searchable field from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ClickReport {
    /// Label of the activated field
    pub term: String,
    /// Result set once the query settled
    pub results: Vec<Record>,
    /// Rendering of the first result, when following
    pub followed: Option<String>,
}

fn pick(records: &[Record], index: usize) -> Result<&Record, FeatureError> {
    records.get(index).ok_or_else(|| {
        FeatureError::InvalidInput(format!(
            "Record index {index} out of range (catalog has {} records)",
            records.len()
        ))
    })
}

/// Render a tree in the requested format
#[must_use]
pub fn render_tree(tree: &Node, format: OutputFormat, color: bool) -> String {
    match format {
        OutputFormat::Html => to_html(tree),
        OutputFormat::Text => to_text(tree, color),
    }
}

/// Render the record at `index`, or the empty view when `index` is `None`
///
/// # Errors
///
/// Returns `FeatureError::InvalidInput` if `index` is out of range.
///
/// # Examples
///
/// ```
/// use featureview::cli::{OutputFormat, render_record};
/// use featureview::record::Record;
///
/// let records = vec![Record::titled("Vase")];
/// let html = render_record(&records, None, OutputFormat::Html, false).unwrap();
/// assert_eq!(html, r#"<main id="feature"></main>"#);
/// ```
pub fn render_record(
    records: &[Record],
    index: Option<usize>,
    format: OutputFormat,
    color: bool,
) -> Result<String, FeatureError> {
    let featured = index.map(|i| pick(records, i)).transpose()?;

    let controller = ViewController::default();
    let view = controller.view(Rc::new(CatalogFetcher::new(records.to_vec())));
    Ok(render_tree(&view.render(featured), format, color))
}

/// Feature the record at `index`, activate its `field`-th searchable field,
/// and wait for the query to settle
///
/// With `follow` set, the first result is featured and rendered in that
/// format. Searches run against `records` itself.
///
/// # Errors
///
/// Returns `FeatureError::InvalidInput` if `index` or `field` is out of
/// range. A failed query is not an error; the report then carries the
/// unchanged (empty) result set.
pub async fn click_field(
    records: Vec<Record>,
    index: usize,
    field: usize,
    follow: Option<OutputFormat>,
    policy: QueryPolicy,
    color: bool,
) -> Result<ClickReport, FeatureError> {
    let mut controller = ViewController::new(policy);
    controller.feature(Some(pick(&records, index)?.clone()));

    let view = controller.view(Rc::new(CatalogFetcher::new(records)));
    let tree = view.render(controller.featured());
    let searchables = tree.searchables();
    let target = searchables.get(field).ok_or_else(|| {
        FeatureError::InvalidInput(format!(
            "Field {field} out of range (record has {} searchable fields)",
            searchables.len()
        ))
    })?;

    let term = target.term().to_string();
    target.click().await;
    let results = controller.snapshot().search_results;

    let followed = match follow {
        Some(format) if controller.feature_result(0) => {
            Some(render_tree(&view.render(controller.featured()), format, color))
        }
        _ => None,
    };

    Ok(ClickReport {
        term,
        results,
        followed,
    })
}

/// Search `records` by term, with the value defaulting to the term
///
/// # Errors
///
/// Returns `FeatureError::QueryError` if the query is rejected.
pub async fn search_records(
    records: Vec<Record>,
    term: String,
    value: Option<String>,
) -> Result<Vec<Record>, FeatureError> {
    let value = value.unwrap_or_else(|| term.clone());
    let fetcher = CatalogFetcher::new(records);
    Ok(fetcher.fetch(&SearchQuery::new(term, value)).await?)
}
