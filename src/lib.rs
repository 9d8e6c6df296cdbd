//! Featureview - detail view for a featured catalog record
//!
//! This library renders one catalog record (e.g. a museum object) as a tree
//! of named display regions and lets the viewer re-run a search by clicking
//! culture, technique, medium, or people values.
//!
//! - [`record`]: the record model and catalog loading
//! - [`query`]: the fetch capability and query failures
//! - [`state`]: externally owned view state and the setters that write it
//! - [`view`]: the feature view, searchable fields, and renderers

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod query;
pub mod record;
pub mod state;
pub mod view;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Catalog could not be loaded
    #[error("Record error: {0}")]
    RecordError(#[from] record::RecordError),
    /// Query backend error
    #[error("Query error: {0}")]
    QueryError(#[from] query::QueryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
