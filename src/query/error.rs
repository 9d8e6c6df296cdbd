//! Query failure types
//!
//! Every failure of the fetch capability is a query failure. The view layer
//! catches these at the searchable-field boundary and only logs them.
//!
//! # Error Types
//!
//! - **`Rejected`**: The backend refused the query
//! - **`Catalog`**: A local catalog could not be loaded

use thiserror::Error;

/// Failure of the fetch capability
#[derive(Debug, Error)]
pub enum QueryError {
    /// The backend rejected the query
    #[error("Query rejected: {0}")]
    Rejected(String),

    /// A local catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::record::RecordError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
