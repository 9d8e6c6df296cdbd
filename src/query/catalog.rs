//! Offline search backend over a local record list

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::SearchQuery;
use super::error::QueryError;
use super::traits::QueryFetcher;
use crate::record::{self, Record};

/// Fetcher that answers queries from an in-memory catalog
///
/// Matching follows [`Record::matches`]. An optional latency simulates a
/// slow backend so overlapping activations can be exercised.
#[derive(Debug, Clone, Default)]
pub struct CatalogFetcher {
    records: Vec<Record>,
    latency: Option<Duration>,
}

impl CatalogFetcher {
    /// Create a fetcher over the given records
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            latency: None,
        }
    }

    /// Load the catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Catalog` if the file cannot be loaded.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        Ok(Self::new(record::load_records(path)?))
    }

    /// Delay every answer by `latency`
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// All records in the catalog
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[async_trait(?Send)]
impl QueryFetcher for CatalogFetcher {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Record>, QueryError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let found: Vec<Record> = self
            .records
            .iter()
            .filter(|r| r.matches(&query.term, &query.value))
            .cloned()
            .collect();

        debug!(%query, matched = found.len(), total = self.records.len(), "catalog search");
        Ok(found)
    }
}
