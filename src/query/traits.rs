//! Fetch capability trait

use async_trait::async_trait;

use super::SearchQuery;
use super::error::QueryError;
use crate::record::Record;

/// Trait for search backends
///
/// Implementations run on the same single-threaded execution context as
/// the view, so the returned futures are not required to be `Send`. The
/// fetch call is the only suspension point of an activation.
#[async_trait(?Send)]
pub trait QueryFetcher {
    /// Run a query and return the matching records
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the backend rejects the query or its
    /// response cannot be interpreted.
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Record>, QueryError>;
}
