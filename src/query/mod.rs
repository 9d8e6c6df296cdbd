//! Search queries and the fetch capability
//!
//! A [`SearchQuery`] is the `(term, value)` pair submitted when a searchable
//! field is activated. The view never talks to a backend directly; it goes
//! through a [`QueryFetcher`] supplied by the caller.
//!
//! # Backends
//!
//! - **`CatalogFetcher`** - Offline search over an in-memory record list
//! - **`MockFetcher`** - Canned responses for tests (test builds only)

mod catalog;
pub mod error;
mod traits;

#[cfg(test)]
pub mod mock;

pub use catalog::CatalogFetcher;
pub use error::QueryError;
pub use traits::QueryFetcher;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(term, value)` pair submitted on activation of a searchable field
///
/// `term` is the label shown to the user, `value` is what the backend
/// searches for. In current usage both carry the field's text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub value: String,
}

impl SearchQuery {
    /// Create a new query
    #[must_use]
    pub fn new(term: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.term, self.value)
    }
}
