//! Clickable label that re-runs the search
//!
//! Activation follows a fixed sequence:
//!
//! 1. the control's default navigation is suppressed
//! 2. the loading flag is set to `true`
//! 3. the fetch capability runs with `(term, value)`
//! 4. on success the result set is replaced wholesale
//! 5. on failure the error is logged and the results are left untouched
//! 6. the loading flag is set back to `false`
//!
//! Steps 1 and 2 happen synchronously inside [`SearchableField::activate`];
//! steps 3 to 6 run in the returned [`PendingQuery`]. Step 6 also runs if
//! the pending query is dropped before it settles. Overlapping
//! activations are neither deduplicated nor cancelled unless the handles
//! carry a [`QueryPolicy::LatestOnly`](crate::state::QueryPolicy) tracker.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, error, info};

use crate::query::{QueryFetcher, SearchQuery};
use crate::state::{SearchHandles, Ticket};

/// Remainder of an activation, to be awaited on the UI context
pub type PendingQuery = Pin<Box<dyn Future<Output = ()>>>;

/// Click event delivered to a searchable field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activation {
    default_prevented: bool,
}

impl Activation {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Suppress the control's default navigation
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Lowers the loading flag when an activation ends, settled or dropped
///
/// A superseded ticket leaves the flag to the activation that replaced it.
struct LoadingGuard {
    handles: SearchHandles,
    ticket: Ticket,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.handles.tracker.is_current(self.ticket) {
            self.handles.set_loading.set(false);
        }
    }
}

/// A clickable label bound to a `(term, value)` pair
#[derive(Clone)]
pub struct SearchableField {
    query: SearchQuery,
    fetcher: Rc<dyn QueryFetcher>,
    handles: SearchHandles,
}

impl SearchableField {
    /// Create a field; `handles` are the caller's, unchanged
    #[must_use]
    pub fn new(
        term: impl Into<String>,
        value: impl Into<String>,
        fetcher: Rc<dyn QueryFetcher>,
        handles: SearchHandles,
    ) -> Self {
        Self {
            query: SearchQuery::new(term, value),
            fetcher,
            handles,
        }
    }

    /// Visible label
    #[must_use]
    pub fn term(&self) -> &str {
        &self.query.term
    }

    /// Text passed to the backend
    #[must_use]
    pub fn value(&self) -> &str {
        &self.query.value
    }

    #[must_use]
    pub const fn handles(&self) -> &SearchHandles {
        &self.handles
    }

    /// Handle a click
    ///
    /// The loading flag is raised before this returns and before the
    /// query starts. The returned future never fails: a rejected query is
    /// logged and the previous result set stays in place. The loading flag
    /// is lowered exactly once, when the query settles or when the returned
    /// future is dropped, whichever comes first.
    pub fn activate(&self, event: &mut Activation) -> PendingQuery {
        event.prevent_default();
        self.handles.set_loading.set(true);

        let query = self.query.clone();
        let fetcher = Rc::clone(&self.fetcher);
        let guard = LoadingGuard {
            handles: self.handles.clone(),
            ticket: self.handles.tracker.begin(),
        };
        info!(term = %query.term, value = %query.value, "search activated");

        Box::pin(async move {
            let outcome = fetcher.fetch(&query).await;

            if !guard.handles.tracker.is_current(guard.ticket) {
                debug!(%query, "superseded query settled, dropping its outcome");
                return;
            }

            match outcome {
                Ok(records) => {
                    debug!(%query, count = records.len(), "search succeeded");
                    guard.handles.set_results.set(records);
                }
                Err(err) => {
                    error!(%query, error = %err, "search query failed");
                }
            }
            drop(guard);
        })
    }

    /// Activate with a fresh event and wait for the query to settle
    pub async fn click(&self) {
        let mut event = Activation::new();
        self.activate(&mut event).await;
    }
}

impl PartialEq for SearchableField {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query
            && Rc::ptr_eq(&self.fetcher, &other.fetcher)
            && self.handles == other.handles
    }
}

impl fmt::Debug for SearchableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableField")
            .field("term", &self.query.term)
            .field("value", &self.query.value)
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}
