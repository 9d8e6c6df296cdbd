//! Shared view state and its owner
//!
//! The loading flag and the current result set belong to a parent
//! [`ViewController`]. The view layer only ever sees [`SearchHandles`], the
//! callbacks that write that state.

mod policy;
mod setter;

pub use policy::{QueryPolicy, QueryTracker, Ticket};
pub use setter::{LoadingSetter, ResultsSetter, SearchHandles, Setter};

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::query::QueryFetcher;
use crate::record::Record;
use crate::view::FeatureView;

/// Externally owned loading flag and result set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub is_loading: bool,
    pub search_results: Vec<Record>,
}

/// Parent controller that owns [`ViewState`] and the featured record
///
/// Setters handed out by [`ViewController::handles`] all write the same
/// state, so every searchable field rendered from one controller shares it.
#[derive(Debug)]
pub struct ViewController {
    state: Rc<RefCell<ViewState>>,
    featured: Option<Record>,
    handles: SearchHandles,
}

impl ViewController {
    /// Create a controller with empty state
    #[must_use]
    pub fn new(policy: QueryPolicy) -> Self {
        let state = Rc::new(RefCell::new(ViewState::default()));

        let loading_state = Rc::clone(&state);
        let set_loading = LoadingSetter::new(move |flag| {
            debug!(loading = flag, "loading state changed");
            loading_state.borrow_mut().is_loading = flag;
        });

        let results_state = Rc::clone(&state);
        let set_results = ResultsSetter::new(move |records: Vec<Record>| {
            debug!(count = records.len(), "search results replaced");
            results_state.borrow_mut().search_results = records;
        });

        let handles =
            SearchHandles::new(set_loading, set_results).with_tracker(QueryTracker::new(policy));

        Self {
            state,
            featured: None,
            handles,
        }
    }

    /// Handles to forward into the view layer
    #[must_use]
    pub fn handles(&self) -> SearchHandles {
        self.handles.clone()
    }

    /// Build a feature view wired to this controller's state
    #[must_use]
    pub fn view(&self, fetcher: Rc<dyn QueryFetcher>) -> FeatureView {
        FeatureView::new(fetcher, self.handles())
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Replace the result set directly (e.g. from an initial page load)
    pub fn set_results(&self, records: Vec<Record>) {
        self.handles.set_results.set(records);
    }

    /// Choose the featured record, or clear it with `None`
    pub fn feature(&mut self, record: Option<Record>) {
        self.featured = record;
    }

    /// Feature the result at `index`; returns whether one was found
    pub fn feature_result(&mut self, index: usize) -> bool {
        let picked = self.state.borrow().search_results.get(index).cloned();
        let found = picked.is_some();
        self.featured = picked;
        found
    }

    #[must_use]
    pub const fn featured(&self) -> Option<&Record> {
        self.featured.as_ref()
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(QueryPolicy::default())
    }
}
