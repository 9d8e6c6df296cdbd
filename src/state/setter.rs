//! Callback handles for externally owned state

use std::fmt;
use std::rc::Rc;

use super::policy::QueryTracker;
use crate::record::Record;

/// A cheap-clone callback that writes one piece of shared state
///
/// Two setters are equal only when they are clones of the same handle,
/// which is what lets a re-render with unchanged setters compare equal.
pub struct Setter<T> {
    callback: Rc<dyn Fn(T)>,
}

impl<T> Setter<T> {
    /// Wrap a callback
    pub fn new(callback: impl Fn(T) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback
    pub fn set(&self, value: T) {
        (self.callback)(value);
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T> PartialEq for Setter<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("handle", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

/// Setter for the loading flag
pub type LoadingSetter = Setter<bool>;

/// Setter that replaces the displayed result set wholesale
pub type ResultsSetter = Setter<Vec<Record>>;

/// Handles forwarded verbatim from the feature view to each searchable field
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHandles {
    pub set_loading: LoadingSetter,
    pub set_results: ResultsSetter,
    pub tracker: QueryTracker,
}

impl SearchHandles {
    /// Bundle setters with the default (concurrent) query tracker
    #[must_use]
    pub fn new(set_loading: LoadingSetter, set_results: ResultsSetter) -> Self {
        Self {
            set_loading,
            set_results,
            tracker: QueryTracker::default(),
        }
    }

    /// Replace the query tracker
    #[must_use]
    pub fn with_tracker(mut self, tracker: QueryTracker) -> Self {
        self.tracker = tracker;
        self
    }
}
