//! Policy for overlapping queries
//!
//! Under [`QueryPolicy::Concurrent`] every activation runs to completion and
//! the last one to finish wins. [`QueryPolicy::LatestOnly`] is an opt-in
//! relaxation of that race: each activation takes a ticket from a shared
//! generation counter and completions of superseded tickets are dropped
//! without touching either setter.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// How overlapping activations are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryPolicy {
    /// Every activation publishes its results; last completion wins
    #[default]
    Concurrent,
    /// Only the most recent activation publishes
    LatestOnly,
}

impl QueryPolicy {
    /// Convert to the config file spelling
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Concurrent => "concurrent",
            Self::LatestOnly => "latest-only",
        }
    }
}

impl fmt::Display for QueryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Proof of one activation, checked when its fetch settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared tracker of in-flight activations
#[derive(Debug, Clone, Default)]
pub struct QueryTracker {
    policy: QueryPolicy,
    generation: Rc<Cell<u64>>,
}

impl QueryTracker {
    /// Create a tracker for the given policy
    #[must_use]
    pub fn new(policy: QueryPolicy) -> Self {
        Self {
            policy,
            generation: Rc::default(),
        }
    }

    #[must_use]
    pub const fn policy(&self) -> QueryPolicy {
        self.policy
    }

    /// Register a new activation and make it the latest
    pub fn begin(&self) -> Ticket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        Ticket(next)
    }

    /// Whether a settled activation may still publish
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        match self.policy {
            QueryPolicy::Concurrent => true,
            QueryPolicy::LatestOnly => self.generation.get() == ticket.0,
        }
    }
}

impl PartialEq for QueryTracker {
    fn eq(&self, other: &Self) -> bool {
        self.policy == other.policy && Rc::ptr_eq(&self.generation, &other.generation)
    }
}
