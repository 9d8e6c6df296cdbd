//! Mock fetcher for testing

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

use super::SearchQuery;
use super::error::QueryError;
use super::traits::QueryFetcher;
use crate::record::Record;

/// Shared, ordered log of observable events
pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Mock fetcher that answers every query with a predetermined outcome
///
/// Calls are recorded, and when an event log is attached each fetch pushes
/// `fetch:<term>=<value>` so tests can check ordering against setter calls.
#[derive(Debug, Clone)]
pub struct MockFetcher {
    /// Records to return, or a rejection reason
    pub response: Result<Vec<Record>, String>,
    /// Queries received so far
    pub calls: Rc<RefCell<Vec<SearchQuery>>>,
    log: Option<EventLog>,
}

impl MockFetcher {
    /// Create a mock that succeeds with `records`
    #[must_use]
    pub fn returning(records: Vec<Record>) -> Self {
        Self {
            response: Ok(records),
            calls: Rc::default(),
            log: None,
        }
    }

    /// Create a mock that rejects every query
    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            calls: Rc::default(),
            log: None,
        }
    }

    /// Attach an event log
    #[must_use]
    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Number of fetches performed
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl QueryFetcher for MockFetcher {
    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Record>, QueryError> {
        self.calls.borrow_mut().push(query.clone());
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("fetch:{query}"));
        }
        tokio::task::yield_now().await;

        self.response
            .clone()
            .map_err(QueryError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returning() {
        let fetcher = MockFetcher::returning(vec![Record::titled("Vase")]);
        let found = fetcher.fetch(&SearchQuery::new("a", "b")).await.unwrap();

        assert_eq!(found, vec![Record::titled("Vase")]);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let fetcher = MockFetcher::failing("offline");
        let err = fetcher.fetch(&SearchQuery::new("a", "b")).await.unwrap_err();

        assert!(matches!(err, QueryError::Rejected(reason) if reason == "offline"));
    }

    #[tokio::test]
    async fn test_mock_logs_fetch() {
        let log = EventLog::default();
        let fetcher = MockFetcher::returning(vec![]).with_log(Rc::clone(&log));
        fetcher.fetch(&SearchQuery::new("Bronze", "bronze")).await.unwrap();

        assert_eq!(*log.borrow(), vec!["fetch:Bronze=bronze".to_string()]);
    }
}
