use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

/// What a widget renders from: the last good data plus the latest error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryState<T> {
    pub data: Option<T>,
    /// Display message of the most recent failed fetch, cleared on success.
    pub error: Option<String>,
    pub is_fetching: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> QueryState<T> {
    pub fn is_stale_with_error(&self) -> bool {
        self.data.is_some() && self.error.is_some()
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
            updated_at: None,
        }
    }
}

/// Stale-while-revalidate cache for one query key.
///
/// Clones share the same underlying state.
pub struct QueryCache<T> {
    key: &'static str,
    state: Arc<watch::Sender<QueryState<T>>>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> QueryCache<T> {
    pub fn new(key: &'static str) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        Self {
            key,
            state: Arc::new(state),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn snapshot(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.state.subscribe()
    }

    /// Mark a refetch in flight. Existing data stays visible.
    pub fn begin_fetch(&self) {
        self.state.send_modify(|state| state.is_fetching = true);
    }

    /// Record the outcome of a fetch. A failure keeps the previous data.
    pub fn resolve(&self, result: Result<T, String>) {
        self.state.send_modify(|state| {
            state.is_fetching = false;
            match result {
                Ok(data) => {
                    state.data = Some(data);
                    state.error = None;
                    state.updated_at = Some(Utc::now());
                }
                Err(message) => state.error = Some(message),
            }
        });
    }
}
