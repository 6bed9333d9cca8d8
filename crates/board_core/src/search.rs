//! Catalog search
//!
//! Filtering is a plain substring match over names and traits. Keystrokes are
//! debounced: each new query aborts the pending filter task and schedules a
//! fresh one, so only the settled query is ever filtered and published.

use crate::catalog::{Catalog, ChampionRecord, CostTier};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default keystroke settle time
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Champions whose name or any trait contains `query`, case-insensitive.
/// An empty query keeps the whole catalog.
pub fn filter_champions(catalog: &Catalog, query: &str) -> Vec<Arc<ChampionRecord>> {
    let query = query.trim().to_lowercase();
    catalog
        .champions()
        .iter()
        .filter(|c| {
            query.is_empty()
                || c.name.to_lowercase().contains(&query)
                || c.traits.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Rows for the catalog panel: ascending cost, catalog order inside a row.
pub fn group_by_cost(
    champions: &[Arc<ChampionRecord>],
) -> BTreeMap<CostTier, Vec<Arc<ChampionRecord>>> {
    let mut rows: BTreeMap<CostTier, Vec<Arc<ChampionRecord>>> = BTreeMap::new();
    for champ in champions {
        rows.entry(champ.cost).or_default().push(champ.clone());
    }
    rows
}

/// Runs at most one delayed task; scheduling a new one aborts the previous.
///
/// Must be used from inside a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Abort the pending task. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Whether a scheduled task is still waiting or running
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Filter output for one settled query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub champions: Vec<Arc<ChampionRecord>>,
}

/// Debounced catalog filter publishing through a watch channel
pub struct CatalogSearch {
    catalog: Arc<Catalog>,
    debouncer: Debouncer,
    results: Arc<watch::Sender<SearchResults>>,
}

impl CatalogSearch {
    pub fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        let initial =
            SearchResults { query: String::new(), champions: catalog.champions().to_vec() };
        let (tx, _rx) = watch::channel(initial);
        Self { catalog, debouncer: Debouncer::new(delay), results: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchResults> {
        self.results.subscribe()
    }

    /// Last published results
    pub fn current(&self) -> SearchResults {
        self.results.borrow().clone()
    }

    /// A keystroke is still waiting for its results
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Handle a keystroke. Results for `query` are published once it has been
    /// left alone for the debounce delay.
    pub fn on_query(&mut self, query: &str) {
        let query = query.to_string();
        let catalog = Arc::clone(&self.catalog);
        let results = Arc::clone(&self.results);
        self.debouncer.schedule(async move {
            let champions = filter_champions(&catalog, &query);
            tracing::debug!(query = %query, hits = champions.len(), "search settled");
            results.send_replace(SearchResults { query, champions });
        });
    }

    /// Filter immediately, skipping the debounce (e.g. on Enter).
    pub fn flush(&mut self, query: &str) -> SearchResults {
        self.debouncer.cancel();
        let settled = SearchResults {
            query: query.to_string(),
            champions: filter_champions(&self.catalog, query),
        };
        self.results.send_replace(settled.clone());
        settled
    }
}
