//! Building search: debounced filter panel + stale-response discard
//!
//! `SearchPanel` turns keystrokes into settled `BuildingFilter`s.
//! `SearchController` runs one fetch per filter, aborting the superseded
//! request and dropping any response that arrives after a newer one started.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use shared::models::BuildingQuery;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::ClientResult;
use crate::debounce::Debouncer;

// =============================================================================
// Filter panel
// =============================================================================

/// Composed filter emitted once typing settles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingFilter {
    pub search: String,
    pub building_type: Option<String>,
}

impl BuildingFilter {
    /// Query for the given page; blank values are omitted
    pub fn to_query(&self, page: u32, limit: u32) -> BuildingQuery {
        let search = self.search.trim();
        BuildingQuery {
            page,
            limit,
            search: (!search.is_empty()).then(|| search.to_string()),
            building_type: self
                .building_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }
}

/// Query text + building type, debounced
pub struct SearchPanel {
    filter: BuildingFilter,
    initial: BuildingFilter,
    /// 首次挂载的值不触发请求
    mounted: bool,
    debouncer: Debouncer<BuildingFilter>,
    settled: mpsc::UnboundedReceiver<BuildingFilter>,
}

impl SearchPanel {
    pub fn new(initial: BuildingFilter, delay: Duration) -> Self {
        let (debouncer, settled) = Debouncer::new(delay);
        debouncer.push(initial.clone());
        Self {
            filter: initial.clone(),
            initial,
            mounted: false,
            debouncer,
            settled,
        }
    }

    pub fn filter(&self) -> &BuildingFilter {
        &self.filter
    }

    pub fn set_query(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.debouncer.push(self.filter.clone());
    }

    pub fn set_type(&mut self, building_type: Option<String>) {
        self.filter.building_type = building_type;
        self.debouncer.push(self.filter.clone());
    }

    /// Wait for the next settled filter.
    ///
    /// The value present at construction is swallowed once, so opening the
    /// panel does not trigger a request by itself.
    pub async fn next_filter(&mut self) -> Option<BuildingFilter> {
        while let Some(filter) = self.settled.recv().await {
            if !self.mounted {
                self.mounted = true;
                if filter == self.initial {
                    continue;
                }
            }
            return Some(filter);
        }
        None
    }
}

// =============================================================================
// Request generations
// =============================================================================

/// Monotonic generation counter shared by all tickets of one controller
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    current: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier ticket
    pub fn begin(&self) -> RequestTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            generation,
            current: self.current.clone(),
        }
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Result of one search request that was still current when it finished
#[derive(Debug)]
pub struct SearchOutcome<T> {
    pub generation: u64,
    pub result: ClientResult<T>,
}

/// Receiving side of a `SearchController`.
///
/// A task can pass its own staleness check just before a newer submit and
/// still enqueue its result, so generations are compared again here.
#[derive(Debug)]
pub struct SearchOutcomes<T> {
    tracker: RequestTracker,
    rx: mpsc::UnboundedReceiver<SearchOutcome<T>>,
}

impl<T> SearchOutcomes<T> {
    /// Next outcome of the latest submitted request. `None` once the
    /// controller is gone.
    pub async fn recv(&mut self) -> Option<SearchOutcome<T>> {
        while let Some(outcome) = self.rx.recv().await {
            if outcome.generation == self.tracker.current() {
                return Some(outcome);
            }
            tracing::debug!(generation = outcome.generation, "Dropping superseded search outcome");
        }
        None
    }
}

/// Runs at most one live search request at a time
pub struct SearchController<T> {
    tracker: RequestTracker,
    in_flight: Option<JoinHandle<()>>,
    outcomes: mpsc::UnboundedSender<SearchOutcome<T>>,
}

impl<T: Send + 'static> SearchController<T> {
    pub fn new() -> (Self, SearchOutcomes<T>) {
        let (outcomes, rx) = mpsc::unbounded_channel();
        let tracker = RequestTracker::new();
        (
            Self {
                tracker: tracker.clone(),
                in_flight: None,
                outcomes,
            },
            SearchOutcomes { tracker, rx },
        )
    }

    /// Start `fetch`, superseding whatever is still running; returns its generation
    pub fn submit<F>(&mut self, fetch: F) -> u64
    where
        F: Future<Output = ClientResult<T>> + Send + 'static,
    {
        if let Some(previous) = self.in_flight.take()
            && !previous.is_finished()
        {
            tracing::debug!("Aborting superseded search request");
            previous.abort();
        }

        let ticket = self.tracker.begin();
        let generation = ticket.generation();
        let outcomes = self.outcomes.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = fetch.await;
            if !ticket.is_current() {
                tracing::debug!(generation, "Discarding stale search response");
                return;
            }
            let _ = outcomes.send(SearchOutcome { generation, result });
        }));
        generation
    }

    pub fn current_generation(&self) -> u64 {
        self.tracker.current()
    }
}

impl<T> Drop for SearchController<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_filter_to_query_skips_blank() {
        let filter = BuildingFilter {
            search: "  ".into(),
            building_type: Some("".into()),
        };
        let query = filter.to_query(1, 10);
        assert_eq!(query.search, None);
        assert_eq!(query.building_type, None);

        let filter = BuildingFilter {
            search: " aula ".into(),
            building_type: Some("AULA".into()),
        };
        let query = filter.to_query(2, 10);
        assert_eq!(query.search.as_deref(), Some("aula"));
        assert_eq!(query.building_type.as_deref(), Some("AULA"));
        assert_eq!(query.page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_value_does_not_emit() {
        let mut panel = SearchPanel::new(BuildingFilter::default(), DELAY);
        tokio::time::sleep(DELAY * 2).await;

        panel.set_query("lab");
        let filter = panel.next_filter().await.unwrap();
        assert_eq!(filter.search, "lab");
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_settles_once() {
        let mut panel = SearchPanel::new(BuildingFilter::default(), DELAY);
        for text in ["a", "au", "aul", "aula"] {
            panel.set_query(text);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panel.set_type(Some("AULA".into()));

        let filter = panel.next_filter().await.unwrap();
        assert_eq!(filter.search, "aula");
        assert_eq!(filter.building_type.as_deref(), Some("AULA"));

        let next = tokio::time::timeout(DELAY * 4, panel.next_filter()).await;
        assert!(next.is_err());
    }

    #[test]
    fn test_old_ticket_is_stale() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(first.is_current());
        let second = tracker.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.generation(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_request_is_dropped() {
        let (mut controller, mut rx) = SearchController::<&'static str>::new();
        controller.submit(async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok("lama")
        });
        let latest = controller.submit(async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok("baru")
        });

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.generation, latest);
        assert_eq!(outcome.result.unwrap(), "baru");

        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(controller);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_outcome_of_older_request_is_skipped() {
        let (mut controller, mut rx) = SearchController::<&'static str>::new();
        let first = controller.submit(async { Ok("lama") });
        // let the first task finish and enqueue its outcome
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(controller.in_flight.as_ref().is_some_and(JoinHandle::is_finished));

        let latest = controller.submit(async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok("baru")
        });
        assert!(latest > first);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.generation, latest);
        assert_eq!(outcome.result.unwrap(), "baru");
    }

    #[tokio::test]
    async fn test_errors_are_delivered() {
        let (mut controller, mut rx) = SearchController::<()>::new();
        controller.submit(async { Err(ClientError::NotFound("gedung".into())) });
        let outcome = rx.recv().await.unwrap();
        assert!(matches!(outcome.result, Err(ClientError::NotFound(_))));
    }
}
