use std::sync::Arc;

use bookverse_catalog::{CatalogClient, SearchQuery};
use bookverse_types::{SearchPage, ViewMode};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::state::{RequestOutcome, SearchState};

/// Owns the query, page and view mode of one search front end and keeps at
/// most one catalog request in flight for them.
///
/// Every change of query, page or view mode cancels the current request and,
/// when the new state calls for it, starts another. Requests run on spawned
/// tasks and report back through a channel; [`SearchSession::settle`] applies
/// their results. Each request carries a sequence number and only the latest
/// one is ever applied, so a response that was already on its way when its
/// request got cancelled is dropped.
///
/// Methods that can start a request must be called from within a tokio
/// runtime. Dropping the session cancels its request.
pub struct SearchSession {
    catalog: Arc<dyn CatalogClient>,
    state: SearchState,
    last_seq: u64,
    in_flight: Option<InFlight>,
    settled_tx: mpsc::UnboundedSender<Settlement>,
    settled_rx: mpsc::UnboundedReceiver<Settlement>,
}

struct InFlight {
    seq: u64,
    query: SearchQuery,
    handle: JoinHandle<()>,
}

struct Settlement {
    seq: u64,
    outcome: Outcome,
}

enum Outcome {
    Completed(bookverse_catalog::Result<SearchPage>),
    /// The request task ended without producing a result.
    Aborted,
}

/// Reports an aborted outcome if the request task is dropped before it
/// completes, so a panicking client cannot leave the session waiting.
struct SettleGuard {
    seq: u64,
    tx: Option<mpsc::UnboundedSender<Settlement>>,
}

impl SettleGuard {
    fn complete(mut self, result: bookverse_catalog::Result<SearchPage>) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Settlement {
                seq: self.seq,
                outcome: Outcome::Completed(result),
            });
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Settlement {
                seq: self.seq,
                outcome: Outcome::Aborted,
            });
        }
    }
}

impl SearchSession {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            state: SearchState::default(),
            last_seq: 0,
            in_flight: None,
            settled_tx,
            settled_rx,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Sequence number of the request currently in flight.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|request| request.seq)
    }

    /// Replace the query text and go back to the first page.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| {
            state.query = text;
            state.page = 1;
        });
    }

    /// Like [`set_query`](Self::set_query), and also switch back to the
    /// search results view.
    pub fn enter_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| {
            state.query = text;
            state.page = 1;
            state.view_mode = ViewMode::Search;
        });
    }

    /// Enter a query and open it at `page` with a single fetch.
    ///
    /// Page `0` is treated as page `1`.
    pub fn open_query(&mut self, text: impl Into<String>, page: u32) {
        let text = text.into();
        self.update(|state| {
            state.query = text;
            state.page = page.max(1);
            state.view_mode = ViewMode::Search;
        });
    }

    /// Jump to `page`. Page `0` is treated as page `1`.
    pub fn set_page(&mut self, page: u32) {
        self.update(|state| state.page = page.max(1));
    }

    /// Move to the next page if the last results report one.
    pub fn next_page(&mut self) -> bool {
        if !self.state.has_next_page() {
            return false;
        }
        let page = self.state.page.saturating_add(1);
        self.set_page(page);
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.state.has_previous_page() {
            return false;
        }
        let page = self.state.page - 1;
        self.set_page(page);
        true
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.update(|state| state.view_mode = mode);
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        let mode = self.state.view_mode.toggled();
        self.set_view_mode(mode);
        mode
    }

    /// Cancel the request in flight, if any.
    ///
    /// # Returns
    /// The sequence number of the cancelled request
    pub fn cancel(&mut self) -> Option<u64> {
        let request = self.in_flight.take()?;
        request.handle.abort();
        self.state.is_loading = false;
        tracing::debug!(
            "Cancelled search #{} for {:?} page {}",
            request.seq,
            request.query.title(),
            request.query.page()
        );
        Some(request.seq)
    }

    /// Wait for the request in flight to settle and apply its result.
    ///
    /// Settlements of superseded requests are skipped. Returns `None` right
    /// away when nothing is in flight. Cancel safe: dropping the future before
    /// it completes loses nothing.
    pub async fn settle(&mut self) -> Option<RequestOutcome> {
        while self.in_flight.is_some() {
            let settlement = self.settled_rx.recv().await?;
            if let Some(outcome) = self.reconcile(settlement) {
                return Some(outcome);
            }
        }
        None
    }

    fn update(&mut self, change: impl FnOnce(&mut SearchState)) {
        let before = (
            self.state.query.clone(),
            self.state.page,
            self.state.view_mode,
        );
        change(&mut self.state);

        let unchanged = before.0 == self.state.query
            && before.1 == self.state.page
            && before.2 == self.state.view_mode;
        if !unchanged {
            self.reevaluate();
        }
    }

    fn reevaluate(&mut self) {
        self.cancel();

        if !self.state.wants_fetch() {
            self.state.results.clear();
            self.state.total_found = 0;
            return;
        }

        let query = SearchQuery::new(&self.state.query, self.state.page);
        self.start(query);
    }

    fn start(&mut self, query: SearchQuery) {
        self.last_seq += 1;
        let seq = self.last_seq;

        self.state.is_loading = true;
        self.state.last_error = None;

        tracing::debug!(
            "Starting search #{} for {:?} page {} (offset {})",
            seq,
            query.title(),
            query.page(),
            query.offset()
        );

        let catalog = Arc::clone(&self.catalog);
        let guard = SettleGuard {
            seq,
            tx: Some(self.settled_tx.clone()),
        };
        let task_query = query.clone();
        let handle = tokio::spawn(async move {
            let result = catalog.search(&task_query).await;
            guard.complete(result);
        });

        self.in_flight = Some(InFlight { seq, query, handle });
    }

    fn reconcile(&mut self, settlement: Settlement) -> Option<RequestOutcome> {
        if self.in_flight() != Some(settlement.seq) {
            tracing::debug!("Discarding settlement of superseded search #{}", settlement.seq);
            return None;
        }

        let request = self.in_flight.take()?;
        self.state.is_loading = false;

        let outcome = match settlement.outcome {
            Outcome::Completed(Ok(page)) => {
                self.state.results = page.docs;
                self.state.total_found = page.num_found;
                tracing::info!(
                    "Search #{} for {:?} page {} returned {} of {} records",
                    request.seq,
                    request.query.title(),
                    request.query.page(),
                    self.state.results.len(),
                    self.state.total_found
                );
                RequestOutcome::Resolved {
                    seq: request.seq,
                    count: self.state.results.len(),
                    total_found: self.state.total_found,
                }
            }
            Outcome::Completed(Err(e)) => {
                tracing::warn!("Search #{} failed: {}", request.seq, e);
                self.fail(request.seq, e.to_string())
            }
            Outcome::Aborted => {
                tracing::warn!("Search #{} ended without a response", request.seq);
                self.fail(request.seq, "Search request was interrupted".to_string())
            }
        };

        Some(outcome)
    }

    fn fail(&mut self, seq: u64, message: String) -> RequestOutcome {
        self.state.last_error = Some(message.clone());
        RequestOutcome::Failed { seq, message }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
