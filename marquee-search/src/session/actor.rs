//! Actor implementation for the search session.

use std::sync::Arc;

use marquee_core::SessionConfig;
use tokio::sync::{mpsc, watch};

use super::commands::{FetchSettled, SessionCommand};
use super::handle::SessionHandle;
use super::state::ViewState;
use crate::debounce::Debouncer;
use crate::messages::Localizer;
use crate::pagination;
use crate::service::SearchService;
use crate::types::SearchQuery;

/// Spawns a search session actor and returns its handle.
///
/// The session starts `Idle`. It stops when [`SessionHandle::shutdown`] is
/// called or every handle has been dropped.
///
/// # Examples
/// ```rust,no_run
/// # #[tokio::main]
/// # async fn main() {
/// use std::num::NonZeroUsize;
/// use std::sync::Arc;
///
/// use marquee_core::SessionConfig;
/// use marquee_search::{DevelopmentProvider, MessageCatalog, SearchService, spawn_search_session};
///
/// let service = SearchService::new(
///     Arc::new(DevelopmentProvider::new()),
///     NonZeroUsize::new(64).unwrap(),
/// );
/// let session = spawn_search_session(
///     Arc::new(service),
///     Arc::new(MessageCatalog::english()),
///     &SessionConfig::default(),
/// );
/// session.input("matrix").await.unwrap();
/// # }
/// ```
pub fn spawn_search_session(
    service: Arc<SearchService>,
    localizer: Arc<dyn Localizer>,
    config: &SessionConfig,
) -> SessionHandle {
    let (sender, commands) = mpsc::channel(64);
    let (state_tx, state_rx) = watch::channel(ViewState::Idle);
    let (debounced_tx, debounced) = mpsc::unbounded_channel();
    let (settled_tx, settled) = mpsc::unbounded_channel();

    let session = SearchSession {
        service,
        localizer,
        state: state_tx,
        debouncer: Debouncer::spawn(config.debounce, debounced_tx),
        settled_tx,
        term: String::new(),
        page: 1,
        known_total: None,
        sequence: 0,
    };

    tokio::spawn(session.run(commands, debounced, settled));

    SessionHandle::new(sender, state_rx)
}

/// State owned exclusively by the actor task.
struct SearchSession {
    service: Arc<SearchService>,
    localizer: Arc<dyn Localizer>,
    state: watch::Sender<ViewState>,
    debouncer: Debouncer<String>,
    settled_tx: mpsc::UnboundedSender<FetchSettled>,
    /// Latest debounced term, trimmed
    term: String,
    page: u32,
    /// Total reported for `term`, unknown until a page of it resolves
    known_total: Option<u32>,
    /// Sequence of the most recently issued fetch
    sequence: u64,
}

impl SearchSession {
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<SessionCommand>,
        mut debounced: mpsc::UnboundedReceiver<String>,
        mut settled: mpsc::UnboundedReceiver<FetchSettled>,
    ) {
        loop {
            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        tracing::debug!("All session handles dropped, stopping");
                        return;
                    };
                    if let SessionCommand::Shutdown { responder } = command {
                        // Returning drops the debouncer, which aborts its pending emission
                        tracing::debug!("Search session shutting down");
                        let _ = responder.send(());
                        return;
                    }
                    self.handle_command(command);
                }
                Some(term) = debounced.recv() => self.apply_term(term),
                Some(settlement) = settled.recv() => self.apply_settlement(settlement),
            }
        }
    }

    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Input { term } => {
                // A new term invalidates the page and total of the old one
                self.page = 1;
                self.known_total = None;
                self.debouncer.push(term);
            }
            SessionCommand::NextPage => {
                let next = pagination::next_page(self.page, self.known_total);
                self.change_page(next);
            }
            SessionCommand::PrevPage => {
                let prev = pagination::prev_page(self.page);
                self.change_page(prev);
            }
            SessionCommand::Snapshot { responder } => {
                let _ = responder.send(self.state.borrow().clone());
            }
            // Handled by the run loop
            SessionCommand::Shutdown { .. } => {}
        }
    }

    fn apply_term(&mut self, raw: String) {
        self.term = raw.trim().to_string();
        self.page = 1;
        self.known_total = None;
        tracing::debug!(term = %self.term, "Debounced term settled");
        self.issue_fetch();
    }

    fn change_page(&mut self, page: u32) {
        if self.term.is_empty() {
            tracing::trace!("Ignoring page change without a term");
            return;
        }
        if page == self.page {
            return;
        }

        self.page = page;
        self.issue_fetch();
    }

    /// Starts a fetch for the current term and page, superseding older ones.
    fn issue_fetch(&mut self) {
        self.sequence += 1;
        let query = SearchQuery::new(&self.term, self.page);

        if query.is_blank() {
            self.publish(ViewState::Idle);
            return;
        }

        self.publish(ViewState::Loading {
            query: query.clone(),
        });

        let sequence = self.sequence;
        let service = Arc::clone(&self.service);
        let settled_tx = self.settled_tx.clone();

        tokio::spawn(async move {
            let outcome = service.search(&query).await;
            let _ = settled_tx.send(FetchSettled {
                sequence,
                query,
                outcome,
            });
        });
    }

    fn apply_settlement(&mut self, settlement: FetchSettled) {
        if settlement.sequence != self.sequence {
            tracing::debug!(
                query = %settlement.query,
                sequence = settlement.sequence,
                latest = self.sequence,
                "Discarding stale search response"
            );
            return;
        }

        if let Ok(result) = &settlement.outcome {
            self.known_total = result.total_count;
        }

        let state = ViewState::settle(settlement.query, settlement.outcome, &*self.localizer);
        self.publish(state);
    }

    fn publish(&self, state: ViewState) {
        tracing::debug!(state = state.name(), query = ?state.query(), "View state changed");
        self.state.send_replace(state);
    }
}
