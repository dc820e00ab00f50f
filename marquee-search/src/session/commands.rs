//! Command definitions for the search session actor.

use tokio::sync::oneshot;

use super::state::ViewState;
use crate::errors::SearchError;
use crate::types::{SearchQuery, SearchResult};

/// Commands accepted by the session actor.
#[derive(Debug)]
pub enum SessionCommand {
    /// Raw text of the search field after an edit.
    Input {
        /// Field contents, untrimmed
        term: String,
    },
    /// Move to the next page of the current term.
    NextPage,
    /// Move to the previous page of the current term.
    PrevPage,
    /// Reply with the current view state once earlier commands are applied.
    Snapshot {
        /// Channel receiving the state
        responder: oneshot::Sender<ViewState>,
    },
    /// Stop the actor, discarding any pending debounced input.
    Shutdown {
        /// Signalled once the actor has stopped
        responder: oneshot::Sender<()>,
    },
}

/// Outcome of a spawned fetch, reported back to the actor.
#[derive(Debug)]
pub(super) struct FetchSettled {
    pub sequence: u64,
    pub query: SearchQuery,
    pub outcome: Result<SearchResult, SearchError>,
}
