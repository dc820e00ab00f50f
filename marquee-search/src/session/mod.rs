//! Search session: the state container behind a search view.
//!
//! A session is an actor owning the current term, page and view state.
//! Keystrokes go through a [`crate::Debouncer`]; fetches run as separate
//! tasks and report back tagged with a sequence number so only the most
//! recently issued query can change what is shown.

mod actor;
mod commands;
mod handle;
mod state;

pub use actor::spawn_search_session;
pub use commands::SessionCommand;
pub use handle::SessionHandle;
pub use state::ViewState;

/// Errors returned by [`SessionHandle`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The session actor has stopped.
    #[error("Search session has shut down")]
    Shutdown,
}
