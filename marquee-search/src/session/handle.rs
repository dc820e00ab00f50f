//! Handle for communicating with a search session actor.

use tokio::sync::{mpsc, oneshot, watch};

use super::SessionError;
use super::commands::SessionCommand;
use super::state::ViewState;

/// Cloneable handle to a running search session.
///
/// Commands are queued to the actor; view state is observed through a
/// `watch` channel, so renderers can either poll [`SessionHandle::current`]
/// or await changes on [`SessionHandle::subscribe`].
#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionCommand>,
    state: watch::Receiver<ViewState>,
}

impl SessionHandle {
    pub(super) fn new(
        sender: mpsc::Sender<SessionCommand>,
        state: watch::Receiver<ViewState>,
    ) -> Self {
        Self { sender, state }
    }

    /// Reports the new contents of the search field.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor has stopped
    pub async fn input(&self, term: impl Into<String>) -> Result<(), SessionError> {
        self.send(SessionCommand::Input { term: term.into() }).await
    }

    /// Requests the next page of the current term.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor has stopped
    pub async fn next_page(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::NextPage).await
    }

    /// Requests the previous page of the current term.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor has stopped
    pub async fn prev_page(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::PrevPage).await
    }

    /// View state after every previously sent command has been applied.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor has stopped
    pub async fn snapshot(&self) -> Result<ViewState, SessionError> {
        let (responder, rx) = oneshot::channel();
        self.send(SessionCommand::Snapshot { responder }).await?;
        rx.await.map_err(|_| SessionError::Shutdown)
    }

    /// Last published view state, without waiting on the actor.
    pub fn current(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    /// Stops the session; pending debounced input is discarded.
    ///
    /// # Errors
    /// - `SessionError::Shutdown` - Session actor had already stopped
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        let (responder, rx) = oneshot::channel();
        self.send(SessionCommand::Shutdown { responder }).await?;
        rx.await.map_err(|_| SessionError::Shutdown)
    }

    async fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| SessionError::Shutdown)
    }
}
