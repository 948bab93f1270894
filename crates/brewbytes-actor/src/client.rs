//! # Generic Client
//!
//! The client half of the runtime: a cheap, cloneable handle that forwards
//! requests to a `StateActor` and awaits the reply.

use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StateActor`.
///
/// * **Cloneable**: holds only a sender, so cloning is inexpensive.
/// * **Async API**: every method resolves to `Result<…, FrameworkError>`.
/// * **Lifecycle**: the actor stops once the last clone is dropped.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
}

// Manual impl: deriving would demand `S: Clone`.
impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn perform_action(&self, action: S::Action) -> Result<S::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<S::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Asks the actor to stop once the requests already queued are handled.
    ///
    /// Other clones may still be alive; their later calls fail with
    /// `FrameworkError::ActorClosed`. Stopping an already stopped actor is a no-op.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(StateRequest::Shutdown).await;
    }

    /// Whether the actor behind this client has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
