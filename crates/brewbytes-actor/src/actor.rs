//! # State Actor
//!
//! This module defines the `StateActor`, the server half of the runtime. It owns
//! a single aggregate and processes requests sequentially, so the aggregate is
//! never observed or mutated concurrently.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one `ActorState` value.
///
/// **Concurrency Model**:
/// Writers and readers share one bounded channel. The actor handles one
/// request at a time inside its own Tokio task, so there is no `Mutex` around
/// the state; exclusive ownership inside the task is the lock.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new(state, buffer)` returns the actor and a client.
/// 2.  **Wire**: pass the runtime context to `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use brewbytes_actor::{ActorState, StateActor};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Default)]
/// struct Counter { value: u32 }
///
/// #[derive(Debug)]
/// enum CounterAction { Add(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// #[async_trait]
/// impl ActorState for Counter {
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Snapshot = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u32, CounterError> {
///         match action { CounterAction::Add(n) => { self.value += n; Ok(self.value) } }
///     }
///
///     fn snapshot(&self) -> u32 { self.value }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Counter::default(), 10);
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.perform_action(CounterAction::Add(2)).await.unwrap(), 2);
///     assert_eq!(client.snapshot().await.unwrap(), 2);
/// }
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for space.
    pub fn new(state: S, buffer_size: usize) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped or a
    /// client calls [`StateClient::shutdown`].
    ///
    /// Returns the final state so callers can inspect it after shutdown.
    pub async fn run(mut self, context: S::Context) -> S {
        // Extract just the type name (e.g., "CafeFloor" instead of "brewbytes::floor::CafeFloor")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(state_type, error = %e, "on_start failed");
        }

        let mut processed: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            processed += 1;
            match msg {
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(FrameworkError::entity);
                    match &result {
                        Ok(_) => debug!(state_type, "Action ok"),
                        Err(e) => warn!(state_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                StateRequest::Shutdown => {
                    info!(state_type, "Shutdown requested");
                    // Rejects new sends; requests already queued are still drained.
                    self.receiver.close();
                }
            }
        }

        info!(state_type, processed, "Shutdown");
        self.state
    }
}
