//! # Generic Messages
//!
//! Message types exchanged between a `StateClient` and its `StateActor`.

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `StateActor`.
///
/// Writers send `Action`; readers send `Snapshot`. Both travel on the same
/// channel, so a snapshot always reflects every action that was queued ahead
/// of it and never a partially applied one. `Shutdown` closes the queue: the
/// actor finishes what is already queued, then stops even if clients remain.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
    Shutdown,
}
