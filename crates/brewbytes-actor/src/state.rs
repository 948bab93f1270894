//! # ActorState Trait
//!
//! The `ActorState` trait is the contract for any aggregate owned by a
//! [`StateActor`](crate::StateActor). The actor holds exactly one value of the
//! implementing type and funnels every mutation through
//! [`ActorState::handle_action`], one request at a time.
//!
//! # Architecture Note
//! Associated types keep the wire between client and actor typed end to end:
//! the actions a state accepts, the result each action produces, the read-only
//! snapshot handed to readers, the injected runtime context and the error type.
//! A client for one state cannot send another state's actions; the compiler
//! rejects it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorState::on_start`] runs once before the first request is processed.
//!
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any aggregate must implement to be owned by a `StateActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await. The `Context` is passed to
/// `run()` rather than `new()`, which lets dependencies (clocks, other clients)
/// be bound late, after the actor and its client exist.
#[async_trait]
pub trait ActorState: Send + 'static {
    /// Enum of state-changing operations accepted by this state.
    type Action: Send + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Debug;

    /// Consistent copy of the state handed out to readers.
    type Snapshot: Clone + Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per state, not one per action. Clients match on a single
    /// type; the price is that every action's signature admits every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once, before the first request, with the injected context.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one action to the state.
    ///
    /// A returned error must leave the state unchanged.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Produce a copy-on-read snapshot of the current state.
    fn snapshot(&self) -> Self::Snapshot;
}
