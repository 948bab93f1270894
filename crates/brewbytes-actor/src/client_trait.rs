//! # ActorClient Trait
//!
//! Common interface for domain clients that wrap a generic `StateClient`.
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain-specific clients built on top of a `StateClient`.
///
/// Implementors provide access to the inner client and a mapping from
/// framework errors to their own error type; `snapshot` comes for free.
///
/// # Example
///
/// ```rust
/// use brewbytes_actor::{ActorClient, ActorState, FrameworkError, StateClient};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Default)]
/// struct Till { cents: u64 }
/// #[derive(Debug)] enum TillAction { Ring(u64) }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TillError(String);
///
/// #[async_trait]
/// impl ActorState for Till {
///     type Action = TillAction; type ActionResult = (); type Snapshot = u64;
///     type Context = (); type Error = TillError;
///     async fn handle_action(&mut self, a: TillAction, _: &()) -> Result<(), TillError> {
///         match a { TillAction::Ring(c) => self.cents += c }
///         Ok(())
///     }
///     fn snapshot(&self) -> u64 { self.cents }
/// }
///
/// struct TillClient { inner: StateClient<Till> }
///
/// impl ActorClient<Till> for TillClient {
///     type Error = TillError;
///     fn inner(&self) -> &StateClient<Till> { &self.inner }
///     fn map_error(e: FrameworkError) -> TillError { TillError(e.to_string()) }
/// }
///
/// async fn usage(client: TillClient) {
///     // snapshot() is provided automatically
///     let _total: Result<u64, TillError> = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a consistent snapshot of the state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Stop the actor, even while other clients are still alive.
    #[tracing::instrument(skip(self))]
    async fn shutdown(&self) {
        tracing::debug!("Sending shutdown");
        self.inner().shutdown().await;
    }
}
