//! # Mock Framework & Testing Guide
//!
//! `MockClient<S>` hands out a real `StateClient<S>` whose requests are answered
//! from a queue of expectations instead of a running actor. Domain clients can
//! be unit-tested deterministically, including failure paths that are hard to
//! provoke with real state (closed actors, dropped replies).
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The state itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use brewbytes_actor::mock::MockClient;
//! use brewbytes_actor::{ActorState, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Debug, Default)] struct Till { cents: u64 }
//! #[derive(Debug)] enum TillAction { Ring(u64) }
//! #[derive(Debug, thiserror::Error)] #[error("till")] struct TillError;
//!
//! #[async_trait]
//! impl ActorState for Till {
//!     type Action = TillAction; type ActionResult = u64; type Snapshot = u64;
//!     type Context = (); type Error = TillError;
//!     async fn handle_action(&mut self, _: TillAction, _: &()) -> Result<u64, TillError> { Ok(0) }
//!     fn snapshot(&self) -> u64 { self.cents }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Till>::new();
//!     mock.expect_action().return_ok(250);
//!     mock.expect_snapshot().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.perform_action(TillAction::Ring(250)).await.unwrap(), 250);
//!     assert!(matches!(client.snapshot().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw receiver, or the fluent
//! [`MockClient`] API.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response for it.
enum Expectation<S: ActorState> {
    Action {
        response: Result<S::ActionResult, FrameworkError>,
    },
    Snapshot {
        response: Result<S::Snapshot, FrameworkError>,
    },
}

type Expectations<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that
/// does not match the next expectation panics the mock task, which surfaces in
/// the test as `FrameworkError::ActorDropped`.
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: Expectations<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                if matches!(request, StateRequest::Shutdown) {
                    receiver.close();
                    continue;
                }
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<S> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<S: ActorState> {
    expectations: Expectations<S>,
}

impl<S: ActorState> ActionExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: S::ActionResult) {
        self.push(Ok(result));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(Expectation::Action { response });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: ActorState> {
    expectations: Expectations<S>,
}

impl<S: ActorState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        self.push(Ok(snapshot));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Snapshot, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(Expectation::Snapshot { response });
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it reads requests from `receiver`, asserts on
/// them, and answers through the enclosed responder.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(
    S::Action,
    oneshot::Sender<Result<S::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<oneshot::Sender<Result<S::Snapshot, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug, Default)]
    struct Grinder {
        grams: u32,
    }

    #[derive(Debug, PartialEq)]
    enum GrinderAction {
        Grind(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Grinder error")]
    struct GrinderError;

    #[async_trait]
    impl ActorState for Grinder {
        type Action = GrinderAction;
        type ActionResult = u32;
        type Snapshot = u32;
        type Context = ();
        type Error = GrinderError;

        async fn handle_action(
            &mut self,
            action: GrinderAction,
            _ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            match action {
                GrinderAction::Grind(g) => {
                    self.grams += g;
                    Ok(self.grams)
                }
            }
        }

        fn snapshot(&self) -> u32 {
            self.grams
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Grinder>(10);

        let task = tokio::spawn(async move { client.perform_action(GrinderAction::Grind(18)).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, GrinderAction::Grind(18));
        responder.send(Ok(18)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 18);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Grinder>::new();
        mock.expect_action().return_ok(7);
        mock.expect_snapshot().return_ok(7);

        let client = mock.client();
        assert_eq!(client.perform_action(GrinderAction::Grind(7)).await.unwrap(), 7);
        assert_eq!(client.snapshot().await.unwrap(), 7);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_shutdown_closes_channel() {
        let mock = MockClient::<Grinder>::new();
        let client = mock.client();

        client.shutdown().await;
        while !client.is_closed() {
            tokio::task::yield_now().await;
        }
        assert!(matches!(client.snapshot().await, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_mismatch_drops_reply() {
        let mut mock = MockClient::<Grinder>::new();
        mock.expect_snapshot().return_ok(0);

        let result = mock.client().perform_action(GrinderAction::Grind(1)).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
