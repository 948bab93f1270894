//! # BrewBytes Actor Runtime
//!
//! Building blocks for running one stateful aggregate behind a message queue.
//! A [`StateActor`] owns the state; any number of cloneable [`StateClient`]s
//! talk to it over a bounded Tokio channel.
//!
//! ## Why a single-owner actor?
//!
//! - **Serialized writes**: every action runs to completion before the next
//!   one starts, so multi-step mutations look atomic to everyone else.
//! - **Consistent reads**: snapshots are queued behind pending actions and are
//!   cloned out of the actor (copy-on-read), so readers never see a half-applied
//!   change and never hold a lock.
//! - **No shared mutable state**: the state lives inside one task; there is no
//!   `Arc<Mutex<_>>` to forget to lock.
//!
//! ## Layers
//!
//! 1. **State Layer** ([`ActorState`]) - the domain aggregate and its actions
//! 2. **Runtime Layer** ([`StateActor`]) - message processing and concurrency
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]) - typed requests
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at
//! construction time. Tests inject a manual clock where production injects the
//! system clock, with no change to the state type.
//!
//! ## Testing
//!
//! See the [`mock`] module for a client that answers from canned expectations.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
