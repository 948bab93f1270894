//! # BrewBytes
//!
//! Café order assignment and lifecycle engine.
//!
//! Orders are assigned to the least-loaded waiter, workload decays on a fixed
//! tick, and orders complete once their prep time has elapsed. All mutable
//! state lives in one actor ([`floor_actor`]); everything else talks to it
//! through [`clients::CafeClient`].
//!
//! ## Core Components
//!
//! - **[model]**: plain records (`Waiter`, `Order`, `MenuItem`) and their tags.
//! - **[roster]**, **[ledger]**, **[catalog]**: the three pieces of floor state.
//! - **[assignment]**: the least-loaded assignment rule.
//! - **[ranking]**, **[stats]**: read-side views over a snapshot.
//! - **[floor_actor]**: the aggregate and its `ActorState` implementation.
//! - **[ticker]**: the periodic decay + completion driver.
//! - **[lifecycle]**: startup and graceful shutdown.
//!
//! ## Testing
//!
//! Inject a [`clock::ManualClock`] through
//! [`lifecycle::CafeSystem::start_with_clock`] to control order timestamps,
//! and see [`brewbytes_actor::mock`] for testing clients without an actor.

pub mod assignment;
pub mod catalog;
pub mod cli;
pub mod clients;
pub mod clock;
pub mod config;
pub mod error;
pub mod floor_actor;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod ranking;
pub mod roster;
pub mod stats;
pub mod ticker;

pub use error::CafeError;
