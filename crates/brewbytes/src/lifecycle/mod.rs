//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the café: the floor actor, its client and the
//! tick scheduler.
//!
//! ## Startup
//!
//! 1. **Validate** the [`CafeConfig`](crate::config::CafeConfig); configuration
//!    faults stop startup here.
//! 2. **Create** the floor actor and its client.
//! 3. **Inject** the clock via `run(clock)` and spawn the actor.
//! 4. **Start** the ticker with a clone of the client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Cancel the ticker** and await its task, so no tick is in flight.
//! 2. **Send `Shutdown`**; the actor closes its queue and drains what is left.
//! 3. **Await the actor**, which hands back the final floor state.
//!
//! Clients handed out to callers may outlive the floor; an explicit
//! `Shutdown` stops the actor without waiting for them to be dropped.

pub mod cafe_system;

pub use cafe_system::*;
