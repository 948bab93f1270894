//! # Floor Actor
//!
//! The single actor that owns every piece of mutable café state.
//!
//! ## Structure
//!
//! - [`floor`] - the [`CafeFloor`] aggregate and its read models
//! - [`actions`] - [`FloorAction`] and [`FloorActionResult`]
//! - [`state`] - [`ActorState`](brewbytes_actor::ActorState) implementation
//! - [`new()`] - factory that creates the actor and its client
//!
//! Order placement and ticks travel on the same queue, so a tick never sees a
//! half-applied assignment and a snapshot always reflects whole operations.
//!
//! ## Usage
//!
//! ```rust
//! use brewbytes::catalog::MenuCatalog;
//! use brewbytes::clock::{SharedClock, SystemClock};
//! use brewbytes::floor_actor::{self, CafeFloor, FloorAction};
//! use brewbytes::model::Priority;
//! use brewbytes::roster::StaffRoster;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let roster = StaffRoster::new(["Amit", "Riya"])?;
//!     let floor = CafeFloor::new(Arc::new(MenuCatalog::default()), roster, 0.5)?;
//!     let (actor, client) = floor_actor::new(floor, 32);
//!     let clock: SharedClock = Arc::new(SystemClock);
//!     tokio::spawn(actor.run(clock));
//!
//!     client
//!         .perform_action(FloorAction::PlaceOrder { item_id: 1, priority: Priority::Vip })
//!         .await?;
//!     assert_eq!(client.snapshot().await?.orders.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod floor;
pub mod state;

pub use actions::*;
pub use floor::*;

use brewbytes_actor::{StateActor, StateClient};

/// Creates the floor actor around `floor` and its client.
pub fn new(floor: CafeFloor, buffer_size: usize) -> (StateActor<CafeFloor>, StateClient<CafeFloor>) {
    StateActor::new(floor, buffer_size)
}
