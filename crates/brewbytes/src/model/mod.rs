//! Plain data records shared by the floor, its clients and the query surface.
//!
//! Every record serializes to the flat camelCase shape used by the café
//! front end (`occupiedTime`, `waiterName`, `estimatedCompletion`, ...).

pub mod menu;
pub mod order;
pub mod waiter;

pub use menu::*;
pub use order::*;
pub use waiter::*;
