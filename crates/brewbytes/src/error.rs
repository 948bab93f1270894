//! Error types for the café floor.

use crate::model::MenuItemId;
use thiserror::Error;

/// Errors raised while building or operating the café floor.
///
/// Configuration faults are fatal and surface at startup. `UnknownMenuItem` is
/// the caller's fault and leaves all state untouched. `ActorCommunicationError`
/// means the floor actor could not be reached.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CafeError {
    /// No waiters were configured.
    #[error("Staff roster is empty")]
    EmptyRoster,

    /// Two waiters share a name.
    #[error("Duplicate waiter: {0}")]
    DuplicateWaiter(String),

    /// A waiter name is blank.
    #[error("Invalid waiter name: {0:?}")]
    InvalidWaiterName(String),

    /// A waiter was seeded with a negative or non-finite workload.
    #[error("Invalid workload for {name}: {occupied_time}")]
    InvalidWorkload { name: String, occupied_time: f64 },

    /// The menu has no items.
    #[error("Menu is empty")]
    EmptyMenu,

    /// Two menu items share an id.
    #[error("Duplicate menu item: {0}")]
    DuplicateMenuItem(MenuItemId),

    /// A menu item has a prep time of zero minutes.
    #[error("Invalid prep time {prep_time} for menu item {item_id}")]
    InvalidPrepTime { item_id: MenuItemId, prep_time: u32 },

    /// The decay step is negative or not a number.
    #[error("Invalid decay step: {0}")]
    InvalidDecayStep(f64),

    /// The tick interval is zero.
    #[error("Invalid tick interval: {0} ms")]
    InvalidTickInterval(u64),

    /// The request channel would have no capacity.
    #[error("Invalid channel capacity: {0}")]
    InvalidChannelCapacity(usize),

    /// The requested menu item does not exist.
    #[error("Menu item not found: {0}")]
    UnknownMenuItem(MenuItemId),

    /// An error occurred while communicating with the floor actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CafeError {
    /// Whether this error is a startup configuration fault.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            CafeError::UnknownMenuItem(_) | CafeError::ActorCommunicationError(_)
        )
    }
}
