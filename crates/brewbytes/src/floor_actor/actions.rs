//! Requests the floor actor accepts and the results it sends back.

use super::floor::{OrderReceipt, TickReport};
use crate::model::{MenuItemId, Priority};

/// State-changing operations on the floor.
#[derive(Debug, Clone, PartialEq)]
pub enum FloorAction {
    /// Assign a new order for a menu item.
    PlaceOrder {
        item_id: MenuItemId,
        priority: Priority,
    },
    /// Run one decay + completion sweep at the actor's current time.
    Tick,
}

/// Results from FloorActions; variants match 1:1 with FloorAction.
#[derive(Debug, Clone)]
pub enum FloorActionResult {
    PlaceOrder(OrderReceipt),
    Tick(TickReport),
}
