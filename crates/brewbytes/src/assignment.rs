//! Least-loaded waiter assignment.

use crate::error::CafeError;
use crate::ledger::OrderLedger;
use crate::model::{MenuItem, Order, Priority, Waiter};
use crate::roster::StaffRoster;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Outcome of a single assignment: the new order and the chosen waiter as it
/// stands right after the assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub order: Order,
    pub waiter: Waiter,
}

/// Assigns `item` to the waiter with the least outstanding work and records
/// the order.
///
/// Ties go to the first such waiter in roster order. `priority` is recorded on
/// the order but never influences the choice. On error neither the roster nor
/// the ledger has been touched.
pub fn assign(
    roster: &mut StaffRoster,
    ledger: &mut OrderLedger,
    item: &MenuItem,
    priority: Priority,
    now: DateTime<Utc>,
) -> Result<Placement, CafeError> {
    if item.prep_time == 0 {
        return Err(CafeError::InvalidPrepTime {
            item_id: item.id,
            prep_time: item.prep_time,
        });
    }
    let index = roster.least_loaded().ok_or(CafeError::EmptyRoster)?;
    let waiter = roster.waiter_mut(index).ok_or(CafeError::EmptyRoster)?;

    debug!(
        waiter = %waiter.name,
        load_before = waiter.occupied_time,
        prep_time = item.prep_time,
        "Assigning order"
    );
    waiter.take_order(item.prep_time);
    let waiter = waiter.clone();

    let order = Order::new(ledger.next_id(), item, priority, waiter.name.clone(), now);
    ledger.append(order.clone());

    Ok(Placement { order, waiter })
}
