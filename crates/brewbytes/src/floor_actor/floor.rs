//! The café floor aggregate: roster, ledger and menu under one owner.

use crate::assignment::assign;
use crate::catalog::MenuCatalog;
use crate::error::CafeError;
use crate::ledger::OrderLedger;
use crate::model::{MenuItemId, Order, OrderId, Priority, Waiter};
use crate::ranking::{rank, rank_active};
use crate::roster::StaffRoster;
use crate::stats::FloorStats;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Reply to an order-creation request: the order plus the whole roster as it
/// stands after the assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order: Order,
    pub waiters: Vec<Waiter>,
}

/// What a single tick changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    /// Waiters whose load reached zero during this tick.
    pub drained: Vec<String>,
    /// Orders completed during this tick.
    pub completed: Vec<OrderId>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.drained.is_empty() && self.completed.is_empty()
    }
}

/// Copy-on-read view of the floor handed out to readers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorSnapshot {
    pub waiters: Vec<Waiter>,
    pub orders: Vec<Order>,
}

impl FloorSnapshot {
    pub fn ranked_orders(&self) -> Vec<Order> {
        rank(&self.orders)
    }

    pub fn active_orders(&self) -> Vec<Order> {
        rank_active(&self.orders)
    }

    pub fn stats(&self) -> FloorStats {
        FloorStats::compute(&self.waiters, &self.orders)
    }
}

/// All mutable café state. Owned by the floor actor; nothing else writes it.
#[derive(Debug)]
pub struct CafeFloor {
    catalog: Arc<MenuCatalog>,
    roster: StaffRoster,
    ledger: OrderLedger,
    decay_step: f64,
}

impl CafeFloor {
    pub fn new(
        catalog: Arc<MenuCatalog>,
        roster: StaffRoster,
        decay_step: f64,
    ) -> Result<Self, CafeError> {
        if !decay_step.is_finite() || decay_step < 0.0 {
            return Err(CafeError::InvalidDecayStep(decay_step));
        }
        Ok(Self {
            catalog,
            roster,
            ledger: OrderLedger::new(),
            decay_step,
        })
    }

    pub fn catalog(&self) -> &Arc<MenuCatalog> {
        &self.catalog
    }

    pub fn roster(&self) -> &StaffRoster {
        &self.roster
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn decay_step(&self) -> f64 {
        self.decay_step
    }

    /// Resolves `item_id` against the menu and assigns the order.
    ///
    /// An unknown item is rejected before anything is mutated.
    pub fn place_order(
        &mut self,
        item_id: MenuItemId,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Result<OrderReceipt, CafeError> {
        let item = self.catalog.lookup(item_id)?;
        let placement = assign(&mut self.roster, &mut self.ledger, item, priority, now)?;
        info!(
            order_id = %placement.order.id,
            item = %placement.order.item_name,
            priority = %placement.order.priority,
            waiter = %placement.waiter.name,
            occupied_time = placement.waiter.occupied_time,
            "Order assigned"
        );
        Ok(OrderReceipt {
            order: placement.order,
            waiters: self.roster.waiters().to_vec(),
        })
    }

    /// One tick: the decay sweep over every waiter, then the completion sweep
    /// over every in-progress order.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickReport {
        let drained = self.roster.decay(self.decay_step);
        let completed = self.ledger.complete_due(now);
        TickReport { drained, completed }
    }

    pub fn snapshot(&self) -> FloorSnapshot {
        FloorSnapshot {
            waiters: self.roster.waiters().to_vec(),
            orders: self.ledger.orders().to_vec(),
        }
    }
}
