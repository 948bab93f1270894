//! Append-only record of every order taken.

use crate::model::{Order, OrderId};
use chrono::{DateTime, Utc};

/// Append-only list of orders in creation order.
///
/// Orders are never removed. The only mutation after append is the
/// `InProgress -> Completed` transition performed by [`OrderLedger::complete_due`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLedger {
    orders: Vec<Order>,
    last_id: u64,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next order id. Ids start at 1 and are never reused.
    pub(crate) fn next_id(&mut self) -> OrderId {
        self.last_id += 1;
        OrderId(self.last_id)
    }

    pub(crate) fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Orders in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn in_progress(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|order| order.is_in_progress())
    }

    /// Completion sweep: completes every in-progress order whose prep time has
    /// elapsed at `now`.
    ///
    /// Returns the ids completed by this sweep; a repeated sweep returns none.
    pub fn complete_due(&mut self, now: DateTime<Utc>) -> Vec<OrderId> {
        self.orders
            .iter_mut()
            .filter_map(|order| order.complete_if_due(now).then_some(order.id))
            .collect()
    }
}
