//! Floor statistics for the admin dashboard.

use crate::model::{Order, OrderStatus, Waiter};
use serde::Serialize;
use std::collections::HashMap;

/// Aggregate figures over the roster and the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorStats {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub in_progress_orders: usize,
    /// Mean prep time in whole minutes, rounded; 0 when there are no orders.
    pub average_prep_time: u32,
    /// Ties go to the item ordered first.
    pub most_ordered_item: Option<String>,
    /// Ties go to the earliest waiter in roster order.
    pub top_waiter: Option<String>,
    pub total_occupied_time: f64,
}

impl FloorStats {
    pub fn compute(waiters: &[Waiter], orders: &[Order]) -> Self {
        let total_orders = orders.len();
        let completed_orders = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count();

        let average_prep_time = if orders.is_empty() {
            0
        } else {
            let sum: u64 = orders.iter().map(|o| u64::from(o.prep_time)).sum();
            (sum as f64 / total_orders as f64).round() as u32
        };

        Self {
            total_orders,
            completed_orders,
            in_progress_orders: total_orders - completed_orders,
            average_prep_time,
            most_ordered_item: most_ordered_item(orders),
            top_waiter: top_waiter(waiters, orders),
            total_occupied_time: waiters.iter().map(|w| w.occupied_time).sum(),
        }
    }
}

fn most_ordered_item(orders: &[Order]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for order in orders {
        *counts.entry(order.item_name.as_str()).or_default() += 1;
    }

    // Walk the ledger so the first item to reach the top count wins.
    let mut best: Option<(&str, usize)> = None;
    for order in orders {
        let count = counts[order.item_name.as_str()];
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((order.item_name.as_str(), count)),
        }
    }
    best.map(|(name, _)| name.to_string())
}

fn top_waiter(waiters: &[Waiter], orders: &[Order]) -> Option<String> {
    if orders.is_empty() {
        return None;
    }
    let mut best: Option<&Waiter> = None;
    for waiter in waiters {
        match best {
            Some(top) if waiter.total_orders <= top.total_orders => {}
            _ => best = Some(waiter),
        }
    }
    best.map(|w| w.name.clone())
}
