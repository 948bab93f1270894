//! Display ordering over ledger entries.

use crate::model::Order;

/// Orders sorted for display: VIP, then Regular, then Online; within a
/// priority, oldest first.
///
/// The sort is stable, so orders equal on both keys keep ledger order.
pub fn rank(orders: &[Order]) -> Vec<Order> {
    let mut ranked = orders.to_vec();
    ranked.sort_by_key(|order| (order.priority.rank(), order.timestamp));
    ranked
}

/// In-progress orders only, ranked as [`rank`] does.
pub fn rank_active(orders: &[Order]) -> Vec<Order> {
    let mut active: Vec<Order> = orders
        .iter()
        .filter(|order| order.is_in_progress())
        .cloned()
        .collect();
    active.sort_by_key(|order| (order.priority.rank(), order.timestamp));
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MenuItem, OrderId, OrderStatus, Priority};
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn t(minute: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap() + TimeDelta::minutes(minute)
    }

    fn order(id: u64, priority: Priority, at: DateTime<Utc>) -> Order {
        let item = MenuItem::new(1, "Latte", 5, Category::Coffee);
        Order::new(OrderId(id), &item, priority, "Amit", at)
    }

    fn ids(orders: &[Order]) -> Vec<u64> {
        orders.iter().map(|o| o.id.0).collect()
    }

    #[test]
    fn priority_first_then_oldest() {
        let orders = vec![
            order(1, Priority::Vip, t(2)),
            order(2, Priority::Regular, t(1)),
            order(3, Priority::Vip, t(1)),
        ];
        assert_eq!(ids(&rank(&orders)), vec![3, 1, 2]);
    }

    #[test]
    fn ties_keep_ledger_order() {
        let orders = vec![
            order(1, Priority::Online, t(0)),
            order(2, Priority::Regular, t(0)),
            order(3, Priority::Online, t(0)),
            order(4, Priority::Regular, t(0)),
        ];
        assert_eq!(ids(&rank(&orders)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn active_view_skips_completed() {
        let mut done = order(1, Priority::Vip, t(0));
        done.status = OrderStatus::Completed;
        let orders = vec![done, order(2, Priority::Online, t(1)), order(3, Priority::Vip, t(2))];

        assert_eq!(ids(&rank_active(&orders)), vec![3, 2]);
        // The input is never reordered.
        assert_eq!(ids(&orders), vec![1, 2, 3]);
    }
}
