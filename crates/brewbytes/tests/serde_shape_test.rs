use brewbytes::catalog::MenuCatalog;
use brewbytes::floor_actor::CafeFloor;
use brewbytes::model::{Order, OrderId, OrderStatus, Priority, Waiter};
use brewbytes::roster::StaffRoster;
use chrono::{TimeDelta, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_order_json_shape() {
    let t0 = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    let roster = StaffRoster::new(["Amit"]).unwrap();
    let mut floor = CafeFloor::new(Arc::new(MenuCatalog::default()), roster, 0.5).unwrap();

    let receipt = floor.place_order(2, Priority::Vip, t0).unwrap();
    let value = serde_json::to_value(&receipt).unwrap();

    assert_eq!(
        value,
        json!({
            "order": {
                "id": "ORD-00000001",
                "itemId": 2,
                "itemName": "Latte",
                "priority": "VIP",
                "waiterName": "Amit",
                "prepTime": 6,
                "status": "In Progress",
                "timestamp": "2025-03-01T09:00:00Z",
                "estimatedCompletion": "2025-03-01T09:06:00Z"
            },
            "waiters": [
                { "name": "Amit", "occupiedTime": 6.0, "currentOrders": 1, "totalOrders": 1 }
            ]
        })
    );

    floor.tick(t0 + TimeDelta::minutes(6));
    let value = serde_json::to_value(floor.snapshot()).unwrap();
    assert_eq!(value["orders"][0]["status"], "Completed");
}

#[test]
fn test_order_round_trips_from_front_end_json() {
    let raw = r#"{
        "id": "ORD-0000002A",
        "itemId": 18,
        "itemName": "Cookie",
        "priority": "Online",
        "waiterName": "Riya",
        "prepTime": 3,
        "status": "Completed",
        "timestamp": "2025-03-01T09:00:00Z",
        "estimatedCompletion": "2025-03-01T09:03:00Z"
    }"#;
    let order: Order = serde_json::from_str(raw).unwrap();
    assert_eq!(order.id, OrderId(42));
    assert_eq!(order.priority, Priority::Online);
    assert_eq!(order.status, OrderStatus::Completed);

    assert!(serde_json::from_str::<Order>(&raw.replace("ORD-0000002A", "42")).is_err());
}

#[test]
fn test_stats_json_shape() {
    let snapshot = brewbytes::floor_actor::FloorSnapshot {
        waiters: vec![Waiter::new("Amit")],
        orders: vec![],
    };
    let value = serde_json::to_value(snapshot.stats()).unwrap();
    assert_eq!(
        value,
        json!({
            "totalOrders": 0,
            "completedOrders": 0,
            "inProgressOrders": 0,
            "averagePrepTime": 0,
            "mostOrderedItem": null,
            "topWaiter": null,
            "totalOccupiedTime": 0.0
        })
    );
}
