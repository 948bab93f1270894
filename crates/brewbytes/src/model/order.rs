//! Order records and the tags attached to them.
use crate::model::{MenuItem, MenuItemId};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders, rendered as `ORD-` plus eight or more
/// upper-case hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORD-{:08X}", self.0)
    }
}

/// Returned when a string is not a well-formed order id.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid order id: {0:?}")]
pub struct InvalidOrderId(pub String);

impl FromStr for OrderId {
    type Err = InvalidOrderId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("ORD-")
            .filter(|hex| !hex.is_empty())
            .and_then(|hex| u64::from_str_radix(hex, 16).ok())
            .map(OrderId)
            .ok_or_else(|| InvalidOrderId(s.to_string()))
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for OrderId {
    type Error = InvalidOrderId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Customer class. Drives display ordering only, never waiter assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    Online,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Vip, Priority::Regular, Priority::Online];

    /// Display rank; lower is served first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Vip => 0,
            Priority::Regular => 1,
            Priority::Online => 2,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Priority::Vip => "VIP",
            Priority::Regular => "Regular",
            Priority::Online => "Online",
        };
        f.write_str(name)
    }
}

/// Returned when a string names no known priority.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown priority: {0:?} (expected VIP, Regular or Online)")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vip" => Ok(Priority::Vip),
            "regular" => Ok(Priority::Regular),
            "online" => Ok(Priority::Online),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

/// Lifecycle of an order. The only transition is `InProgress -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Represents a customer order.
///
/// Everything except `status` is fixed when the order is created; the item
/// fields are copied from the menu so later menu edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub item_id: MenuItemId,
    pub item_name: String,
    pub priority: Priority,
    pub waiter_name: String,
    pub prep_time: u32,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    pub estimated_completion: DateTime<Utc>,
}

impl Order {
    /// Creates a new in-progress Order for `item`, assigned to `waiter_name`.
    pub fn new(
        id: OrderId,
        item: &MenuItem,
        priority: Priority,
        waiter_name: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            item_id: item.id,
            item_name: item.name.clone(),
            priority,
            waiter_name: waiter_name.into(),
            prep_time: item.prep_time,
            status: OrderStatus::InProgress,
            timestamp,
            estimated_completion: timestamp + Self::prep_duration(item.prep_time),
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == OrderStatus::InProgress
    }

    /// Whether at least `prep_time` minutes have elapsed since creation at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now - self.timestamp >= Self::prep_duration(self.prep_time)
    }

    /// Marks the order completed if it is in progress and due.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub(crate) fn complete_if_due(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_in_progress() && self.is_due(now) {
            self.status = OrderStatus::Completed;
            true
        } else {
            false
        }
    }

    fn prep_duration(prep_time: u32) -> TimeDelta {
        TimeDelta::minutes(i64::from(prep_time))
    }
}
