use serde::{Deserialize, Serialize};

/// A staff member who can be assigned prep work.
///
/// `occupied_time` is outstanding work in minutes and never drops below zero.
/// `total_orders` only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waiter {
    pub name: String,
    pub occupied_time: f64,
    pub current_orders: u32,
    pub total_orders: u64,
}

impl Waiter {
    /// Creates an idle waiter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            occupied_time: 0.0,
            current_orders: 0,
            total_orders: 0,
        }
    }

    /// Creates a waiter that already carries `occupied_time` minutes of work.
    pub fn with_workload(name: impl Into<String>, occupied_time: f64, current_orders: u32) -> Self {
        Self {
            occupied_time,
            current_orders,
            ..Self::new(name)
        }
    }

    pub fn is_idle(&self) -> bool {
        self.occupied_time <= 0.0
    }

    /// Books a new order of `prep_time` minutes onto this waiter.
    pub(crate) fn take_order(&mut self, prep_time: u32) {
        self.occupied_time += f64::from(prep_time);
        self.current_orders += 1;
        self.total_orders += 1;
    }

    /// Removes `step` minutes of outstanding work, flooring at zero.
    ///
    /// When the load before decay was at or below `step`, all outstanding work
    /// is considered drained and `current_orders` resets to zero. Returns `true`
    /// when this call took a busy waiter down to idle.
    pub(crate) fn decay(&mut self, step: f64) -> bool {
        let before = self.occupied_time;
        self.occupied_time = (before - step).max(0.0);
        if before <= step {
            self.current_orders = 0;
        }
        before > 0.0 && self.is_idle()
    }
}
