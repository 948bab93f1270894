//! [`ActorState`] implementation for [`CafeFloor`].
//!
//! The actor's context is the clock, so every action reads "now" from the
//! same source and tests can drive time by hand.

use super::actions::{FloorAction, FloorActionResult};
use super::floor::{CafeFloor, FloorSnapshot};
use crate::clock::SharedClock;
use crate::error::CafeError;
use async_trait::async_trait;
use brewbytes_actor::ActorState;
use tracing::{debug, info};

#[async_trait]
impl ActorState for CafeFloor {
    type Action = FloorAction;
    type ActionResult = FloorActionResult;
    type Snapshot = FloorSnapshot;
    type Context = SharedClock;
    type Error = CafeError;

    async fn on_start(&mut self, clock: &SharedClock) -> Result<(), CafeError> {
        info!(
            waiters = self.roster().len(),
            menu_items = self.catalog().len(),
            decay_step = self.decay_step(),
            started_at = %clock.now(),
            "Floor open"
        );
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: FloorAction,
        clock: &SharedClock,
    ) -> Result<FloorActionResult, CafeError> {
        let now = clock.now();
        match action {
            FloorAction::PlaceOrder { item_id, priority } => self
                .place_order(item_id, priority, now)
                .map(FloorActionResult::PlaceOrder),
            FloorAction::Tick => {
                let report = self.tick(now);
                if report.is_empty() {
                    debug!("Tick: nothing changed");
                } else {
                    info!(
                        drained = ?report.drained,
                        completed = report.completed.len(),
                        "Tick"
                    );
                }
                Ok(FloorActionResult::Tick(report))
            }
        }
    }

    fn snapshot(&self) -> FloorSnapshot {
        CafeFloor::snapshot(self)
    }
}
