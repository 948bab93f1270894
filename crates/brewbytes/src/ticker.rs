//! Periodic driver for the decay and completion sweeps.

use crate::clients::CafeClient;
use crate::error::CafeError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Sends a `Tick` to the floor on a fixed interval.
///
/// The first tick fires one full interval after [`TickScheduler::spawn`]. A
/// slow tick delays the following ones instead of bursting to catch up.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
}

impl TickScheduler {
    /// Rejects a zero interval.
    pub fn new(interval: Duration) -> Result<Self, CafeError> {
        if interval.is_zero() {
            return Err(CafeError::InvalidTickInterval(0));
        }
        Ok(Self { interval })
    }

    /// Starts the ticker task.
    ///
    /// The task stops when `token` is cancelled or the floor actor goes away,
    /// and resolves to the number of ticks it delivered.
    pub fn spawn(self, client: CafeClient, token: CancellationToken) -> JoinHandle<u64> {
        tokio::spawn(async move { self.run(client, token).await })
    }

    async fn run(self, client: CafeClient, token: CancellationToken) -> u64 {
        let mut interval = time::interval_at(Instant::now() + self.interval, self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval = ?self.interval, "Ticker started");

        let mut ticks: u64 = 0;
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Ticker cancelled");
                    break;
                }
                _ = interval.tick() => {
                    match client.tick().await {
                        Ok(report) => {
                            ticks += 1;
                            debug!(
                                tick = ticks,
                                drained = report.drained.len(),
                                completed = report.completed.len(),
                                "Tick delivered"
                            );
                        }
                        Err(e) => {
                            warn!(error = %e, "Floor unreachable, stopping ticker");
                            break;
                        }
                    }
                }
            }
        }

        info!(ticks, "Ticker stopped");
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::floor_actor::{CafeFloor, FloorActionResult, TickReport};
    use brewbytes_actor::mock::MockClient;
    use brewbytes_actor::FrameworkError;
    use std::sync::Arc;

    fn cafe(mock: &MockClient<CafeFloor>) -> CafeClient {
        CafeClient::new(mock.client(), Arc::new(MenuCatalog::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_interval_until_cancelled() {
        let mut mock = MockClient::<CafeFloor>::new();
        for _ in 0..3 {
            mock.expect_action()
                .return_ok(FloorActionResult::Tick(TickReport::default()));
        }
        let token = CancellationToken::new();
        let handle = TickScheduler::new(Duration::from_secs(30))
            .unwrap()
            .spawn(cafe(&mock), token.clone());

        // Nothing fires before the first full interval.
        time::sleep(Duration::from_secs(29)).await;
        // Three ticks at 30s, 60s and 90s.
        time::sleep(Duration::from_secs(62)).await;
        token.cancel();

        assert_eq!(handle.await.unwrap(), 3);
        mock.verify();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_floor_is_gone() {
        let mut mock = MockClient::<CafeFloor>::new();
        mock.expect_action()
            .return_ok(FloorActionResult::Tick(TickReport::default()));
        mock.expect_action().return_err(FrameworkError::ActorClosed);
        let token = CancellationToken::new();

        let handle = TickScheduler::new(Duration::from_millis(100))
            .unwrap()
            .spawn(cafe(&mock), token);

        assert_eq!(handle.await.unwrap(), 1);
        mock.verify();
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert_eq!(
            TickScheduler::new(Duration::ZERO).unwrap_err(),
            CafeError::InvalidTickInterval(0)
        );
    }
}
