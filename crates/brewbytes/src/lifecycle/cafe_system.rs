use crate::clients::CafeClient;
use crate::clock::{SharedClock, SystemClock};
use crate::config::CafeConfig;
use crate::error::CafeError;
use crate::floor_actor::{self, CafeFloor, FloorSnapshot};
use crate::model::MenuItem;
use crate::ticker::TickScheduler;
use brewbytes_actor::ActorClient;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// The running café: one floor actor plus the ticker that drives it.
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::start(&CafeConfig::default())?;
/// let receipt = system.cafe_client.place_order(1, Priority::Vip).await?;
/// let final_state = system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// Client for interacting with the floor actor
    pub cafe_client: CafeClient,

    token: CancellationToken,
    ticker_handle: Option<JoinHandle<u64>>,
    actor_handle: JoinHandle<CafeFloor>,
}

impl CafeSystem {
    /// Validates `config` and starts the floor on the system clock.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(config: &CafeConfig) -> Result<Self, CafeError> {
        Self::start_with_clock(config, Arc::new(SystemClock))
    }

    /// Like [`CafeSystem::start`], with an injected clock.
    pub fn start_with_clock(config: &CafeConfig, clock: SharedClock) -> Result<Self, CafeError> {
        config.validate()?;
        let catalog = Arc::new(config.catalog()?);
        let floor = CafeFloor::new(catalog.clone(), config.roster()?, config.decay_step_minutes)?;
        let scheduler = TickScheduler::new(config.tick_interval())?;

        let (actor, state_client) = floor_actor::new(floor, config.channel_capacity);
        let actor_handle = tokio::spawn(actor.run(clock));
        let cafe_client = CafeClient::new(state_client, catalog);

        let token = CancellationToken::new();
        let ticker_handle = scheduler.spawn(cafe_client.clone(), token.child_token());

        info!(
            waiters = config.waiters.len(),
            tick_interval_ms = config.tick_interval_ms,
            "Cafe system started"
        );

        Ok(Self {
            cafe_client,
            token,
            ticker_handle: Some(ticker_handle),
            actor_handle,
        })
    }

    /// The menu served by this floor.
    pub fn menu(&self) -> &[MenuItem] {
        self.cafe_client.menu()
    }

    /// Stops the ticker. Decay and completion freeze; orders can still be
    /// placed and read. Returns the number of ticks delivered.
    pub async fn stop_ticker(&mut self) -> u64 {
        self.token.cancel();
        match self.ticker_handle.take() {
            Some(handle) => handle.await.unwrap_or_else(|e| {
                error!(error = %e, "Ticker task failed");
                0
            }),
            None => 0,
        }
    }

    /// Stops the ticker, closes the floor and returns its final state.
    ///
    /// Client clones handed out earlier do not keep the floor open; their
    /// calls fail with `ActorCommunicationError` afterwards.
    pub async fn shutdown(mut self) -> Result<FloorSnapshot, CafeError> {
        info!("Shutting down cafe system...");
        let ticks = self.stop_ticker().await;

        // Requests already queued are still answered before the actor stops.
        self.cafe_client.shutdown().await;
        drop(self.cafe_client);

        let floor = self.actor_handle.await.map_err(|e| {
            error!(error = %e, "Floor actor task failed");
            CafeError::ActorCommunicationError(e.to_string())
        })?;

        let snapshot = floor.snapshot();
        info!(
            ticks,
            orders = snapshot.orders.len(),
            "Cafe system shut down"
        );
        Ok(snapshot)
    }
}
