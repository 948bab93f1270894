//! # Cafe Client
//!
//! High-level API over the floor actor. It wraps a `StateClient<CafeFloor>`,
//! keeps a read-only handle on the menu, and turns framework errors back into
//! [`CafeError`].
use crate::catalog::MenuCatalog;
use crate::error::CafeError;
use crate::floor_actor::{CafeFloor, FloorAction, FloorActionResult, FloorSnapshot, OrderReceipt, TickReport};
use crate::model::{MenuItem, MenuItemId, Order, Priority, Waiter};
use crate::stats::FloorStats;
use async_trait::async_trait;
use brewbytes_actor::{ActorClient, FrameworkError, StateClient};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for interacting with the floor actor.
///
/// Every read is served from a fresh snapshot; views are computed on the
/// copy, outside the actor.
#[derive(Clone)]
pub struct CafeClient {
    inner: StateClient<CafeFloor>,
    catalog: Arc<MenuCatalog>,
}

impl CafeClient {
    pub fn new(inner: StateClient<CafeFloor>, catalog: Arc<MenuCatalog>) -> Self {
        Self { inner, catalog }
    }

    /// Places an order for `item_id`.
    ///
    /// Unknown items are rejected here, without a round trip to the actor.
    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        item_id: MenuItemId,
        priority: Priority,
    ) -> Result<OrderReceipt, CafeError> {
        self.catalog.lookup(item_id)?;
        debug!("Sending request");
        match self
            .inner
            .perform_action(FloorAction::PlaceOrder { item_id, priority })
            .await
            .map_err(Self::map_error)?
        {
            FloorActionResult::PlaceOrder(receipt) => Ok(receipt),
            other => Err(unexpected("PlaceOrder", other)),
        }
    }

    /// Runs one decay + completion sweep now.
    #[instrument(skip(self))]
    pub async fn tick(&self) -> Result<TickReport, CafeError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(FloorAction::Tick)
            .await
            .map_err(Self::map_error)?
        {
            FloorActionResult::Tick(report) => Ok(report),
            other => Err(unexpected("Tick", other)),
        }
    }

    /// All orders in ledger order.
    pub async fn orders(&self) -> Result<Vec<Order>, CafeError> {
        Ok(self.snapshot().await?.orders)
    }

    /// All waiters in roster order.
    pub async fn waiters(&self) -> Result<Vec<Waiter>, CafeError> {
        Ok(self.snapshot().await?.waiters)
    }

    /// All orders, VIP first, oldest first within a priority.
    pub async fn ranked_orders(&self) -> Result<Vec<Order>, CafeError> {
        Ok(self.snapshot().await?.ranked_orders())
    }

    /// In-progress orders only, ranked.
    pub async fn active_orders(&self) -> Result<Vec<Order>, CafeError> {
        Ok(self.snapshot().await?.active_orders())
    }

    pub async fn stats(&self) -> Result<FloorStats, CafeError> {
        Ok(self.snapshot().await?.stats())
    }

    /// The menu, in catalog order. Served locally; the menu never changes.
    pub fn menu(&self) -> &[MenuItem] {
        self.catalog.items()
    }

    /// Whether the floor actor has stopped.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

fn unexpected(action: &str, result: FloorActionResult) -> CafeError {
    CafeError::ActorCommunicationError(format!(
        "{action} answered with unexpected result {result:?}"
    ))
}

#[async_trait]
impl ActorClient<CafeFloor> for CafeClient {
    type Error = CafeError;

    fn inner(&self) -> &StateClient<CafeFloor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CafeError {
        e.into_entity::<CafeError>()
            .unwrap_or_else(|e| CafeError::ActorCommunicationError(e.to_string()))
    }
}
