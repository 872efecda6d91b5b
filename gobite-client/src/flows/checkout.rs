//! Simulated checkout round trip

use super::cancellable_delay;
use crate::core::{FlowError, StoreError};
use crate::session::SessionStore;
use shared::models::Order;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Wait out the simulated latency, then check out
///
/// Cancelling during the wait leaves the cart and history untouched. An empty
/// cart fails immediately.
pub async fn submit_order(
    store: &mut SessionStore,
    latency: Duration,
    cancel: &CancellationToken,
) -> Result<Order, FlowError> {
    if store.cart().is_empty() {
        return Err(StoreError::EmptyCart.into());
    }

    debug!(latency_ms = latency.as_millis() as u64, "Submitting order");
    cancellable_delay(latency, cancel)
        .await
        .map_err(|_| FlowError::Cancelled)?;

    Ok(store.checkout()?)
}
