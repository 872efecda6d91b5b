//! Timer-driven flows
//!
//! The only time-based behavior in the client: simulated network latency for
//! checkout and sign-in, and the countdown shown after an order is placed.
//! Every wait is tied to a [`CancellationToken`] so a view that goes away can
//! stop it before it touches state.

pub mod checkout;
pub mod countdown;

pub use checkout::submit_order;
pub use countdown::{Countdown, CountdownOutcome};

use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// The wait was cancelled before it elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cancelled")]
pub struct Cancelled;

/// Sleep for `duration` unless `cancel` fires first
///
/// An already-cancelled token wins even over a zero duration.
pub async fn cancellable_delay(
    duration: Duration,
    cancel: &CancellationToken,
) -> Result<(), Cancelled> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}
