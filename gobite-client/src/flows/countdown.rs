//! Post-checkout redirect countdown

use super::cancellable_delay;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const TICK: Duration = Duration::from_secs(1);

/// How a countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Reached zero; the caller should move on (e.g. to order history)
    Elapsed,
    /// Stopped early
    Cancelled,
}

/// Once-a-second countdown running on the tokio runtime
///
/// Dropping the countdown cancels it, so a torn-down view never gets a late
/// redirect.
pub struct Countdown {
    remaining: watch::Receiver<u32>,
    handle: Option<JoinHandle<CountdownOutcome>>,
    cancel: CancellationToken,
}

impl Countdown {
    /// Start counting down from `seconds`
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(seconds: u32) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = watch::channel(seconds);
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut remaining = seconds;
            while remaining > 0 {
                if cancellable_delay(TICK, &token).await.is_err() {
                    return CountdownOutcome::Cancelled;
                }
                remaining -= 1;
                let _ = tx.send(remaining);
            }
            CountdownOutcome::Elapsed
        });

        Self {
            remaining: rx,
            handle: Some(handle),
            cancel,
        }
    }

    /// Seconds left
    pub fn remaining(&self) -> u32 {
        *self.remaining.borrow()
    }

    /// Receiver notified on every tick
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.remaining.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the countdown to end
    pub async fn finished(mut self) -> CountdownOutcome {
        match self.handle.take() {
            Some(handle) => handle.await.unwrap_or(CountdownOutcome::Cancelled),
            None => CountdownOutcome::Cancelled,
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_to_zero() {
        let countdown = Countdown::start(3);
        let mut ticks = countdown.subscribe();
        assert_eq!(countdown.remaining(), 3);

        let mut seen = Vec::new();
        while ticks.changed().await.is_ok() {
            let value = *ticks.borrow_and_update();
            seen.push(value);
            if value == 0 {
                break;
            }
        }
        assert_eq!(seen, vec![2, 1, 0]);
        assert_eq!(countdown.finished().await, CountdownOutcome::Elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_early() {
        let countdown = Countdown::start(10);
        tokio::time::sleep(Duration::from_millis(2500)).await;

        countdown.cancel();
        assert_eq!(countdown.remaining(), 8);
        assert_eq!(countdown.finished().await, CountdownOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let countdown = Countdown::start(10);
        let mut ticks = countdown.subscribe();
        drop(countdown);

        // Sender goes away without ever ticking
        assert!(ticks.changed().await.is_err());
        assert_eq!(*ticks.borrow(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_seconds_elapses_immediately() {
        let countdown = Countdown::start(0);
        assert_eq!(countdown.finished().await, CountdownOutcome::Elapsed);
    }
}
