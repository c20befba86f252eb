//! Periodic tick source
//!
//! Spawns a background task that streams `Tick` values into a bounded
//! channel at a fixed wall-clock rate, independent of how fast the
//! consumer drains them.

use crate::TICK_CHANNEL_CAPACITY;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

/// One fixed time-step event; carries no state of its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Tick-producing task handle namespace
pub struct Ticker;

impl Ticker {
    /// Spawn the tick task and return the receiving end of its channel.
    ///
    /// The task paces itself with `tokio::time::interval`. Ticks missed
    /// while the consumer is slow are delivered late in a burst rather
    /// than dropped, and each send awaits channel capacity, so every
    /// tick applies exactly one increment downstream. The task runs for
    /// the life of the process and exits once the receiver is dropped.
    pub fn start(ticks_per_second: u64) -> mpsc::Receiver<Tick> {
        debug_assert!(ticks_per_second > 0);
        let (tx, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        let period = Duration::from_nanos(1_000_000_000 / ticks_per_second);

        tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tx.send(Tick).await.is_err() {
                    break;
                }
            }
        });

        rx
    }
}
