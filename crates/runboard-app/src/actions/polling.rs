//! Auto-refresh timer task.
//!
//! The timer only sends [`Message::PollTick`]; the TEA loop turns each tick
//! into a refresh. Stopping the timer never aborts a fetch it triggered.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::message::Message;
use crate::refresh::{PollTimer, PollTimerKey};

/// Spawn the poll timer described by `key`.
///
/// The first tick fires one full interval after spawning. The task exits when
/// the returned handle is stopped or the message channel closes.
pub fn spawn_poll_timer(key: PollTimerKey, msg_tx: mpsc::Sender<Message>) -> PollTimer {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let period = key.interval.duration();

    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if msg_tx.send(Message::PollTick).await.is_err() {
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        debug!(
            "Poll timer stopped ({}, {} runs)",
            key.interval.label(),
            key.record_count
        );
    });

    debug!(
        "Poll timer started ({}, {} runs)",
        key.interval.label(),
        key.record_count
    );
    PollTimer::new(key, Arc::new(shutdown_tx))
}
