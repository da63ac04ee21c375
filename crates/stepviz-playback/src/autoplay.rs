//! Autoplay ticker thread.
//!
//! Sends generation-stamped ticks at a fixed interval while autoplay is
//! on. The thread never touches playback state; ticks are marshaled to
//! the owning thread through the player's command queue. Cancelling
//! wakes the thread immediately, and the generation bump guarantees no
//! already-queued tick fires after the cancel.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

use crate::handle::PlayerHandle;

/// A running autoplay timer.
///
/// Dropping the timer cancels it.
#[derive(Debug)]
pub struct AutoplayTimer {
    handle: PlayerHandle,
    stop_tx: Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl AutoplayTimer {
    /// Starts autoplay: marks the player as playing and spawns the
    /// ticker. The first tick is sent immediately, matching a play
    /// button that advances right away.
    pub fn start(handle: PlayerHandle, interval: Duration) -> Self {
        let generation = handle.play();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let ticker_handle = handle.clone();
        let thread = std::thread::spawn(move || {
            debug!(event = "ticker_started", interval_ms = interval.as_millis() as u64);
            loop {
                if !ticker_handle.is_playing() {
                    break;
                }
                ticker_handle.tick(generation);
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    // Stop requested or the timer was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!(event = "ticker_stopped");
        });

        Self {
            handle,
            stop_tx,
            thread: Some(thread),
        }
    }

    /// Cancels autoplay and waits for the ticker thread to exit.
    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        self.handle.pause();
        let _ = self.stop_tx.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}
