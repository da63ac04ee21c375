//! Cross-thread handle for a running player.
//!
//! The handle never touches playback state itself: stepping commands are
//! queued over a channel and applied by the owning thread in
//! [`Player::drain_pending`](crate::Player::drain_pending). Play/pause
//! are shared flags, and cancellation bumps a generation counter so that
//! any tick already in flight becomes stale and is dropped instead of
//! firing after the cancel.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use tracing::debug;

/// Commands a handle can queue for the owning thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    StepForward,
    StepBackward,
    JumpTo(usize),
    /// A timer tick stamped with the autoplay generation it belongs to.
    Tick { generation: u64 },
}

/// Cloneable handle for interacting with a [`Player`](crate::Player)
/// from other threads.
pub struct PlayerHandle {
    tx: Sender<PlayerCommand>,
    playing: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

pub(crate) fn new_channel(
    playing: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
) -> (PlayerHandle, Receiver<PlayerCommand>) {
    let (tx, rx) = mpsc::channel();
    (
        PlayerHandle {
            tx,
            playing,
            generation,
        },
        rx,
    )
}

impl PlayerHandle {
    /// Queues one explicit forward step. Cancels autoplay immediately.
    pub fn step_forward(&self) {
        self.pause();
        let _ = self.tx.send(PlayerCommand::StepForward);
    }

    /// Queues one explicit backward step. Cancels autoplay immediately.
    pub fn step_backward(&self) {
        self.pause();
        let _ = self.tx.send(PlayerCommand::StepBackward);
    }

    /// Queues a jump to an absolute cursor. Cancels autoplay
    /// immediately.
    pub fn jump_to(&self, target: usize) {
        self.pause();
        let _ = self.tx.send(PlayerCommand::JumpTo(target));
    }

    /// Starts autoplay and returns the generation ticks must carry.
    pub fn play(&self) -> u64 {
        self.playing.store(true, Ordering::SeqCst);
        let generation = self.generation.load(Ordering::SeqCst);
        debug!(event = "autoplay_started", generation);
        generation
    }

    /// Stops autoplay immediately. Ticks from before the pause become
    /// stale and will be dropped, never applied late.
    pub fn pause(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.playing.store(false, Ordering::SeqCst);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Queues a timer tick for `generation`. Used by the autoplay
    /// timer; stale generations are filtered by the player.
    pub fn tick(&self, generation: u64) {
        let _ = self.tx.send(PlayerCommand::Tick { generation });
    }
}

impl Clone for PlayerHandle {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            playing: Arc::clone(&self.playing),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl std::fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerHandle")
            .field("playing", &self.is_playing())
            .finish()
    }
}
