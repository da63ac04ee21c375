//! The playback driver.
//!
//! A [`Player`] is the single owner of a recording's cursor and position
//! table; every mutation happens on the thread that owns it. Other
//! threads (an autoplay timer, UI callbacks) interact through a
//! [`PlayerHandle`](crate::PlayerHandle), whose commands are queued and
//! applied in order by [`Player::drain_pending`] on the owning thread.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use stepviz_core::{Recording, Snapshot};
use tracing::debug;

use crate::handle::{new_channel, PlayerCommand, PlayerHandle};

/// Owns one recording and its playback state.
pub struct Player {
    recording: Recording,
    rx: Receiver<PlayerCommand>,
    playing: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl Player {
    /// Creates a player and the cloneable handle other threads use to
    /// reach it.
    pub fn new(recording: Recording) -> (Self, PlayerHandle) {
        let playing = Arc::new(AtomicBool::new(false));
        let generation = Arc::new(AtomicU64::new(0));
        let (handle, rx) = new_channel(Arc::clone(&playing), Arc::clone(&generation));
        (
            Self {
                recording,
                rx,
                playing,
                generation,
            },
            handle,
        )
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// `(applied frames, total frames)` for the step counter display.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.recording.timeline().cursor(),
            self.recording.timeline().len(),
        )
    }

    pub fn is_finished(&self) -> bool {
        self.recording.timeline().at_end()
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    /// Total comparisons of the underlying run, for the info panel.
    pub fn comparisons(&self) -> u64 {
        self.recording.comparisons()
    }

    /// Elements to paint as done at the current cursor.
    pub fn settled_now(&self) -> Vec<usize> {
        self.recording
            .settled_at(self.recording.timeline().cursor())
    }

    /// Snapshot of the current cursor without stepping.
    pub fn current_snapshot(&self) -> Snapshot {
        self.recording.timeline().current_snapshot()
    }

    /// One explicit forward step. Cancels autoplay first: a user action
    /// always wins over the timer.
    pub fn step_forward(&mut self) -> Option<Snapshot> {
        self.cancel_autoplay();
        self.recording.timeline_mut().forward()
    }

    /// One explicit backward step. Cancels autoplay first.
    pub fn step_backward(&mut self) -> Option<Snapshot> {
        self.cancel_autoplay();
        self.recording.timeline_mut().backward()
    }

    /// Walks the cursor to `target` by repeated stepping.
    ///
    /// Returns `None` if `target` is past the end of the timeline;
    /// otherwise the snapshot at the target cursor.
    pub fn jump_to(&mut self, target: usize) -> Option<Snapshot> {
        if target > self.recording.timeline().len() {
            return None;
        }
        self.cancel_autoplay();
        let timeline = self.recording.timeline_mut();
        while timeline.cursor() < target {
            timeline.forward();
        }
        while timeline.cursor() > target {
            timeline.backward();
        }
        Some(timeline.current_snapshot())
    }

    /// Applies queued handle commands in order on the owning thread.
    ///
    /// At most one timer tick is honored per drain; ticks that piled up
    /// while a render was in flight are dropped, as is any tick from a
    /// cancelled autoplay generation. Returns the snapshot of the last
    /// command that moved the cursor, if any.
    pub fn drain_pending(&mut self) -> Option<Snapshot> {
        let mut last = None;
        let mut tick_honored = false;
        loop {
            let command = match self.rx.try_recv() {
                Ok(command) => command,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            };
            match command {
                PlayerCommand::StepForward => last = self.step_forward().or(last.take()),
                PlayerCommand::StepBackward => last = self.step_backward().or(last.take()),
                PlayerCommand::JumpTo(target) => last = self.jump_to(target).or(last.take()),
                PlayerCommand::Tick { generation } => {
                    let current = self.generation.load(Ordering::SeqCst);
                    if generation != current || !self.is_playing() || tick_honored {
                        debug!(event = "tick_dropped", generation, current);
                        continue;
                    }
                    tick_honored = true;
                    match self.recording.timeline_mut().forward() {
                        Some(snapshot) => {
                            if self.recording.timeline().at_end() {
                                // Nothing left to play; stop the timer.
                                self.cancel_autoplay();
                            }
                            last = Some(snapshot);
                        }
                        None => self.cancel_autoplay(),
                    }
                }
            }
        }
        last
    }

    fn cancel_autoplay(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.playing.store(false, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("cursor", &self.recording.timeline().cursor())
            .field("total", &self.recording.timeline().len())
            .field("playing", &self.is_playing())
            .finish()
    }
}
