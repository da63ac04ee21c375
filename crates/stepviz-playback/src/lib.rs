//! stepviz Playback - Single-owner playback driver
//!
//! This crate drives a sealed recording:
//! - [`Player`] owns the cursor and position table on one thread
//! - [`PlayerHandle`] queues commands from other threads
//! - [`AutoplayTimer`] ticks the player forward at a fixed interval,
//!   with immediate, tick-safe cancellation

mod autoplay;
mod handle;
mod player;

pub use autoplay::AutoplayTimer;
pub use handle::{PlayerCommand, PlayerHandle};
pub use player::Player;
