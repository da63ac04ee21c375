//! stepviz Core - Frame model and timeline engine
//!
//! This crate provides the fundamental abstractions for stepviz:
//! - Motions and frames describing discrete visual-state transitions
//! - The recorder used by instrumentation adapters to build a frame log
//! - The timeline engine with exact forward/backward playback
//! - Render snapshots delivered to the drawing layer

pub mod error;
pub mod frame;
pub mod motion;
pub mod recorder;
pub mod timeline;

pub use error::FrameError;
pub use frame::{Frame, Pointer};
pub use motion::{Direction, Motion};
pub use recorder::{Recorder, Recording, SettledAt};
pub use timeline::{Snapshot, Timeline};
