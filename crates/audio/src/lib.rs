//! Sound backends for the game core.
//!
//! - [`TimedSound`]: silent backend whose cues last a fixed duration. Needs no
//!   audio device and no sample files, so it doubles as the headless mode.
//! - `RodioSound` (feature `playback`): decodes sample files up front and plays
//!   each cue on its own rodio `Sink`; a cue is finished once its sink drains.

#[cfg(feature = "playback")]
pub mod playback;
pub mod timed;

pub use tui_echoword_core as core;

#[cfg(feature = "playback")]
pub use playback::{RodioCue, RodioSound};
pub use timed::{TimedCue, TimedSound};
