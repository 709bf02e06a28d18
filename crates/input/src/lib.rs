//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The mapping
//! depends on the current phase: `h`/`n` choose a difficulty on the intro
//! screen and are ordinary letters during capture.

pub mod map;

pub use tui_echoword_types as types;

pub use map::{route_key, should_quit};
