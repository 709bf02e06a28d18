//! Terminal presenter for the word game.
//!
//! Renders a [`core::GameSnapshot`] into a simple styled framebuffer, which
//! [`TerminalRenderer`] diffs and flushes to the terminal.

pub mod fb;
pub mod renderer;
pub mod word_view;

pub use tui_echoword_core as core;
pub use tui_echoword_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use word_view::{letter_style, score_line, Viewport, WordView};
