//! Echoword (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_echoword::{audio,core,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use tui_echoword_audio as audio;
pub use tui_echoword_core as core;
pub use tui_echoword_input as input;
pub use tui_echoword_term as term;
pub use tui_echoword_types as types;
