//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole game: the phase machine, the capture and
//! scoring engine, and the catalog of words and samples. Audio is reached only
//! through the [`Sound`] trait, so the core runs the same under a real audio
//! backend, a silent timer, or the deterministic [`ManualSound`] used by tests.
//!
//! # Module Structure
//!
//! - [`catalog`]: JSON manifest, validation, and the loaded [`WordCatalog`]
//! - [`game_state`]: the phase machine ([`GameState`])
//! - [`letter`]: per-character reveal/mismatch state with fade timer
//! - [`scoring`]: time-to-complete score plus mistake/replay counters
//! - [`snapshot`]: presenter-facing copies of the state
//! - [`sound`]: sound service traits, the single cue slot, `ManualSound`
//!
//! # Game Rules
//!
//! - **Intro**: the player picks normal (`n`) or hard (`h`) difficulty
//! - **Transition**: a short cue announces the next word
//! - **Word audio**: each letter of the word is voiced; normal difficulty
//!   leaves half a second of silence before every letter
//! - **Capture**: the player types the word back *in reverse*; misses flash
//!   on the expected letter for three seconds
//! - **Score**: seconds spent per word, summed (lower is better); mistakes and
//!   replays are counted separately
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tui_echoword_core::{CatalogManifest, GameState, ManualSound, WordCatalog};
//! use tui_echoword_core::types::{Difficulty, GameAction, Phase};
//!
//! let mut manifest = CatalogManifest::standard();
//! manifest.words = vec!["ok".to_string()];
//!
//! let mut sound = ManualSound::instant();
//! let catalog = WordCatalog::load(&manifest, Path::new("assets"), &mut sound).unwrap();
//! let mut game = GameState::new(catalog, sound);
//! game.start();
//! game.apply_action(GameAction::SelectDifficulty(Difficulty::Hard));
//!
//! while game.phase() != Phase::Capture {
//!     game.update(0.016);
//! }
//!
//! // "ok" is typed back as "ko".
//! assert!(game.apply_action(GameAction::Letter('k')));
//! assert!(game.apply_action(GameAction::Letter('o')));
//! assert!(game.game_over());
//! ```

pub mod catalog;
pub mod game_state;
pub mod letter;
pub mod scoring;
pub mod snapshot;
pub mod sound;

pub use tui_echoword_types as types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, CatalogManifest, WordCatalog, STANDARD_WORDS};
pub use game_state::GameState;
pub use letter::Letter;
pub use scoring::ScoreBoard;
pub use snapshot::{GameSnapshot, GameSummary, LetterSnapshot};
pub use sound::{AudioCue, CueSlot, ManualCue, ManualSound, SampleId, Sound, SoundError};
