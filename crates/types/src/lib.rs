//! Core types module - shared data structures and constants
//!
//! This crate defines the small vocabulary shared by the game core, the input
//! router, the audio backends and the terminal presenter. Everything here is
//! plain data.
//!
//! # Game Timing Constants
//!
//! Timing values are in seconds unless the name says otherwise:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host loop fixed timestep (~60 FPS) |
//! | `INCORRECT_FADE_SECS` | 3.0 | How long a mismatch mark stays visible |
//! | `EASY_LETTER_GAP_SECS` | 0.5 | Silence between letter cues in normal mode |
//!
//! # Input Alphabet
//!
//! Target words and player input share one alphabet: the digits `0-9` and the
//! lowercase letters `a-z`. The match engine recognizes no other characters.
//!
//! # Examples
//!
//! ```
//! use tui_echoword_types::{is_input_char, Difficulty, Phase};
//!
//! assert!(is_input_char('k'));
//! assert!(is_input_char('7'));
//! assert!(!is_input_char('K'));
//!
//! assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
//! assert_eq!(Phase::Capture.as_str(), "capture");
//! ```

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Seconds an incorrect mark stays on a letter before it clears.
pub const INCORRECT_FADE_SECS: f32 = 3.0;

/// Silence required before each letter cue in normal difficulty.
pub const EASY_LETTER_GAP_SECS: f32 = 0.5;

/// Every character a target word may contain, in catalog order.
pub const INPUT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Whether `c` belongs to the input alphabet (`0-9`, `a-z`).
pub fn is_input_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

/// Macro-state of the game.
///
/// The machine walks `Intro → Transition → WordAudio → Capture` and then loops
/// back to `Transition` for every following word. Game over is a separate
/// terminal flag, not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Waiting for the player to pick a difficulty
    Intro,
    /// "Here is the next sequence" cue is playing
    Transition,
    /// Letters of the current word are being voiced one by one
    WordAudio,
    /// Player types the word back in reverse
    Capture,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Transition => "transition",
            Phase::WordAudio => "wordAudio",
            Phase::Capture => "capture",
        }
    }
}

/// Difficulty chosen on the intro screen.
///
/// Difficulty selects the sample set (normal or hard voice) and the pacing of
/// letter cues. Both modes ask for the letters in reverse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_echoword_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("Normal"), Some(Difficulty::Normal));
    /// assert_eq!(Difficulty::from_str("n"), Some(Difficulty::Normal));
    /// assert_eq!(Difficulty::from_str("H"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" | "n" => Some(Difficulty::Normal),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn is_hard(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

/// Player intents produced by the input router.
///
/// Which keys map to which action depends on the current [`Phase`]: on the
/// intro screen `h`/`n` pick a difficulty, during capture they are letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pick a difficulty (intro only)
    SelectDifficulty(Difficulty),
    /// Name the next letter of the reversed word (capture only)
    Letter(char),
    /// Hear the current word again (capture only)
    Replay,
}
