use serde::Serialize;

use crate::letter::Letter;
use crate::types::{Difficulty, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterSnapshot {
    pub ch: char,
    pub displayed: bool,
    pub incorrect: bool,
    /// Remaining strength of the mismatch mark, `1.0` fresh to `0.0` gone.
    pub fade: f32,
}

impl From<&Letter> for LetterSnapshot {
    fn from(value: &Letter) -> Self {
        Self {
            ch: value.character(),
            displayed: value.displayed(),
            incorrect: value.incorrect(),
            fade: value.fade_fraction(),
        }
    }
}

/// Read-only view of the game for presenters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub game_over: bool,
    pub word_index: usize,
    pub word_count: usize,
    pub word_len: usize,
    pub letters: Vec<LetterSnapshot>,
    /// Letter the player must name next, if capture is in progress.
    pub selected: Option<usize>,
    /// Letter cues already played for the current word.
    pub audio_progress: usize,
    /// Character whose cue is in flight during word audio.
    pub voicing: Option<char>,
    pub replaying: bool,
    pub score: f32,
    pub mistakes: u32,
    pub replays: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Intro,
            difficulty: Difficulty::Normal,
            game_over: false,
            word_index: 0,
            word_count: 0,
            word_len: 0,
            letters: Vec::new(),
            selected: None,
            audio_progress: 0,
            voicing: None,
            replaying: false,
            score: 0.0,
            mistakes: 0,
            replays: 0,
        }
    }
}

/// End-of-game record printed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameSummary {
    pub difficulty: Difficulty,
    pub words: usize,
    pub words_completed: u32,
    /// Seconds spent across all completed words; lower is better.
    pub score: f32,
    pub mistakes: u32,
    pub replays: u32,
    pub finished: bool,
}
