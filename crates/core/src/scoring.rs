//! Scoring module - time-to-complete scoring with separate counters
//!
//! The score is the sum of the seconds spent on each word, banked when the
//! word is completed, so lower is better. Mistakes and replays are counted on
//! their own and never change the score.
//!
//! An earlier ruleset added one point per mistake to the score instead of
//! tracking time; it is not implemented here.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBoard {
    score: f32,
    mistakes: u32,
    replays: u32,
    words_completed: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the time spent on a completed word.
    pub fn bank_word(&mut self, elapsed: f32) {
        self.score += elapsed;
        self.words_completed += 1;
    }

    pub fn record_mistake(&mut self) {
        self.mistakes += 1;
    }

    pub fn record_replay(&mut self) {
        self.replays += 1;
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn replays(&self) -> u32 {
        self.replays
    }

    pub fn words_completed(&self) -> u32 {
        self.words_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banking_sums_word_times() {
        let mut board = ScoreBoard::new();
        board.bank_word(1.5);
        board.bank_word(2.25);
        assert_eq!(board.score(), 3.75);
        assert_eq!(board.words_completed(), 2);
    }

    #[test]
    fn mistakes_and_replays_do_not_touch_score() {
        let mut board = ScoreBoard::new();
        board.record_mistake();
        board.record_mistake();
        board.record_replay();
        assert_eq!(board.score(), 0.0);
        assert_eq!(board.mistakes(), 2);
        assert_eq!(board.replays(), 1);
    }
}
