//! Per-character capture state.

use crate::types::INCORRECT_FADE_SECS;

/// One character of the target word plus its reveal/mismatch state.
///
/// `displayed` and `incorrect` are never both set: revealing a letter clears
/// its mismatch mark, and a revealed letter cannot be marked wrong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letter {
    character: char,
    displayed: bool,
    incorrect: bool,
    incorrect_elapsed: f32,
}

impl Letter {
    pub fn new(character: char) -> Self {
        Self {
            character,
            displayed: false,
            incorrect: false,
            incorrect_elapsed: 0.0,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn displayed(&self) -> bool {
        self.displayed
    }

    pub fn incorrect(&self) -> bool {
        self.incorrect
    }

    /// Seconds since the current mismatch mark appeared.
    pub fn incorrect_elapsed(&self) -> f32 {
        self.incorrect_elapsed
    }

    /// Reveal the letter.
    pub fn mark_correct(&mut self) {
        self.displayed = true;
        self.incorrect = false;
        self.incorrect_elapsed = 0.0;
    }

    /// Show (or restart) the mismatch mark. No-op on a revealed letter.
    pub fn mark_incorrect(&mut self) {
        if self.displayed {
            return;
        }
        self.incorrect = true;
        self.incorrect_elapsed = 0.0;
    }

    /// Advance the mismatch timer; clears the mark once it reaches the fade
    /// threshold. Returns true if the mark cleared on this call.
    pub fn tick_fade(&mut self, elapsed: f32) -> bool {
        if !self.incorrect {
            return false;
        }
        self.incorrect_elapsed += elapsed;
        if self.incorrect_elapsed >= INCORRECT_FADE_SECS {
            self.incorrect = false;
            self.incorrect_elapsed = 0.0;
            return true;
        }
        false
    }

    /// Remaining strength of the mismatch mark in `[0, 1]`.
    ///
    /// 1.0 right after the mistake, approaching 0.0 as the mark fades out.
    pub fn fade_fraction(&self) -> f32 {
        if !self.incorrect {
            return 0.0;
        }
        ((INCORRECT_FADE_SECS - self.incorrect_elapsed) / INCORRECT_FADE_SECS).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_letter_is_hidden() {
        let l = Letter::new('q');
        assert_eq!(l.character(), 'q');
        assert!(!l.displayed());
        assert!(!l.incorrect());
        assert_eq!(l.incorrect_elapsed(), 0.0);
        assert_eq!(l.fade_fraction(), 0.0);
    }

    #[test]
    fn mark_correct_clears_incorrect() {
        let mut l = Letter::new('a');
        l.mark_incorrect();
        l.tick_fade(1.0);
        l.mark_correct();
        assert!(l.displayed());
        assert!(!l.incorrect());
        assert_eq!(l.incorrect_elapsed(), 0.0);
    }

    #[test]
    fn displayed_letter_cannot_be_marked_incorrect() {
        let mut l = Letter::new('a');
        l.mark_correct();
        l.mark_incorrect();
        assert!(l.displayed());
        assert!(!l.incorrect());
    }

    #[test]
    fn repeated_mistake_restarts_timer() {
        let mut l = Letter::new('a');
        l.mark_incorrect();
        l.tick_fade(2.0);
        l.mark_incorrect();
        assert!(l.incorrect());
        assert_eq!(l.incorrect_elapsed(), 0.0);
    }

    #[test]
    fn fade_clears_at_threshold() {
        let mut l = Letter::new('a');
        l.mark_incorrect();
        assert!(!l.tick_fade(2.5));
        assert!(l.incorrect());
        assert_eq!(l.incorrect_elapsed(), 2.5);
        assert!(l.tick_fade(0.5));
        assert!(!l.incorrect());
        assert_eq!(l.incorrect_elapsed(), 0.0);
    }

    #[test]
    fn tick_is_ignored_without_mark() {
        let mut l = Letter::new('a');
        assert!(!l.tick_fade(10.0));
        assert_eq!(l.incorrect_elapsed(), 0.0);
    }

    #[test]
    fn fade_fraction_decreases() {
        let mut l = Letter::new('a');
        l.mark_incorrect();
        assert_eq!(l.fade_fraction(), 1.0);
        l.tick_fade(1.5);
        assert_eq!(l.fade_fraction(), 0.5);
    }
}
