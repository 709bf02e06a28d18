//! Game state module - the phase machine and capture engine
//!
//! [`GameState`] walks the phases `Intro → Transition → WordAudio → Capture`
//! and loops back to `Transition` for each following word. It owns the letter
//! records, the match order and the single in-flight audio cue; the host calls
//! [`GameState::update`] once per frame and routes player input through
//! [`GameState::apply_action`].
//!
//! Calling a phase-specific operation outside its phase (advancing word audio
//! while capturing, matching past the end of a word) is a programming error
//! and panics. Input handlers are the exception: they ignore keys that arrive
//! in the wrong phase and report that nothing happened.

use crate::catalog::WordCatalog;
use crate::letter::Letter;
use crate::scoring::ScoreBoard;
use crate::snapshot::{GameSnapshot, GameSummary, LetterSnapshot};
use crate::sound::{CueSlot, Sound};
use crate::types::*;

/// Capture clock parked while a replay is playing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ReplayState {
    banked: f32,
    listened: f32,
}

pub struct GameState<S: Sound> {
    catalog: WordCatalog,
    sound: S,
    cue: CueSlot<S::Cue>,
    phase: Phase,
    difficulty: Difficulty,
    current_word: usize,
    /// Letters of the match order already named.
    current_matched: usize,
    /// Next letter to voice during word audio.
    current_audio_letter: usize,
    letters: Vec<Letter>,
    match_order: Vec<usize>,
    /// Silence gap during word audio, time-to-complete during capture.
    time_elapsed: f32,
    scores: ScoreBoard,
    replay: Option<ReplayState>,
    started: bool,
    game_over: bool,
}

impl<S: Sound> GameState<S> {
    pub fn new(catalog: WordCatalog, sound: S) -> Self {
        Self {
            catalog,
            sound,
            cue: CueSlot::new(),
            phase: Phase::Intro,
            difficulty: Difficulty::Normal,
            current_word: 0,
            current_matched: 0,
            current_audio_letter: 0,
            letters: Vec::new(),
            match_order: Vec::new(),
            time_elapsed: 0.0,
            scores: ScoreBoard::new(),
            replay: None,
            started: false,
            game_over: false,
        }
    }

    /// Play the intro cue. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let cue = self.sound.play(self.catalog.intro());
        self.cue.fill(cue);
        log::info!("intro started ({} words)", self.catalog.len());
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_capturing(&self) -> bool {
        self.phase == Phase::Capture
    }

    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    pub fn cue_in_flight(&self) -> bool {
        !self.cue.is_empty()
    }

    pub fn current_word(&self) -> usize {
        self.current_word
    }

    pub fn current_matched(&self) -> usize {
        self.current_matched
    }

    pub fn current_audio_letter(&self) -> usize {
        self.current_audio_letter
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn match_order(&self) -> &[usize] {
        &self.match_order
    }

    pub fn time_elapsed(&self) -> f32 {
        self.time_elapsed
    }

    pub fn score(&self) -> f32 {
        self.scores.score()
    }

    pub fn mistakes(&self) -> u32 {
        self.scores.mistakes()
    }

    pub fn replays(&self) -> u32 {
        self.scores.replays()
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    pub fn word_count(&self) -> usize {
        self.catalog.len()
    }

    /// Index of the letter the player must name next.
    pub fn current_selected(&self) -> Option<usize> {
        self.match_order.get(self.current_matched).copied()
    }

    fn word(&self) -> &str {
        &self.catalog.words()[self.current_word]
    }

    fn word_len(&self) -> usize {
        self.word().len()
    }

    // Catalog words are validated to the ASCII input alphabet.
    fn char_at(&self, index: usize) -> char {
        self.word().as_bytes()[index] as char
    }

    /// Per-frame update. Evaluates at most one phase-advancing condition.
    pub fn update(&mut self, elapsed: f32) {
        if self.game_over {
            return;
        }

        match self.phase {
            Phase::Intro => {
                self.cue.clear_if_finished();
            }
            Phase::Transition => {
                if self.advance_transition() {
                    self.time_elapsed = 0.0;
                    self.current_audio_letter = 0;
                    self.phase = Phase::WordAudio;
                    log::info!(
                        "word {}/{}: playing audio",
                        self.current_word + 1,
                        self.catalog.len()
                    );
                }
            }
            Phase::WordAudio => {
                if let Some(replay) = self.replay.as_mut() {
                    replay.listened += elapsed;
                }
                if self.replay.is_some() {
                    self.tick_incorrect_fade(elapsed);
                }
                self.advance_word_audio(elapsed);
            }
            Phase::Capture => {
                self.tick_incorrect_fade(elapsed);
                self.time_elapsed += elapsed;
            }
        }
    }

    /// Pick a difficulty on the intro screen.
    ///
    /// Stops the intro cue and moves to `Transition`. Returns false (and does
    /// nothing) outside the intro.
    pub fn handle_difficulty_select(&mut self, difficulty: Difficulty) -> bool {
        if self.game_over || self.phase != Phase::Intro {
            return false;
        }
        self.difficulty = difficulty;
        self.cue.stop();
        self.time_elapsed = 0.0;
        self.phase = Phase::Transition;
        log::info!("difficulty selected: {}", difficulty.as_str());
        true
    }

    /// Start the transition cue, or report that it has finished.
    ///
    /// Returns true on the call that observes the cue finished; the slot is
    /// empty afterwards.
    pub fn advance_transition(&mut self) -> bool {
        assert!(
            !self.is_capturing(),
            "transition audio cannot play while capturing input"
        );
        if self.cue.is_empty() {
            let cue = self.sound.play(self.catalog.transition());
            self.cue.fill(cue);
            return false;
        }
        self.cue.clear_if_finished()
    }

    /// Voice the current word one letter at a time.
    ///
    /// A finished cue advances to the next letter. With the slot empty, hard
    /// difficulty starts the next cue at once; normal difficulty first waits
    /// for [`EASY_LETTER_GAP_SECS`] of silence, accumulating `elapsed` and
    /// returning until it has. Once every letter has played the machine enters
    /// capture (or resumes it after a replay).
    ///
    /// # Panics
    ///
    /// Panics if called while capturing, or if the catalog cannot voice the
    /// current letter.
    pub fn advance_word_audio(&mut self, elapsed: f32) {
        assert!(
            !self.is_capturing(),
            "word audio cannot advance while capturing input"
        );
        let len = self.word_len();
        assert!(
            self.current_audio_letter < len,
            "audio letter {} out of bounds for word of length {}",
            self.current_audio_letter,
            len
        );

        if !self.cue.is_empty() {
            if self.cue.clear_if_finished() {
                self.current_audio_letter += 1;
            }
        } else {
            if !self.difficulty.is_hard() {
                if self.time_elapsed < EASY_LETTER_GAP_SECS {
                    self.time_elapsed += elapsed;
                    return;
                }
                self.time_elapsed = 0.0;
            }
            let ch = self.char_at(self.current_audio_letter);
            let sample = self
                .catalog
                .sample(ch, self.difficulty)
                .unwrap_or_else(|| {
                    panic!(
                        "catalog has no {} sample for {ch:?}",
                        self.difficulty.as_str()
                    )
                });
            log::debug!(
                "voicing letter {}/{} ({ch:?})",
                self.current_audio_letter + 1,
                len
            );
            let cue = self.sound.play(sample);
            self.cue.fill(cue);
        }

        if self.current_audio_letter == len {
            self.finish_word_audio();
        }
    }

    fn finish_word_audio(&mut self) {
        match self.replay.take() {
            Some(replay) => {
                self.time_elapsed = replay.banked + replay.listened;
                self.phase = Phase::Capture;
                log::debug!("replay finished, capture resumed");
            }
            None => self.begin_capture(),
        }
    }

    /// Build the letter records and match order for the current word and
    /// start accepting input.
    pub fn begin_capture(&mut self) {
        let word = &self.catalog.words()[self.current_word];
        let len = word.len();

        // Both difficulties ask for the word backwards. A shuffled order for
        // hard mode was planned but is not implemented.
        self.match_order.clear();
        self.match_order.extend((0..len).rev());

        self.letters.clear();
        self.letters.extend(word.chars().map(Letter::new));

        self.current_matched = 0;
        self.time_elapsed = 0.0;
        self.phase = Phase::Capture;
        log::info!("word {}/{}: capture", self.current_word + 1, self.catalog.len());
    }

    /// Whether `c` is the character expected next. Pure predicate.
    pub fn match_letter(&self, c: char) -> bool {
        let index = self.match_order[self.current_matched];
        self.letters[index].character() == c
    }

    /// Reveal the expected letter.
    pub fn mark_correct(&mut self) {
        let index = self.match_order[self.current_matched];
        self.letters[index].mark_correct();
    }

    /// Flag the expected letter as missed and restart its fade timer.
    pub fn mark_incorrect(&mut self) {
        let index = self.match_order[self.current_matched];
        self.letters[index].mark_incorrect();
    }

    pub fn advance_match(&mut self) {
        assert!(
            self.current_matched < self.match_order.len(),
            "word already fully matched"
        );
        self.current_matched += 1;
    }

    pub fn word_complete(&self) -> bool {
        self.current_matched == self.word_len()
    }

    /// Bank the word's time and move on. Returns true if the game just ended.
    pub fn advance_word(&mut self) -> bool {
        assert!(!self.game_over, "game is already over");
        self.scores.bank_word(self.time_elapsed);
        log::info!(
            "word {}/{} complete in {:.2}s",
            self.current_word + 1,
            self.catalog.len(),
            self.time_elapsed
        );

        self.time_elapsed = 0.0;
        self.current_matched = 0;
        self.letters.clear();
        self.match_order.clear();
        self.current_word += 1;

        if self.current_word == self.catalog.len() {
            self.game_over = true;
            log::info!(
                "game over: score {:.2}, {} mistakes, {} replays",
                self.scores.score(),
                self.scores.mistakes(),
                self.scores.replays()
            );
            return true;
        }
        self.phase = Phase::Transition;
        false
    }

    /// Rewind word audio to the first letter.
    pub fn begin_playing_word_audio(&mut self) {
        self.current_audio_letter = 0;
    }

    /// Age every mismatch mark, clearing those past the fade threshold.
    pub fn tick_incorrect_fade(&mut self, elapsed: f32) {
        for letter in &mut self.letters {
            letter.tick_fade(elapsed);
        }
    }

    /// Route a typed character through the capture engine.
    ///
    /// Returns whether it matched. Keys outside capture and characters outside
    /// the input alphabet are ignored and return false without counting a
    /// mistake.
    pub fn handle_character_input(&mut self, c: char) -> bool {
        if self.game_over || self.phase != Phase::Capture || !is_input_char(c) {
            return false;
        }

        if self.match_letter(c) {
            log::debug!("matched {c:?}");
            self.mark_correct();
            self.advance_match();
            if self.word_complete() && !self.advance_word() {
                self.begin_playing_word_audio();
            }
            true
        } else {
            log::debug!("mismatch {c:?}");
            self.mark_incorrect();
            self.scores.record_mistake();
            false
        }
    }

    /// Play the current word again without losing capture progress.
    pub fn handle_replay_request(&mut self) -> bool {
        if self.game_over || self.phase != Phase::Capture || !self.cue.is_empty() {
            return false;
        }
        self.scores.record_replay();
        self.replay = Some(ReplayState {
            banked: self.time_elapsed,
            listened: 0.0,
        });
        self.time_elapsed = 0.0;
        self.current_audio_letter = 0;
        self.phase = Phase::WordAudio;
        log::info!("replay #{}", self.scores.replays());
        true
    }

    /// Apply a routed player action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectDifficulty(d) => self.handle_difficulty_select(d),
            GameAction::Letter(c) => {
                // A miss still changes state (mistake, mark).
                let before = self.scores.mistakes();
                self.handle_character_input(c) || self.scores.mistakes() != before
            }
            GameAction::Replay => self.handle_replay_request(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.difficulty = self.difficulty;
        out.game_over = self.game_over;
        out.word_index = self.current_word;
        out.word_count = self.catalog.len();
        out.word_len = self.catalog.word(self.current_word).map_or(0, str::len);
        out.letters.clear();
        out.letters
            .extend(self.letters.iter().map(LetterSnapshot::from));
        out.selected = self.current_selected();
        out.audio_progress = self.current_audio_letter;
        out.voicing = if !self.game_over && self.phase == Phase::WordAudio && !self.cue.is_empty() {
            Some(self.char_at(self.current_audio_letter))
        } else {
            None
        };
        out.replaying = self.replay.is_some();
        out.score = self.scores.score();
        out.mistakes = self.scores.mistakes();
        out.replays = self.scores.replays();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            difficulty: self.difficulty,
            words: self.catalog.len(),
            words_completed: self.scores.words_completed(),
            score: self.scores.score(),
            mistakes: self.scores.mistakes(),
            replays: self.scores.replays(),
            finished: self.game_over,
        }
    }
}
