//! WordView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. The host renders into one reused framebuffer per frame.

use crate::core::{GameSnapshot, LetterSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Phase;

pub const INTRO_TEXT: &str = "Press H for hard difficulty, press N for normal difficulty";
pub const TRANSITION_TEXT: &str = "Here is the next sequence...";
pub const LISTEN_TEXT: &str = "Listen...";
pub const GAME_OVER_TEXT: &str = "Game over!";

const CORRECT: Rgb = Rgb::new(100, 220, 120);
const SELECTED: Rgb = Rgb::new(240, 220, 80);
const INCORRECT: Rgb = Rgb::new(220, 60, 60);
const MUTED: Rgb = Rgb::new(130, 130, 140);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordView {
    /// Show the character being voiced during word audio.
    captions: bool,
}

impl WordView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_captions(mut self, captions: bool) -> Self {
        self.captions = captions;
        self
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
        if viewport.height == 0 {
            return;
        }

        let mid = viewport.height / 2;
        let text = CellStyle::default();

        if snap.game_over {
            self.draw_game_over(fb, snap, mid);
            return;
        }

        match snap.phase {
            Phase::Intro => fb.put_str_centered(mid, INTRO_TEXT, text.bold()),
            Phase::Transition => fb.put_str_centered(mid, TRANSITION_TEXT, text),
            Phase::WordAudio => self.draw_word_audio(fb, snap, mid),
            Phase::Capture => self.draw_capture(fb, snap, mid),
        }

        self.draw_status(fb, snap, viewport.height - 1);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_word_audio(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, mid: u16) {
        fb.put_str_centered(mid.saturating_sub(1), LISTEN_TEXT, CellStyle::default().bold());

        let progress: String = (0..snap.word_len)
            .map(|i| if i < snap.audio_progress { '●' } else { '·' })
            .collect();
        fb.put_str_centered(mid + 1, &progress, CellStyle::fg(MUTED));

        if self.captions {
            if let Some(ch) = snap.voicing {
                let caption = ch.to_string();
                fb.put_str_centered(mid + 3, &caption, CellStyle::fg(SELECTED).bold());
            }
        }
    }

    fn draw_capture(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, mid: u16) {
        // One glyph per letter, one blank column between glyphs.
        let span = (snap.letters.len() as u16).saturating_mul(2).saturating_sub(1);
        let start_x = fb.width().saturating_sub(span) / 2;

        for (i, letter) in snap.letters.iter().enumerate() {
            let x = start_x.saturating_add(i as u16 * 2);
            let selected = snap.selected == Some(i);
            let glyph = if letter.displayed { letter.ch } else { '?' };
            fb.put_char(x, mid, glyph, letter_style(letter, selected));
            if selected {
                fb.put_char(x, mid + 1, '^', CellStyle::fg(SELECTED));
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, mid: u16) {
        let bold = CellStyle::fg(Rgb::WHITE).bold();
        fb.put_str_centered(mid.saturating_sub(1), GAME_OVER_TEXT, bold);
        fb.put_str_centered(mid, &score_line(snap.score), bold);
        let counters = format!("mistakes {}  replays {}", snap.mistakes, snap.replays);
        fb.put_str_centered(mid + 2, &counters, CellStyle::fg(MUTED));
        fb.put_str_centered(mid + 4, "press any key", CellStyle::fg(MUTED).dim());
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, y: u16) {
        let style = CellStyle::fg(MUTED);
        let hint = match snap.phase {
            Phase::Intro => "h/n: difficulty  esc: quit",
            Phase::Capture => "type the sequence  space: replay  esc: quit",
            Phase::Transition | Phase::WordAudio => "esc: quit",
        };

        let mut line = String::new();
        if snap.phase != Phase::Intro {
            let shown = (snap.word_index + 1).min(snap.word_count);
            line.push_str(&format!(
                "word {}/{}  {}  mistakes {}  replays {}",
                shown,
                snap.word_count,
                snap.difficulty.as_str(),
                snap.mistakes,
                snap.replays
            ));
            if snap.replaying {
                line.push_str("  (replay)");
            }
            line.push_str("  ");
        }
        line.push_str(hint);
        fb.put_str(1, y, &line, style);
    }
}

/// Final score line, as shown on the game-over screen.
pub fn score_line(score: f32) -> String {
    format!("Your score was: {score:.2}")
}

/// Color for one capture glyph.
///
/// A correct letter is green. A mismatch mark is red blended toward white as
/// it fades, and wins over the selection highlight.
pub fn letter_style(letter: &LetterSnapshot, selected: bool) -> CellStyle {
    if letter.displayed {
        CellStyle::fg(CORRECT).bold()
    } else if letter.incorrect {
        CellStyle::fg(INCORRECT.lerp(Rgb::WHITE, 1.0 - letter.fade)).bold()
    } else if selected {
        CellStyle::fg(SELECTED).bold()
    } else {
        CellStyle::default()
    }
}
