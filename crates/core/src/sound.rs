//! Sound service boundary.
//!
//! The game never blocks on audio. Starting a cue returns a handle at once and
//! completion is observed by polling [`AudioCue::is_finished`] on later ticks.
//! At most one cue is in flight at a time; [`CueSlot`] owns it and is cleared
//! explicitly by the state machine.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Opaque handle to a loaded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(pub u32);

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("failed to read sample {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sample {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
}

/// A playing (or finished) sample.
pub trait AudioCue {
    /// Poll whether playback has ended. Stopped cues report finished.
    fn is_finished(&self) -> bool;
    /// Force playback to end.
    fn stop(&mut self);
}

/// Loads samples by path and starts cues.
pub trait Sound {
    type Cue: AudioCue;

    fn load(&mut self, path: &Path) -> Result<SampleId, SoundError>;

    /// Start playback. Never blocks and never fails: a backend that cannot
    /// play returns a cue that is already finished.
    fn play(&mut self, sample: SampleId) -> Self::Cue;
}

/// The single in-flight cue slot.
#[derive(Debug)]
pub struct CueSlot<C> {
    cue: Option<C>,
}

impl<C> Default for CueSlot<C> {
    fn default() -> Self {
        Self { cue: None }
    }
}

impl<C: AudioCue> CueSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cue.is_none()
    }

    /// Occupy the slot.
    ///
    /// # Panics
    ///
    /// Panics if a cue is already in flight.
    pub fn fill(&mut self, cue: C) {
        assert!(self.cue.is_none(), "an audio cue is already in flight");
        self.cue = Some(cue);
    }

    /// Empty the slot if its cue has finished. Returns true if it did.
    pub fn clear_if_finished(&mut self) -> bool {
        match &self.cue {
            Some(cue) if cue.is_finished() => {
                self.cue = None;
                true
            }
            _ => false,
        }
    }

    /// Stop and drop the in-flight cue, if any.
    pub fn stop(&mut self) {
        if let Some(mut cue) = self.cue.take() {
            cue.stop();
        }
    }
}

#[derive(Debug, Default)]
struct ManualState {
    paths: Vec<PathBuf>,
    played: Vec<SampleId>,
    finished: Vec<bool>,
    stopped: Vec<bool>,
    instant: bool,
}

/// Deterministic in-memory [`Sound`] backend.
///
/// Cues stay "playing" until [`ManualSound::finish_all`] is called (or
/// immediately, for [`ManualSound::instant`]). Clones share state, so a test
/// can keep one handle while the game owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualSound {
    state: Rc<RefCell<ManualState>>,
}

impl ManualSound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose cues report finished as soon as they start.
    pub fn instant() -> Self {
        let sound = Self::default();
        sound.state.borrow_mut().instant = true;
        sound
    }

    /// Mark every started cue as finished.
    pub fn finish_all(&self) {
        self.state.borrow_mut().finished.fill(true);
    }

    /// Samples started so far, in order.
    pub fn played(&self) -> Vec<SampleId> {
        self.state.borrow().played.clone()
    }

    pub fn play_count(&self) -> usize {
        self.state.borrow().played.len()
    }

    /// Cues neither finished nor stopped.
    pub fn playing_count(&self) -> usize {
        let st = self.state.borrow();
        st.finished
            .iter()
            .zip(&st.stopped)
            .filter(|(f, s)| !**f && !**s)
            .count()
    }

    pub fn stopped_count(&self) -> usize {
        self.state.borrow().stopped.iter().filter(|s| **s).count()
    }

    pub fn path_of(&self, sample: SampleId) -> Option<PathBuf> {
        self.state.borrow().paths.get(sample.0 as usize).cloned()
    }
}

impl Sound for ManualSound {
    type Cue = ManualCue;

    fn load(&mut self, path: &Path) -> Result<SampleId, SoundError> {
        let mut st = self.state.borrow_mut();
        st.paths.push(path.to_path_buf());
        Ok(SampleId((st.paths.len() - 1) as u32))
    }

    fn play(&mut self, sample: SampleId) -> ManualCue {
        let mut st = self.state.borrow_mut();
        let instant = st.instant;
        st.played.push(sample);
        st.finished.push(instant);
        st.stopped.push(false);
        ManualCue {
            index: st.played.len() - 1,
            state: Rc::clone(&self.state),
        }
    }
}

#[derive(Debug)]
pub struct ManualCue {
    index: usize,
    state: Rc<RefCell<ManualState>>,
}

impl AudioCue for ManualCue {
    fn is_finished(&self) -> bool {
        let st = self.state.borrow();
        st.finished[self.index] || st.stopped[self.index]
    }

    fn stop(&mut self) {
        self.state.borrow_mut().stopped[self.index] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_cues_finish_on_demand() {
        let mut sound = ManualSound::new();
        let id = sound.load(Path::new("a.wav")).unwrap();
        let cue = sound.play(id);
        assert!(!cue.is_finished());
        assert_eq!(sound.playing_count(), 1);

        sound.finish_all();
        assert!(cue.is_finished());
        assert_eq!(sound.playing_count(), 0);
        assert_eq!(sound.played(), vec![id]);
        assert_eq!(sound.path_of(id), Some(PathBuf::from("a.wav")));
    }

    #[test]
    fn instant_cues_are_born_finished() {
        let mut sound = ManualSound::instant();
        let id = sound.load(Path::new("a.wav")).unwrap();
        assert!(sound.play(id).is_finished());
    }

    #[test]
    fn stopped_cue_reports_finished() {
        let mut sound = ManualSound::new();
        let id = sound.load(Path::new("a.wav")).unwrap();
        let mut cue = sound.play(id);
        cue.stop();
        assert!(cue.is_finished());
        assert_eq!(sound.stopped_count(), 1);
    }

    #[test]
    fn slot_clears_only_when_finished() {
        let mut sound = ManualSound::new();
        let id = sound.load(Path::new("a.wav")).unwrap();
        let mut slot = CueSlot::new();
        assert!(slot.is_empty());

        slot.fill(sound.play(id));
        assert!(!slot.clear_if_finished());
        assert!(!slot.is_empty());

        sound.finish_all();
        assert!(slot.clear_if_finished());
        assert!(slot.is_empty());
    }

    #[test]
    fn slot_stop_stops_and_empties() {
        let mut sound = ManualSound::new();
        let id = sound.load(Path::new("a.wav")).unwrap();
        let mut slot = CueSlot::new();
        slot.fill(sound.play(id));
        slot.stop();
        assert!(slot.is_empty());
        assert_eq!(sound.stopped_count(), 1);

        // Stopping an empty slot is harmless.
        slot.stop();
        assert_eq!(sound.stopped_count(), 1);
    }

    #[test]
    #[should_panic(expected = "already in flight")]
    fn slot_rejects_second_cue() {
        let mut sound = ManualSound::new();
        let id = sound.load(Path::new("a.wav")).unwrap();
        let mut slot = CueSlot::new();
        slot.fill(sound.play(id));
        slot.fill(sound.play(id));
    }
}
