use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::{AudioCue, SampleId, Sound, SoundError};

/// Silent backend: every cue "plays" for the same fixed duration.
#[derive(Debug, Clone)]
pub struct TimedSound {
    cue_len: Duration,
    paths: Vec<PathBuf>,
}

impl TimedSound {
    pub fn new(cue_len: Duration) -> Self {
        Self {
            cue_len,
            paths: Vec::new(),
        }
    }

    pub fn cue_len(&self) -> Duration {
        self.cue_len
    }

    /// Path a sample was registered under.
    pub fn path_of(&self, sample: SampleId) -> Option<&Path> {
        self.paths.get(sample.0 as usize).map(PathBuf::as_path)
    }
}

impl Sound for TimedSound {
    type Cue = TimedCue;

    // Files are never opened: the silent backend only needs stable ids.
    fn load(&mut self, path: &Path) -> Result<SampleId, SoundError> {
        self.paths.push(path.to_path_buf());
        Ok(SampleId((self.paths.len() - 1) as u32))
    }

    fn play(&mut self, sample: SampleId) -> TimedCue {
        log::debug!(
            "silent cue {:?} for {:?}",
            self.path_of(sample),
            self.cue_len
        );
        TimedCue {
            ends_at: Instant::now() + self.cue_len,
            stopped: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimedCue {
    ends_at: Instant,
    stopped: bool,
}

impl AudioCue for TimedCue {
    fn is_finished(&self) -> bool {
        self.stopped || Instant::now() >= self.ends_at
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_cue_is_finished_at_once() {
        let mut sound = TimedSound::new(Duration::ZERO);
        let id = sound.load(Path::new("missing/file.wav")).unwrap();
        assert!(sound.play(id).is_finished());
    }

    #[test]
    fn long_cue_runs_until_stopped() {
        let mut sound = TimedSound::new(Duration::from_secs(3600));
        let id = sound.load(Path::new("a.wav")).unwrap();
        let mut cue = sound.play(id);
        assert!(!cue.is_finished());
        cue.stop();
        assert!(cue.is_finished());
    }

    #[test]
    fn ids_follow_load_order() {
        let mut sound = TimedSound::new(Duration::ZERO);
        let a = sound.load(Path::new("a.wav")).unwrap();
        let b = sound.load(Path::new("b.wav")).unwrap();
        assert_eq!(a, SampleId(0));
        assert_eq!(b, SampleId(1));
        assert_eq!(sound.path_of(b), Some(Path::new("b.wav")));
        assert_eq!(sound.path_of(SampleId(9)), None);
    }
}
