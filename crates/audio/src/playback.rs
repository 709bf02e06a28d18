use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::core::{AudioCue, SampleId, Sound, SoundError};

/// rodio-backed sound service.
///
/// Samples are read and test-decoded when loaded, so a bad file fails at
/// startup rather than mid-game.
pub struct RodioSound {
    // Dropping the stream silences every sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    samples: Vec<Arc<[u8]>>,
}

impl RodioSound {
    pub fn new() -> Result<Self, SoundError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| SoundError::Unavailable(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            samples: Vec::new(),
        })
    }

    fn start(&self, sample: SampleId) -> Option<Sink> {
        let bytes = self.samples.get(sample.0 as usize)?;
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(e) => {
                log::warn!("no sink for sample {}: {e}", sample.0);
                return None;
            }
        };
        match Decoder::new(Cursor::new(Arc::clone(bytes))) {
            Ok(source) => sink.append(source),
            Err(e) => {
                log::warn!("sample {} failed to decode: {e}", sample.0);
                return None;
            }
        }
        Some(sink)
    }
}

impl Sound for RodioSound {
    type Cue = RodioCue;

    fn load(&mut self, path: &Path) -> Result<SampleId, SoundError> {
        let bytes: Arc<[u8]> = fs::read(path)
            .map_err(|source| SoundError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .into();
        Decoder::new(Cursor::new(Arc::clone(&bytes))).map_err(|e| SoundError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.samples.push(bytes);
        Ok(SampleId((self.samples.len() - 1) as u32))
    }

    fn play(&mut self, sample: SampleId) -> RodioCue {
        let sink = self.start(sample);
        if sink.is_none() {
            log::warn!("sample {} skipped", sample.0);
        }
        RodioCue {
            sink,
            stopped: false,
        }
    }
}

/// One playing sample. Dropping the cue stops its sink.
pub struct RodioCue {
    sink: Option<Sink>,
    stopped: bool,
}

impl AudioCue for RodioCue {
    fn is_finished(&self) -> bool {
        self.stopped || self.sink.as_ref().map_or(true, Sink::empty)
    }

    fn stop(&mut self) {
        if let Some(sink) = &self.sink {
            sink.stop();
        }
        self.stopped = true;
    }
}
