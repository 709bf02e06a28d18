use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "tui-echoword")]
#[command(about = "Hear a sequence letter by letter, then type it back in reverse")]
pub struct Cli {
    /// Catalog manifest (JSON). Defaults to the built-in word list.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory that sample paths are resolved against.
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Play timed silence instead of audio (captions are shown).
    ///
    /// Only changes anything in builds with the `playback` feature; other
    /// builds are always silent.
    #[arg(long, default_value_t = false)]
    pub silent: bool,

    /// Length of one silent cue, in seconds.
    #[arg(long, default_value_t = 0.6, allow_negative_numbers = true)]
    pub cue_secs: f32,

    /// Show the character being voiced during word audio.
    ///
    /// Captions are always on when cues are silent, so this flag only
    /// matters when real audio plays.
    #[arg(long, default_value_t = false)]
    pub captions: bool,

    /// Write logs to this file (logging is off otherwise).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the end-of-game summary as JSON.
    #[arg(long, default_value_t = false)]
    pub summary_json: bool,
}

impl Cli {
    /// Length of one silent cue.
    pub fn cue_len(&self) -> Result<Duration> {
        let len = Duration::try_from_secs_f32(self.cue_secs)
            .with_context(|| format!("--cue-secs {} is not a usable duration", self.cue_secs))?;
        ensure!(!len.is_zero(), "--cue-secs must be greater than zero");
        Ok(len)
    }

    /// Whether to caption voiced characters. Silent cues are unplayable
    /// without captions.
    pub fn captions(&self, silent_backend: bool) -> bool {
        self.captions || self.silent || silent_backend
    }
}
