//! Terminal runner for the word game (default binary).
//!
//! crossterm for input, the framebuffer presenter for output, and a sound
//! backend picked at startup: rodio when built with `playback`, timed
//! silence with captions otherwise.

mod cli;

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_echoword::audio::TimedSound;
use tui_echoword::core::{CatalogManifest, GameSnapshot, GameState, Sound, WordCatalog};
use tui_echoword::input::{route_key, should_quit};
use tui_echoword::term::{score_line, FrameBuffer, TerminalRenderer, Viewport, WordView};
use tui_echoword::types::TICK_MS;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let manifest = match &cli.catalog {
        Some(path) => CatalogManifest::from_path(path)
            .with_context(|| format!("load catalog {}", path.display()))?,
        None => CatalogManifest::standard(),
    };

    #[cfg(feature = "playback")]
    {
        if !cli.silent {
            match tui_echoword::audio::RodioSound::new() {
                Ok(sound) => return play(sound, &manifest, &cli, cli.captions(false)),
                Err(err) => log::warn!("{err}; falling back to silent cues"),
            }
        }
    }

    let sound = TimedSound::new(cli.cue_len()?);
    play(sound, &manifest, &cli, cli.captions(true))
}

/// Logs go to a file because the terminal is in raw mode while playing.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn play<S: Sound>(mut sound: S, manifest: &CatalogManifest, cli: &Cli, captions: bool) -> Result<()> {
    let catalog = WordCatalog::load(manifest, &cli.assets, &mut sound)
        .with_context(|| format!("load samples from {}", cli.assets.display()))?;
    let mut game = GameState::new(catalog, sound);
    let view = WordView::new().with_captions(captions);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &view);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let summary = game.summary();
    log::info!(
        "session over: {}/{} words, score {:.2}",
        summary.words_completed,
        summary.words,
        summary.score
    );
    if cli.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.finished {
        println!("{}", score_line(summary.score));
    }
    Ok(())
}

fn run<S: Sound>(term: &mut TerminalRenderer, game: &mut GameState<S>, view: &WordView) -> Result<()> {
    game.start();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    if snap.game_over {
                        return Ok(());
                    }
                    if let Some(action) = route_key(game.phase(), key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.update(elapsed.as_secs_f32());
        }
    }
}
