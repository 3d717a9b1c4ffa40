//! Terminal snake runner (default binary).
//!
//! Drives a [`Session`] once per frame, feeds it key edges from crossterm,
//! and hands changed frames to the diffing terminal renderer.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{error, info, warn, LevelFilter};
use simplelog::{Config, WriteLogger};

use tui_snake::core::Session;
use tui_snake::input::{should_quit, KeyTracker, KeyTransition};
use tui_snake::settings::{settings_path, JsonFileStore, Settings};
use tui_snake::term::{TerminalRenderer, Viewport};
use tui_snake::types::FRAME_MS;

const LOG_LEVEL_ENV: &str = "TUI_SNAKE_LOG";
const LOG_FILE_NAME: &str = "tui-snake.log";
const SETTINGS_POLL: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let path = settings_path();
    init_logging(&path);
    info!("starting tui-snake, settings at {}", path.display());

    let settings = load_settings(&path);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, settings, &path));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e:#}");
    }
    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    result
}

/// Log to a file; the terminal owns stdout. Logging is best effort.
fn init_logging(settings: &Path) {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let log_path = settings.with_file_name(LOG_FILE_NAME);
    let init = File::create(&log_path)
        .with_context(|| format!("create {}", log_path.display()))
        .and_then(|file| {
            WriteLogger::init(level, Config::default(), file).context("install logger")
        });
    if let Err(e) = init {
        eprintln!("tui-snake: logging disabled: {e:#}");
    }
}

fn load_settings(path: &Path) -> Settings {
    match JsonFileStore::open(path) {
        Ok(store) => Settings::load(&store),
        Err(e) => {
            warn!("settings unavailable, using defaults: {e:#}");
            Settings::default()
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

fn seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, settings: Settings, path: &Path) -> Result<()> {
    let mut session = Session::new(settings, seed());
    let mut keys = KeyTracker::new();

    let start = Instant::now();
    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();
    let mut last_settings_check = Instant::now();
    let mut settings_mtime = modified(path);

    loop {
        // Input with timeout until next frame.
        let timeout = frame_duration.saturating_sub(last_frame.elapsed());
        if event::poll(timeout).context("poll terminal events")? {
            let now_ms = start.elapsed().as_millis() as u64;
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    match keys.handle_key_event(key, now_ms) {
                        Some(KeyTransition::Down(code)) => {
                            session.key_down(code);
                        }
                        Some(KeyTransition::Up(code)) => {
                            session.key_up(code);
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    session.invalidate();
                }
                _ => {}
            }
        }

        if last_frame.elapsed() < frame_duration {
            continue;
        }
        last_frame = Instant::now();
        let now_ms = start.elapsed().as_millis() as u64;

        for code in keys.update(now_ms) {
            session.key_up(code);
        }

        if last_settings_check.elapsed() >= SETTINGS_POLL {
            last_settings_check = Instant::now();
            let mtime = modified(path);
            if mtime != settings_mtime {
                settings_mtime = mtime;
                info!("settings file changed, reloading");
                session.apply_settings(load_settings(path));
            }
        }

        if let Some(frame) = session.frame(now_ms) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            term.present(&frame, Viewport::new(w, h))?;
        }
    }
}
