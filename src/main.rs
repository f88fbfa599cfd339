//! Terminal falling-block game (default binary).
//!
//! Polls crossterm for input until the next gravity tick, ticks the game,
//! forwards notifications to the bell and the event log, and renders.

use std::cell::Cell;
use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::audio::{cue_for, Audio, TerminalBell};
use blockfall::config::Config;
use blockfall::core::Game;
use blockfall::event_log::EventLog;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;
    let mut event_log = match config.event_log.as_deref() {
        Some(path) => Some(EventLog::create(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, event_log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &Config,
    mut event_log: Option<&mut EventLog<BufWriter<File>>>,
) -> Result<()> {
    let seed = config.effective_seed();
    let mut game = Game::new(seed);
    info!("new game, seed {}", seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let gravity = Duration::from_millis(config.gravity_ms as u64);
    let mut last_tick = Instant::now();
    let bell_pending = Cell::new(false);
    let mut audio = TerminalBell::new(config.bell, || bell_pending.set(true));

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next gravity tick.
        let timeout = gravity
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit with score {}", game.score());
                        return Ok(());
                    }
                    if game.is_game_over() {
                        // Any key starts a new game.
                        game.apply_action(GameAction::Reset);
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= gravity {
            last_tick = Instant::now();
            game.tick();
        }

        for event in game.drain_events() {
            if let Some(cue) = cue_for(&event) {
                audio.play(cue);
            }
            if let Some(log) = event_log.as_deref_mut() {
                log.record(&event, game.score())?;
            }
        }
        if bell_pending.take() {
            term.bell()?;
        }
    }
}
