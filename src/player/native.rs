//! Interactive terminal player
//!
//! Owns the terminal for the duration of a session and drives the
//! controller: each iteration draws a frame, waits for input no longer than
//! the time left until the next automatic tick, then fires any due tick.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::player::app::PlayerApp;
use crate::player::input::handle_event;
use crate::player::render;
use crate::player::state::InputResult;

/// Upper bound on how long the loop blocks waiting for input while paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Puts the terminal in raw/alternate-screen mode and restores it on drop,
/// including when the loop exits through `?` or a panic unwinds.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// How long to wait for input before the loop must run again.
fn poll_timeout(app: &PlayerApp, now: Instant) -> Duration {
    app.controller
        .time_until_tick(now)
        .map_or(IDLE_POLL, |left| left.min(IDLE_POLL))
}

/// Run the player until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_player(app: &mut PlayerApp) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to open terminal")?;
    terminal.clear()?;

    info!(steps = app.controller.trace_len(), "player started");

    loop {
        terminal.draw(|frame| render::draw(frame, app))?;

        if event::poll(poll_timeout(app, Instant::now()))? {
            let ev = event::read()?;
            if handle_event(ev, app, Instant::now()) == InputResult::Quit {
                break;
            }
        }

        if app.controller.tick(Instant::now()) {
            debug!(cursor = app.controller.cursor(), "tick");
        }
    }

    info!("player closed");
    Ok(())
}
