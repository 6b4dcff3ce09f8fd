//! Input handling for the player.
//!
//! Dispatches terminal events to the appropriate handler and returns
//! control flow signals.

mod keyboard;

pub use keyboard::handle_key_event;

use std::time::Instant;

use crossterm::event::{Event, KeyEventKind};

use crate::player::app::PlayerApp;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
///
/// Resize events need no handling: the next frame is laid out against the
/// new terminal size.
pub fn handle_event(event: Event, app: &mut PlayerApp, now: Instant) -> InputResult {
    match event {
        // Windows reports key releases too
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, app, now),
        _ => InputResult::Continue,
    }
}
