//! Keyboard input handling for the player.
//!
//! Handles all keyboard shortcuts: playback controls, stepping, speed,
//! reshuffling and the help overlay.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::player::app::PlayerApp;
use crate::player::state::InputResult;

/// Handle a keyboard event.
///
/// `now` is the instant the key was read; it anchors the first automatic
/// tick when playback starts.
pub fn handle_key_event(key: KeyEvent, app: &mut PlayerApp, now: Instant) -> InputResult {
    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return InputResult::Continue;
    }

    let controller = &mut app.controller;
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        // === Playback controls ===
        KeyCode::Char(' ') => controller.toggle(now),
        KeyCode::Right | KeyCode::Char('l') => controller.step_forward(),
        KeyCode::Left | KeyCode::Char('h') => controller.step_backward(),
        KeyCode::Home => controller.seek_start(),
        KeyCode::End => controller.seek_end(),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let speed = controller.speed().faster();
            controller.set_speed(speed.value());
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            let speed = controller.speed().slower();
            controller.set_speed(speed.value());
        }

        // === New input ===
        KeyCode::Char('r') => {
            if let Err(e) = app.reshuffle() {
                warn!("reshuffle failed: {}", e);
            }
        }

        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
    InputResult::Continue
}
