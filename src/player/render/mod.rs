//! Rendering components for the player.
//!
//! This module contains all the UI rendering functions for the player:
//! bar chart, timeline, listing, status line, narration, footer and help.

mod bars;
mod code;
mod help;
mod progress;
mod status;

pub use bars::{bar_role, bar_width_for, build_range_marker, render_bars, BarRole, BAR_GAP};
pub use code::{listing_lines, render_listing};
pub use help::{centered_rect, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_timeline_chars, partition_marks, render_timeline};
pub use status::{render_footer, render_narration, render_status_line, status_text, FOOTER_KEYS};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::player::app::PlayerApp;

/// Draw one full frame of the player.
pub fn draw(frame: &mut Frame, app: &PlayerApp) {
    let theme = &app.theme;
    let controller = &app.controller;
    let step = controller.current_step();

    let area = frame.area();
    let [header, timeline, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)]).areas(body);
    let [bars_area, marker_area, narration_area] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(4),
    ])
    .areas(left);

    render_status_line(frame, header, controller, theme);
    render_timeline(frame, timeline, controller.trace(), controller.cursor(), theme);
    render_bars(frame, bars_area, marker_area, step, theme);
    render_narration(frame, narration_area, step, theme);
    render_listing(frame, right, step.source_line(), theme);
    render_footer(frame, footer, theme);

    if app.show_help {
        render_help(frame, area, theme);
    }
}
