//! Help overlay rendering for the player.
//!
//! Displays a centered help box with all available keyboard shortcuts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "╔═══════════════════════════════════════════╗",
    "║          Quick Sort Studio Help           ║",
    "╠═══════════════════════════════════════════╣",
    "║                                           ║",
    "║  Playback                                 ║",
    "║    Space      Play / Pause                ║",
    "║    ->  / l    Step forward                ║",
    "║    <-  / h    Step back                   ║",
    "║    Home/End   First / last step           ║",
    "║    +/-        Faster / slower             ║",
    "║                                           ║",
    "║  Array                                    ║",
    "║    r          Sort a new random array     ║",
    "║                                           ║",
    "║  Legend                                   ║",
    "║    ▲ pivot      ━ active range            ║",
    "║                                           ║",
    "║  General                                  ║",
    "║    ?          Show this help              ║",
    "║    q / Esc    Quit                        ║",
    "║                                           ║",
    "║         Press any key to close            ║",
    "╚═══════════════════════════════════════════╝",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: u16 = 45;

/// Create a centered rect of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

/// Render the help overlay on top of whatever is in `area`.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rect = centered_rect(HELP_BOX_WIDTH, HELP_LINES.len() as u16, area);
    let lines: Vec<Line> = HELP_LINES.iter().map(|line| Line::raw(*line)).collect();
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme.accent)),
        rect,
    );
}
