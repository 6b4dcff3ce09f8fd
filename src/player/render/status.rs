//! Status line, narration panel and footer for the player.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::player::PlaybackController;
use crate::theme::Theme;
use crate::trace::Step;

/// Key hints shown in the footer.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "play/pause"),
    ("←/→", "step"),
    ("+/-", "speed"),
    ("r", "new array"),
    ("?", "help"),
    ("q", "quit"),
];

/// Text of the status line: run state, step counter, speed and phase.
pub fn status_text(controller: &PlaybackController) -> String {
    let state = if controller.is_running() {
        "⏵ Computing"
    } else {
        "⏸ Paused"
    };
    format!(
        " {}  │  Step: {} / {}  │  Speed: {}%  │  {}",
        state,
        controller.cursor(),
        controller.trace_len().saturating_sub(1),
        controller.speed().percent(),
        controller.current_step().kind().label()
    )
}

/// Render the status line.
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    controller: &PlaybackController,
    theme: &Theme,
) {
    let style = if controller.is_running() {
        theme.accent_style()
    } else {
        theme.text_style()
    };
    frame.render_widget(Paragraph::new(status_text(controller)).style(style), area);
}

/// Render the narration for `step`.
pub fn render_narration(frame: &mut Frame, area: Rect, step: &Step, theme: &Theme) {
    let block = Block::bordered()
        .title(" ℹ ")
        .border_style(theme.text_secondary_style());
    let narration = Paragraph::new(step.narration().to_string())
        .style(theme.text_style())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(narration, area);
}

/// Render a centered footer with keybinding hints.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Line::from(build_footer_spans(FOOTER_KEYS, theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
