//! Reference listing panel with the executing line highlighted.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::trace::{LISTING_LANGUAGE, REFERENCE_LISTING};

/// Build the listing lines, highlighting `current` if it is a valid line.
pub fn listing_lines(current: Option<usize>, theme: &Theme) -> Vec<Line<'static>> {
    REFERENCE_LISTING
        .iter()
        .enumerate()
        .map(|(i, source)| {
            let active = current == Some(i);
            let gutter = format!("{}{:>2}  ", if active { '▶' } else { ' ' }, i + 1);
            let style = if active {
                theme.accent_bold_style()
            } else {
                theme.text_secondary_style()
            };
            Line::from(vec![
                Span::styled(gutter, theme.text_secondary_style()),
                Span::styled(source.to_string(), style),
            ])
        })
        .collect()
}

/// Render the listing panel.
pub fn render_listing(frame: &mut Frame, area: Rect, current: Option<usize>, theme: &Theme) {
    let block = Block::bordered()
        .title(format!(" Exec Console · {} ", LISTING_LANGUAGE))
        .border_style(theme.text_secondary_style());
    let listing = Paragraph::new(listing_lines(current, theme)).block(block);
    frame.render_widget(listing, area);
}
