//! Timeline bar for the player.
//!
//! Displays the cursor position within the trace, with a marker wherever a
//! partition finished.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;
use crate::trace::{StepKind, Trace};

/// Positions (step indices) of every `PartitionDone` step.
pub fn partition_marks(trace: &Trace) -> Vec<usize> {
    trace
        .iter()
        .enumerate()
        .filter(|(_, step)| step.kind() == StepKind::PartitionDone)
        .map(|(i, _)| i)
        .collect()
}

/// Lay out `bar_width` timeline cells for `cursor` out of `last`.
///
/// Returns the cells and how many of them lie before the playhead.
pub fn build_timeline_chars(
    bar_width: usize,
    cursor: usize,
    last: usize,
    marks: &[usize],
) -> (Vec<char>, usize) {
    let progress = if last > 0 {
        (cursor as f64 / last as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    for &mark in marks {
        let pos = if last > 0 {
            ((mark as f64 / last as f64) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width && bar[pos] != '⏺' {
            bar[pos] = '◆';
        }
    }

    (bar, filled)
}

/// Render the timeline into a single-row `area`.
pub fn render_timeline(frame: &mut Frame, area: Rect, trace: &Trace, cursor: usize, theme: &Theme) {
    let last = trace.last_index();
    let counter = format!(" {}/{}", cursor, last);
    let bar_width = (area.width as usize).saturating_sub(counter.len() + 1);
    let (bar, filled) = build_timeline_chars(bar_width, cursor, last, &partition_marks(trace));

    let mut spans = Vec::with_capacity(bar.len() + 2);
    spans.push(Span::raw(" "));
    for (i, &c) in bar.iter().enumerate() {
        let span = if c == '◆' {
            Span::styled(c.to_string(), Style::default().fg(theme.bar_pivot))
        } else if i < filled {
            Span::styled("━", theme.accent_style())
        } else if i == filled {
            Span::styled(c.to_string(), theme.text_style())
        } else {
            Span::styled(c.to_string(), theme.text_secondary_style())
        };
        spans.push(span);
    }
    spans.push(Span::styled(counter, theme.text_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
