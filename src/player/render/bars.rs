//! Bar chart rendering for the player.
//!
//! One bar per array element, colored by its role in the current step,
//! with a marker line under the active range.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::trace::{ActiveRange, Step, StepKind};

/// Gap between bars, in columns.
pub const BAR_GAP: u16 = 1;

/// How a bar should be drawn for a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    /// Outside the active range
    Idle,
    /// Inside the active range
    InRange,
    /// Under inspection by `i` or `j`
    Selected,
    /// The pivot
    Pivot,
    /// Sorting is complete
    Sorted,
}

/// Role of position `idx` in `step`.
///
/// Only positions inside the active range are highlighted; the pivot wins
/// over the pointers.
pub fn bar_role(step: &Step, idx: usize) -> BarRole {
    if step.kind() == StepKind::Complete {
        return BarRole::Sorted;
    }
    match step.active_range() {
        Some(range) if range.contains(idx) => {
            if step.pivot_index() == Some(idx) {
                BarRole::Pivot
            } else if step.is_selected(idx) {
                BarRole::Selected
            } else {
                BarRole::InRange
            }
        }
        _ => BarRole::Idle,
    }
}

fn role_color(role: BarRole, theme: &Theme) -> Color {
    match role {
        BarRole::Idle => theme.bar_idle,
        BarRole::InRange => theme.bar_range,
        BarRole::Selected => theme.bar_selected,
        BarRole::Pivot => theme.bar_pivot,
        BarRole::Sorted => theme.bar_sorted,
    }
}

/// Widest bar that lets `count` bars plus gaps fit into `width` columns.
pub fn bar_width_for(width: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    let per_bar = width.saturating_add(BAR_GAP) / count;
    per_bar.saturating_sub(BAR_GAP).max(1)
}

/// Build the marker line drawn under the bars.
///
/// Bars inside `range` are underlined with `━`, the pivot with `▲`.
pub fn build_range_marker(
    count: usize,
    range: ActiveRange,
    pivot: Option<usize>,
    bar_width: u16,
) -> String {
    let bar_width = usize::from(bar_width);
    let gap = usize::from(BAR_GAP);
    let mut line = String::with_capacity(count * (bar_width + gap) * 3);
    for idx in 0..count {
        if idx > 0 {
            line.extend(std::iter::repeat(' ').take(gap));
        }
        let c = if pivot == Some(idx) && range.contains(idx) {
            '▲'
        } else if range.contains(idx) {
            '━'
        } else {
            ' '
        };
        line.extend(std::iter::repeat(c).take(bar_width));
    }
    line
}

/// Render the bar chart into `area` and the range marker into `marker_area`.
pub fn render_bars(frame: &mut Frame, area: Rect, marker_area: Rect, step: &Step, theme: &Theme) {
    let block = Block::bordered()
        .title(" Divide & Conquer · Partitioning ")
        .border_style(theme.text_secondary_style());
    let inner = block.inner(area);

    let values = step.array();
    let bar_width = bar_width_for(inner.width, values.len());
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let color = role_color(bar_role(step, idx), theme);
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();
    let ceiling = values.iter().copied().max().unwrap_or(1).max(1) as u64;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(ceiling);
    frame.render_widget(chart, area);

    if step.kind() == StepKind::Complete {
        return;
    }
    if let Some(range) = step.active_range() {
        let marker = build_range_marker(values.len(), range, step.pivot_index(), bar_width);
        let marker_rect = Rect {
            x: inner.x,
            width: inner.width,
            ..marker_area
        };
        frame.render_widget(
            Paragraph::new(marker).style(Style::default().fg(theme.bar_pivot)),
            marker_rect,
        );
    }
}
