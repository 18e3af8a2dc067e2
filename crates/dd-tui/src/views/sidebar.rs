//! Sidebar with the three range sliders.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use dd_core::AttributeRange;
use dd_engine::RangeSlider;

use crate::app::DashboardApp;
use crate::shared::card;

/// Draw the slider sidebar.
pub fn draw(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let block = card("Filters", Color::Magenta);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, slider) in app.sliders.iter().enumerate() {
        let focused = i == app.focus;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if focused { "\u{25b6} " } else { "  " };
        let range = slider.range();

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{} Range", slider.attribute), label_style),
        ]));
        lines.push(track_line(slider, inner.width.saturating_sub(2), focused));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} \u{2013} {}", range.min(), range.max()),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Render a slider track like `──●━━━━●──`.
fn track_line(slider: &RangeSlider, width: u16, focused: bool) -> Line<'static> {
    let width = usize::from(width.max(2));
    let domain = slider.domain();
    let range = slider.range();
    let lo = position(domain, range.min(), width);
    let hi = position(domain, range.max(), width);

    let fill = if focused { Color::Yellow } else { Color::Blue };
    let mut spans = vec![Span::raw("  ")];
    for col in 0..width {
        let span = if col == lo || col == hi {
            Span::styled("\u{25cf}", Style::default().fg(fill).bold())
        } else if col > lo && col < hi {
            Span::styled("\u{2501}", Style::default().fg(fill))
        } else {
            Span::styled("\u{2500}", Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
    }
    Line::from(spans)
}

/// Column of `value` on a track `width` cells wide.
fn position(domain: AttributeRange, value: i32, width: usize) -> usize {
    let span = domain.width().saturating_sub(1);
    if span == 0 || width < 2 {
        return 0;
    }
    let offset = (i64::from(value) - i64::from(domain.min())).max(0) as u64;
    ((offset * (width as u64 - 1)) / span) as usize
}
