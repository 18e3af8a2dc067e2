//! "Character Distribution" card: bar chart of the six averages.

use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};

use dd_core::Attribute;
use dd_engine::ChartSpec;

use crate::shared::card;

/// Bar values are scaled by this factor so two decimals survive the
/// integer bar heights.
const SCALE: f64 = 100.0;

/// Draw the chart card.
pub fn draw(frame: &mut Frame, chart: &ChartSpec, area: Rect) {
    let axes = format!(" {} \u{2192} {} ", chart.x_label, chart.y_label);
    let block =
        card("Character Distribution", Color::Blue).title_bottom(Line::from(axes).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 12 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let title = Paragraph::new(Line::from(chart.title.as_str()).bold().centered());
    frame.render_widget(title, chunks[0]);

    if chart.max_value().is_none() {
        let empty = Paragraph::new(Line::from("no data").red().centered());
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let bars: Vec<Bar<'_>> = chart
        .bars
        .iter()
        .zip(Attribute::ALL)
        .map(|(bar, attr)| {
            let value = bar.value.unwrap_or(0.0);
            Bar::default()
                .value(scaled(value))
                .label(Line::from(attr.abbrev()))
                .text_value(format!("{value:.1}"))
                .style(Style::default().fg(Color::LightCyan))
                .value_style(Style::default().fg(Color::Black).bg(Color::LightCyan))
        })
        .collect();

    let count = bars.len().max(1) as u16;
    let gap = 1;
    let bar_width = (chunks[1].width.saturating_sub(gap * count) / count).max(1);
    let max = chart.max_value().map(scaled).unwrap_or(1).max(1);

    let barchart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(max);
    frame.render_widget(barchart, chunks[1]);
}

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * SCALE).round() as u64
}
