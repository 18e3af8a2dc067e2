//! "Character Stats Summary" card: the six formatted averages.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use dd_engine::DashboardView;

use crate::shared::card;

/// Draw the averages card.
pub fn draw(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let block = card("Character Stats Summary", Color::Green);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let no_data = view.summary.is_empty();
    let value_style = if no_data {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    let mut lines: Vec<Line<'_>> = view
        .presentation
        .averages
        .iter()
        .map(|text| match text.split_once(": ") {
            Some((label, value)) => Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                Span::styled(value, value_style),
            ]),
            None => Line::from(text.as_str()),
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{} of {} characters match",
            view.summary.retained.len(),
            view.summary.total
        ),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
