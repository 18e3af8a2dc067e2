//! "Character Grid" card: the first filtered characters.

use ratatui::prelude::*;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use dd_engine::TablePreview;

use crate::shared::card;

/// Draw the grid card.
pub fn draw(frame: &mut Frame, table: &TablePreview, area: Rect) {
    let block = card("Character Grid", Color::Cyan);

    if table.is_empty() {
        let empty = Paragraph::new(Line::from("No characters match the current filters.").red())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        table
            .columns
            .iter()
            .map(|c| Cell::from(c.as_str()).style(Style::default().fg(Color::Yellow).bold())),
    );

    let rows = table.rows.iter().enumerate().map(|(i, row)| {
        let style = if i % 2 == 0 {
            Style::default()
        } else {
            Style::default().fg(Color::Gray)
        };
        Row::new(row.iter().map(|c| Cell::from(c.as_str()))).style(style)
    });

    let mut widths = vec![Constraint::Min(10)];
    widths.extend(table.columns.iter().skip(1).map(|c| Constraint::Length(c.len() as u16)));

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);
    frame.render_widget(widget, area);
}
