//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{DashboardApp, SliderMove};
use crate::views;

/// Dashboard heading.
pub const TITLE: &str = "Dungeons and Dragons Dashboard";

/// Width of the slider sidebar.
const SIDEBAR_WIDTH: u16 = 30;

/// Launch the dashboard.
pub fn run(mut app: DashboardApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut DashboardApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

/// Handle keyboard input.
fn handle_key(app: &mut DashboardApp, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        } else if key.code == KeyCode::Char('q') {
            app.should_quit = true;
        }
        return;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('h') => app.move_slider(SliderMove::LowerMin),
        KeyCode::Char('l') => app.move_slider(SliderMove::RaiseMin),
        KeyCode::Char('H') => app.move_slider(SliderMove::LowerMax),
        KeyCode::Char('L') => app.move_slider(SliderMove::RaiseMax),
        KeyCode::Left if shift => app.move_slider(SliderMove::LowerMax),
        KeyCode::Right if shift => app.move_slider(SliderMove::RaiseMax),
        KeyCode::Left => app.move_slider(SliderMove::LowerMin),
        KeyCode::Right => app.move_slider(SliderMove::RaiseMin),
        KeyCode::Char('r') => app.reroll(),
        KeyCode::Char('0') => app.reset(),
        _ => {}
    }
}

/// Scroll wheel cycles the focused slider.
fn handle_mouse(app: &mut DashboardApp, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.focus_prev(),
        MouseEventKind::ScrollDown => app.focus_next(),
        _ => {}
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(TITLE).bold().centered());
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    views::sidebar::draw(frame, app, body[0]);
    draw_cards(frame, app, body[1]);

    let status = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

/// Summary and chart on top, grid below.
fn draw_cards(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let Some(view) = &app.view else {
        let message = app.error.as_deref().unwrap_or("no data yet");
        let error = Paragraph::new(Line::from(format!("error: {message}")).red())
            .block(crate::shared::card("Error", Color::Red));
        frame.render_widget(error, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(5)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(rows[0]);

    views::summary::draw(frame, view, top[0]);
    views::chart::draw(frame, &view.presentation.chart, top[1]);
    views::grid::draw(frame, &view.presentation.table, rows[1]);
}

fn status_line(app: &DashboardApp) -> String {
    format!(
        " j/k:slider  h/l:min  H/L:max  r:reroll  0:reset  ?:help  q:quit  \u{2502} run #{}",
        app.recomputations
    )
}
