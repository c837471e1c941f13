use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::themes::get_theme;
use crate::tui::app::App;
use crate::tui::form;
use crate::tui::header;
use crate::tui::status_bar;
use crate::tui::summary;

/// Main draw function that renders the entire layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = get_theme(app.theme_name());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.base.into())),
        area,
    );

    // Layout: Header(3) | Form + Summary (flex) | StatusBar(1)
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    header::render(frame, chunks[0], app, theme);

    let body = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    form::render(frame, body[0], &app.wizard, &app.list_state, theme);
    summary::render(frame, body[1], &app.wizard, theme);

    status_bar::render(frame, chunks[2], app, theme);
}
