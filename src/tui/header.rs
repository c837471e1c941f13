use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::themes::Theme;
use crate::tui::app::App;

pub const TITLE: &str = "Stack Builder";

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let accent: Color = theme.accent.into();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border.into()));

    let title = Span::styled(format!(" {} ", TITLE), Style::default().fg(accent).bold());
    let right_span = Span::styled(
        format!(" [{}] ", app.wizard.flow().label()),
        Style::default().fg(theme.warning.into()).bold(),
    );

    // Fill the gap with slashes, like a boundary line
    let inner_width = area.width.saturating_sub(2) as usize; // minus borders
    let fill = inner_width.saturating_sub(title.width() + right_span.width());

    let line = Line::from(vec![
        title,
        Span::styled("/".repeat(fill), Style::default().fg(accent)),
        right_span,
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
