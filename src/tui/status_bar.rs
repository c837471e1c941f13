use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::themes::Theme;
use crate::tui::app::App;

const KEY_HELP: &str = "↑/↓ move · enter select · q/esc quit ";

pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let dim = Style::default().fg(theme.dim_text.into());

    let wizard = &app.wizard;
    let left_text = format!(" {}", progress_label(wizard.cursor(), wizard.reachable().len()));
    let left_style = if wizard.is_complete() {
        Style::default().fg(theme.success.into())
    } else {
        dim
    };

    // Calculate spacing
    let total_width = area.width as usize;
    let left_len = Span::raw(left_text.as_str()).width();
    let right_len = Span::raw(KEY_HELP).width();
    let padding = total_width.saturating_sub(left_len + right_len);

    let line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::styled(" ".repeat(padding), dim),
        Span::styled(KEY_HELP, dim),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn progress_label(cursor: usize, total: usize) -> String {
    if cursor >= total {
        "Done".to_string()
    } else {
        format!("Step {}/{}", cursor + 1, total)
    }
}
