use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::themes::Theme;
use crate::core::questions::AnswerValue;
use crate::core::wizard::Wizard;

/// Side panel listing every answer, redrawn from the wizard on each frame.
pub fn render(frame: &mut Frame, area: Rect, wizard: &Wizard, theme: &Theme) {
    let block = Block::default()
        .title(" Tech Stack ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent.into()))
        .padding(Padding::horizontal(1));

    let lines = summary_lines(&wizard.snapshot(), theme);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn summary_lines(snapshot: &[(&'static str, AnswerValue)], theme: &Theme) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(theme.accent.into());
    let value_style = Style::default().fg(theme.text.into());

    let mut lines = vec![
        Line::from(Span::styled(
            "Your Tech Stack",
            Style::default().fg(theme.text.into()).bold().underlined(),
        )),
        Line::from(""),
    ];
    for (label, value) in snapshot {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", label), label_style),
            Span::styled(value.to_string(), value_style),
        ]));
    }
    lines
}
