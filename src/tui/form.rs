use ratatui::prelude::*;
use ratatui::widgets::*;
use std::ops::Range;

use crate::config::themes::Theme;
use crate::core::questions::QuestionSpec;
use crate::core::wizard::Wizard;
use crate::tui::question_list::{self, QuestionListState};

const COMPLETION_HEIGHT: u16 = 6;

/// Render the reachable questions, top to bottom. The focused one gets an
/// interactive list; the others take one line each with their answer or
/// default. When the column is too short, rows are dropped around the
/// focused question so its options always stay on screen.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    wizard: &Wizard,
    list_state: &QuestionListState,
    theme: &Theme,
) {
    let questions = wizard.reachable();
    let cursor = wizard.cursor();
    let inner = area.inner(Margin::new(1, 1));

    // Once complete, the cursor points at the completion panel row.
    let mut heights: Vec<u16> = questions
        .iter()
        .enumerate()
        .map(|(i, spec)| row_height(spec, i == cursor))
        .collect();
    if wizard.is_complete() {
        heights.push(COMPLETION_HEIGHT);
    }

    let visible = visible_rows(&heights, cursor, inner.height);
    let mut constraints: Vec<Constraint> = heights[visible.clone()]
        .iter()
        .map(|&h| Constraint::Length(h))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    for (row, i) in rows.iter().zip(visible) {
        match questions.get(i) {
            Some(spec) => render_question(frame, *row, spec, i, wizard, list_state, theme),
            None => render_completion(frame, *row, wizard, theme),
        }
    }
}

fn row_height(spec: &QuestionSpec, focused: bool) -> u16 {
    if focused {
        1 + spec.option_count() as u16
    } else {
        1
    }
}

/// Window of rows that fits in `available`, always containing `focus` and
/// growing one row up and one row down at a time.
fn visible_rows(heights: &[u16], focus: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let focus = focus.min(heights.len() - 1);
    let (mut start, mut end) = (focus, focus + 1);
    let mut used = heights[focus];

    loop {
        let mut grew = false;
        if start > 0 && used.saturating_add(heights[start - 1]) <= available {
            start -= 1;
            used += heights[start];
            grew = true;
        }
        if end < heights.len() && used.saturating_add(heights[end]) <= available {
            used += heights[end];
            end += 1;
            grew = true;
        }
        if !grew {
            break;
        }
    }
    start..end
}

fn render_question(
    frame: &mut Frame,
    area: Rect,
    spec: &QuestionSpec,
    index: usize,
    wizard: &Wizard,
    list_state: &QuestionListState,
    theme: &Theme,
) {
    if area.height == 0 {
        return;
    }
    let cursor = wizard.cursor();

    if index == cursor {
        // Long prompts fall back to the short label rather than being cut off
        let title = if spec.prompt.len() + 2 <= area.width as usize {
            spec.prompt
        } else {
            spec.label
        };
        let prompt_style = Style::default().fg(theme.crust.into()).bg(theme.accent.into());
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", title), prompt_style)),
            Rect { height: 1, ..area },
        );

        let options_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };
        if options_area.height > 0 {
            question_list::render(frame, options_area, spec, list_state, theme);
        }
        return;
    }

    let value = wizard.answers().get(spec.key);
    let line = if index < cursor {
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(theme.success.into())),
            Span::styled(format!("{}: ", spec.label), Style::default().fg(theme.text.into())),
            Span::styled(value.to_string(), Style::default().fg(theme.accent.into())),
        ])
    } else {
        Line::from(Span::styled(
            format!("  {}: {}", spec.label, value),
            Style::default().fg(theme.dim_text.into()),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_completion(frame: &mut Frame, area: Rect, wizard: &Wizard, theme: &Theme) {
    let answers = wizard.answers();
    let highlight = Style::default().fg(theme.accent.into()).bold();
    let text = Style::default().fg(theme.text.into());
    let dim = Style::default().fg(theme.dim_text.into());

    let lines = vec![
        Line::from(vec![
            Span::styled("You chose ", text),
            Span::styled(answers.framework.as_str(), highlight),
        ]),
        Line::from(vec![
            Span::styled("Written in ", text),
            Span::styled(answers.language(), highlight),
        ]),
        Line::from(""),
        Line::from(Span::styled("Press q to exit", dim)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent.into()))
        .padding(Padding::horizontal(1));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
