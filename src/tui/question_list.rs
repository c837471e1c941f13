use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::themes::Theme;
use crate::core::questions::{AnswerValue, QuestionSpec};

// ── State ──────────────────────────────────────────────────────────────

/// Highlight position inside the focused question's option list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionListState {
    pub selected: usize,
}

impl QuestionListState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Start the highlight on the option matching `current`, so the list
    /// opens on the question's default.
    pub fn for_question(spec: &QuestionSpec, current: &AnswerValue) -> Self {
        Self {
            selected: spec.position_of(current).unwrap_or(0),
        }
    }
}

// ── Action result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    None,
    Select(AnswerValue),
}

// ── Key handling ───────────────────────────────────────────────────────

pub fn handle_key(state: &mut QuestionListState, key: KeyEvent, spec: &QuestionSpec) -> ListAction {
    let count = spec.option_count();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if state.selected > 0 {
                state.selected -= 1;
            }
            ListAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected < count.saturating_sub(1) {
                state.selected += 1;
            }
            ListAction::None
        }
        KeyCode::Home => {
            state.selected = 0;
            ListAction::None
        }
        KeyCode::End => {
            state.selected = count.saturating_sub(1);
            ListAction::None
        }
        KeyCode::Enter => match spec.options().into_iter().nth(state.selected) {
            Some(option) => ListAction::Select(option.value),
            None => ListAction::None,
        },
        _ => ListAction::None,
    }
}

// ── Rendering ──────────────────────────────────────────────────────────

pub fn render(
    frame: &mut Frame,
    area: Rect,
    spec: &QuestionSpec,
    state: &QuestionListState,
    theme: &Theme,
) {
    let accent: Color = theme.accent.into();
    let text_color: Color = theme.text.into();

    let items: Vec<ListItem> = spec
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let (indicator, style) = if i == state.selected {
                ("❯ ", Style::default().fg(accent).bold())
            } else {
                ("  ", Style::default().fg(text_color))
            };
            ListItem::new(Line::from(vec![
                Span::styled(indicator, style),
                Span::styled(option.label, style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::questions::{spec_for, QuestionKey};

    #[test]
    fn starts_at_first_option() {
        assert_eq!(QuestionListState::new().selected, 0);
    }

    #[test]
    fn opens_on_current_value() {
        let spec = spec_for(QuestionKey::IsDocker);
        let state = QuestionListState::for_question(spec, &AnswerValue::Bool(false));
        assert_eq!(state.selected, 1);

        let spec = spec_for(QuestionKey::Framework);
        let state = QuestionListState::for_question(spec, &AnswerValue::choice("None"));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn navigation_clamps_to_list() {
        let spec = spec_for(QuestionKey::Framework);
        let mut state = QuestionListState::new();

        let action = handle_key(&mut state, KeyEvent::from(KeyCode::Up), spec);
        assert_eq!(action, ListAction::None);
        assert_eq!(state.selected, 0);

        for _ in 0..5 {
            handle_key(&mut state, KeyEvent::from(KeyCode::Down), spec);
        }
        assert_eq!(state.selected, 2);

        handle_key(&mut state, KeyEvent::from(KeyCode::Char('k')), spec);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn home_and_end_jump() {
        let spec = spec_for(QuestionKey::Database);
        let mut state = QuestionListState::new();
        handle_key(&mut state, KeyEvent::from(KeyCode::End), spec);
        assert_eq!(state.selected, 2);
        handle_key(&mut state, KeyEvent::from(KeyCode::Home), spec);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn enter_selects_highlighted_option() {
        let spec = spec_for(QuestionKey::Framework);
        let mut state = QuestionListState::new();
        handle_key(&mut state, KeyEvent::from(KeyCode::Char('j')), spec);
        let action = handle_key(&mut state, KeyEvent::from(KeyCode::Enter), spec);
        assert_eq!(action, ListAction::Select(AnswerValue::choice("Vite + React")));
    }

    #[test]
    fn enter_on_confirm_yields_bool() {
        let spec = spec_for(QuestionKey::IsTypeScript);
        let mut state = QuestionListState::new();
        handle_key(&mut state, KeyEvent::from(KeyCode::Down), spec);
        let action = handle_key(&mut state, KeyEvent::from(KeyCode::Enter), spec);
        assert_eq!(action, ListAction::Select(AnswerValue::Bool(false)));
    }

    #[test]
    fn other_keys_do_nothing() {
        let spec = spec_for(QuestionKey::Orm);
        let mut state = QuestionListState::new();
        let action = handle_key(&mut state, KeyEvent::from(KeyCode::Char('x')), spec);
        assert_eq!(action, ListAction::None);
        assert_eq!(state, QuestionListState::new());
    }
}
