use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

use crate::config::settings::AppConfig;
use crate::core::wizard::Wizard;
use crate::tui::layout as tui_layout;
use crate::tui::question_list::{self, ListAction, QuestionListState};

// ── Application state ───────────────────────────────────────────────────

pub struct App {
    pub config: AppConfig,
    pub wizard: Wizard,
    pub list_state: QuestionListState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let wizard = Wizard::new(config.flow);
        let mut app = Self {
            config,
            wizard,
            list_state: QuestionListState::new(),
            should_quit: false,
        };
        app.reset_list_state();
        app
    }

    pub fn theme_name(&self) -> &str {
        &self.config.theme
    }

    /// Handle a terminal event (key, resize).
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            // Resize needs nothing: the next draw uses the new size
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Only handle key press events — ignore Release/Repeat to avoid duplicates on Windows
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            tracing::info!(step = self.wizard.cursor(), "quit requested");
            self.should_quit = true;
            return;
        }

        let Some(spec) = self.wizard.current_question() else {
            return;
        };
        if let ListAction::Select(value) = question_list::handle_key(&mut self.list_state, key, spec) {
            self.wizard.select(spec.key, value);
            self.reset_list_state();
        }
    }

    fn reset_list_state(&mut self) {
        self.list_state = match self.wizard.current_question() {
            Some(spec) => QuestionListState::for_question(spec, &self.wizard.answers().get(spec.key)),
            None => QuestionListState::new(),
        };
    }
}

/// The main run loop. Returns the wizard so the caller can report the
/// final answers once the terminal is restored.
///
/// The terminal is restored whenever raw mode was entered, even if setup or
/// the event loop failed.
pub fn run(config: AppConfig) -> Result<Wizard> {
    crossterm::terminal::enable_raw_mode().context("failed to enable raw mode")?;

    let result = run_in_raw_mode(config);
    let restored = restore_terminal().context("failed to restore terminal");

    let wizard = result?;
    restored?;
    Ok(wizard)
}

fn run_in_raw_mode(config: AppConfig) -> Result<Wizard> {
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    event_loop(&mut terminal, &mut app)?;
    Ok(app.wizard)
}

/// Undo raw mode and the alternate screen. Every step runs; the first
/// failure is reported.
fn restore_terminal() -> io::Result<()> {
    first_failure([
        crossterm::terminal::disable_raw_mode(),
        crossterm::execute!(
            io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        ),
    ])
}

fn first_failure(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            tui_layout::draw(frame, app);
        })?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            let event = event::read()?;
            app.handle_event(event);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::questions::{AnswerValue, QuestionKey};
    use crate::core::Flow;
    use crossterm::event::KeyEventState;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::from(code)));
    }

    fn app(flow: Flow) -> App {
        App::new(AppConfig {
            flow,
            ..AppConfig::default()
        })
    }

    #[test]
    fn starts_on_first_question_with_default_highlighted() {
        let app = app(Flow::Full);
        assert_eq!(app.wizard.current_question_key(), Some(QuestionKey::IsTypeScript));
        assert_eq!(app.list_state.selected, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn enter_records_answer_and_advances() {
        let mut app = app(Flow::Full);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(!app.wizard.answers().is_typescript);
        assert_eq!(app.wizard.current_question_key(), Some(QuestionKey::Framework));
        assert_eq!(app.list_state.selected, 0);
    }

    #[test]
    fn docker_question_opens_on_no() {
        let mut app = app(Flow::Full);
        for _ in 0..7 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.wizard.current_question_key(), Some(QuestionKey::IsDocker));
        assert_eq!(app.list_state.selected, 1);
    }

    #[test]
    fn classic_flow_ignores_keys_after_completion() {
        let mut app = app(Flow::Classic);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.wizard.is_complete());
        assert_eq!(app.wizard.answers().framework, "Next.js");

        let before = app.wizard.snapshot();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.snapshot(), before);
        assert_eq!(app.wizard.answers().ui_framework, "None");
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Esc, KeyCode::Char('q')] {
            let mut app = app(Flow::Full);
            press(&mut app, code);
            assert!(app.should_quit);
        }

        let mut app = app(Flow::Full);
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_quit);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app(Flow::Full);
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_event(Event::Key(release));
        assert_eq!(app.wizard.cursor(), 0);
        assert_eq!(app.wizard.answers().get(QuestionKey::IsTypeScript), AnswerValue::Bool(true));
    }

    #[test]
    fn resize_changes_nothing() {
        let mut app = app(Flow::Full);
        app.handle_event(Event::Resize(80, 24));
        assert_eq!(app.wizard.cursor(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn restore_reports_first_failure() {
        let err = first_failure([
            Ok(()),
            Err(io::Error::other("raw mode")),
            Err(io::Error::other("alternate screen")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn restore_succeeds_when_every_step_does() {
        assert!(first_failure([Ok(()), Ok(())]).is_ok());
    }
}
