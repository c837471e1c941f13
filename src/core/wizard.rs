//! Sequential form state: which question has focus and what has been
//! answered so far.
//!
//! The cursor only ever moves forward, one step per accepted selection.
//! Once it reaches the end of the reachable questions the wizard is
//! complete and further selections are ignored.

use super::answers::Answers;
use super::questions::{spec_for, AnswerValue, QuestionKey, QuestionSpec, QUESTIONS};
use super::Flow;

#[derive(Debug, Clone)]
pub struct Wizard {
    flow: Flow,
    answers: Answers,
    cursor: usize,
}

impl Wizard {
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            answers: Answers::default(),
            cursor: 0,
        }
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Questions the user steps through, in order.
    pub fn reachable(&self) -> &'static [QuestionSpec] {
        &QUESTIONS[..self.flow.reachable_len()]
    }

    pub fn current_question(&self) -> Option<&'static QuestionSpec> {
        self.reachable().get(self.cursor)
    }

    /// Key of the focused question, or `None` once the wizard is complete.
    pub fn current_question_key(&self) -> Option<QuestionKey> {
        self.current_question().map(|q| q.key)
    }

    pub fn is_focused(&self, key: QuestionKey) -> bool {
        self.current_question_key() == Some(key)
    }

    pub fn is_complete(&self) -> bool {
        self.current_question().is_none()
    }

    /// Record `value` for the focused question and move focus to the next one.
    ///
    /// Calls for a question that does not have focus, or with a value that is
    /// not one of the question's options, change nothing.
    pub fn select(&mut self, key: QuestionKey, value: AnswerValue) {
        if !self.is_focused(key) {
            tracing::warn!(
                question = %key,
                focused = ?self.current_question_key(),
                "ignoring selection for unfocused question"
            );
            return;
        }

        if spec_for(key).position_of(&value).is_none() {
            tracing::warn!(question = %key, value = %value, "ignoring value outside the option list");
            return;
        }

        let shown = value.to_string();
        if !self.answers.set(key, value) {
            tracing::warn!(question = %key, "ignoring selection with mismatched value type");
            return;
        }
        self.cursor += 1;
        tracing::info!(question = %key, value = %shown, step = self.cursor, "answer recorded");

        if self.is_complete() {
            tracing::info!(flow = self.flow.label(), "wizard complete");
        }
    }

    /// `(label, current value)` for every question in table order, including
    /// questions the flow does not reach.
    pub fn snapshot(&self) -> Vec<(&'static str, AnswerValue)> {
        QUESTIONS
            .iter()
            .map(|q| (q.label, self.answers.get(q.key)))
            .collect()
    }
}
