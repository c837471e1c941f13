pub mod answers;
pub mod questions;
pub mod wizard;

use serde::{Deserialize, Serialize};

/// Which questions the user is walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Every question in the table is interactive.
    #[default]
    Full,
    /// Only the language and framework questions are interactive; the rest
    /// keep their defaults.
    Classic,
}

impl Flow {
    pub fn reachable_len(&self) -> usize {
        match self {
            Flow::Full => questions::QUESTIONS.len(),
            Flow::Classic => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Flow::Full => "FULL",
            Flow::Classic => "CLASSIC",
        }
    }
}
