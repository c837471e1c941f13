use serde::Serialize;
use std::fmt;

pub const FRAMEWORKS: &[&str] = &["None", "Vite + React", "Next.js"];

pub const UI_FRAMEWORKS: &[&str] = &["None", "shadcn/ui"];

pub const CSS_FRAMEWORKS: &[&str] = &["None", "Tailwind CSS"];

pub const DATABASES: &[&str] = &["None", "PostgreSQL", "SQLite"];

pub const ORMS: &[&str] = &["None", "Prisma", "Drizzle"];

pub const CLOUD_PLATFORMS: &[&str] = &["None", "Vercel", "Cloud Run"];

/// Stable identifier of a question, one per field of [`super::answers::Answers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKey {
    IsTypeScript,
    Framework,
    UiFramework,
    CssFramework,
    Database,
    Orm,
    CloudPlatform,
    IsDocker,
}

impl QuestionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::IsTypeScript => "isTypeScript",
            QuestionKey::Framework => "framework",
            QuestionKey::UiFramework => "uiFramework",
            QuestionKey::CssFramework => "cssFramework",
            QuestionKey::Database => "database",
            QuestionKey::Orm => "orm",
            QuestionKey::CloudPlatform => "cloudPlatform",
            QuestionKey::IsDocker => "isDocker",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected (or default) answer. Yes/no questions hold a bool, everything
/// else holds the chosen option's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Choice(String),
}

impl AnswerValue {
    pub fn choice(name: &str) -> Self {
        AnswerValue::Choice(name.to_string())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(true) => f.write_str("Yes"),
            AnswerValue::Bool(false) => f.write_str("No"),
            AnswerValue::Choice(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Yes / No.
    Confirm,
    /// One of a fixed list of names; the value is the name itself.
    Select(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionOption {
    pub label: &'static str,
    pub value: AnswerValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSpec {
    pub key: QuestionKey,
    /// Short label used in the summary panel.
    pub label: &'static str,
    /// Full question shown above the option list.
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

impl QuestionSpec {
    pub fn options(&self) -> Vec<QuestionOption> {
        match self.kind {
            QuestionKind::Confirm => vec![
                QuestionOption { label: "Yes", value: AnswerValue::Bool(true) },
                QuestionOption { label: "No", value: AnswerValue::Bool(false) },
            ],
            QuestionKind::Select(names) => names
                .iter()
                .map(|&name| QuestionOption {
                    label: name,
                    value: AnswerValue::choice(name),
                })
                .collect(),
        }
    }

    pub fn option_count(&self) -> usize {
        match self.kind {
            QuestionKind::Confirm => 2,
            QuestionKind::Select(names) => names.len(),
        }
    }

    /// Index of the option carrying `value`, if any.
    pub fn position_of(&self, value: &AnswerValue) -> Option<usize> {
        self.options().iter().position(|o| &o.value == value)
    }
}

/// The wizard's question table, in the order the user answers it.
pub static QUESTIONS: [QuestionSpec; 8] = [
    QuestionSpec {
        key: QuestionKey::IsTypeScript,
        label: "Use TypeScript",
        prompt: "Do you want to use TypeScript?",
        kind: QuestionKind::Confirm,
    },
    QuestionSpec {
        key: QuestionKey::Framework,
        label: "Framework",
        prompt: "Choose a framework",
        kind: QuestionKind::Select(FRAMEWORKS),
    },
    QuestionSpec {
        key: QuestionKey::UiFramework,
        label: "UI Framework",
        prompt: "Choose a UI framework",
        kind: QuestionKind::Select(UI_FRAMEWORKS),
    },
    QuestionSpec {
        key: QuestionKey::CssFramework,
        label: "CSS Framework",
        prompt: "Choose a CSS framework",
        kind: QuestionKind::Select(CSS_FRAMEWORKS),
    },
    QuestionSpec {
        key: QuestionKey::Database,
        label: "Database",
        prompt: "Choose a relational database management system",
        kind: QuestionKind::Select(DATABASES),
    },
    QuestionSpec {
        key: QuestionKey::Orm,
        label: "ORM",
        prompt: "Choose an object-relational mapper",
        kind: QuestionKind::Select(ORMS),
    },
    QuestionSpec {
        key: QuestionKey::CloudPlatform,
        label: "Cloud Platform",
        prompt: "Where will you be deploying to?",
        kind: QuestionKind::Select(CLOUD_PLATFORMS),
    },
    QuestionSpec {
        key: QuestionKey::IsDocker,
        label: "Use Docker",
        prompt: "Do you want to use Docker?",
        kind: QuestionKind::Confirm,
    },
];

pub fn spec_for(key: QuestionKey) -> &'static QuestionSpec {
    // The table holds every key exactly once, in declaration order.
    &QUESTIONS[key as usize]
}
