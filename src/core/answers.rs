use serde::Serialize;

use super::questions::{AnswerValue, QuestionKey};

/// Current selections, one field per question. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    #[serde(rename = "isTypeScript")]
    pub is_typescript: bool,
    pub framework: String,
    pub ui_framework: String,
    pub css_framework: String,
    pub database: String,
    pub orm: String,
    pub cloud_platform: String,
    pub is_docker: bool,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            is_typescript: true,
            framework: "None".to_string(),
            ui_framework: "None".to_string(),
            css_framework: "None".to_string(),
            database: "None".to_string(),
            orm: "None".to_string(),
            cloud_platform: "None".to_string(),
            is_docker: false,
        }
    }
}

impl Answers {
    pub fn get(&self, key: QuestionKey) -> AnswerValue {
        match key {
            QuestionKey::IsTypeScript => AnswerValue::Bool(self.is_typescript),
            QuestionKey::Framework => AnswerValue::Choice(self.framework.clone()),
            QuestionKey::UiFramework => AnswerValue::Choice(self.ui_framework.clone()),
            QuestionKey::CssFramework => AnswerValue::Choice(self.css_framework.clone()),
            QuestionKey::Database => AnswerValue::Choice(self.database.clone()),
            QuestionKey::Orm => AnswerValue::Choice(self.orm.clone()),
            QuestionKey::CloudPlatform => AnswerValue::Choice(self.cloud_platform.clone()),
            QuestionKey::IsDocker => AnswerValue::Bool(self.is_docker),
        }
    }

    /// Replace the field for `key`. Returns false and leaves every field
    /// untouched when `value` is not of that field's type.
    pub fn set(&mut self, key: QuestionKey, value: AnswerValue) -> bool {
        match (key, value) {
            (QuestionKey::IsTypeScript, AnswerValue::Bool(v)) => self.is_typescript = v,
            (QuestionKey::IsDocker, AnswerValue::Bool(v)) => self.is_docker = v,
            (QuestionKey::Framework, AnswerValue::Choice(v)) => self.framework = v,
            (QuestionKey::UiFramework, AnswerValue::Choice(v)) => self.ui_framework = v,
            (QuestionKey::CssFramework, AnswerValue::Choice(v)) => self.css_framework = v,
            (QuestionKey::Database, AnswerValue::Choice(v)) => self.database = v,
            (QuestionKey::Orm, AnswerValue::Choice(v)) => self.orm = v,
            (QuestionKey::CloudPlatform, AnswerValue::Choice(v)) => self.cloud_platform = v,
            _ => return false,
        }
        true
    }

    pub fn language(&self) -> &'static str {
        if self.is_typescript {
            "TypeScript"
        } else {
            "JavaScript"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_table() {
        let a = Answers::default();
        assert!(a.is_typescript);
        assert!(!a.is_docker);
        assert_eq!(a.framework, "None");
        assert_eq!(a.cloud_platform, "None");
    }

    #[test]
    fn set_replaces_only_target_field() {
        let mut a = Answers::default();
        assert!(a.set(QuestionKey::Database, AnswerValue::choice("SQLite")));
        let expected = Answers {
            database: "SQLite".to_string(),
            ..Answers::default()
        };
        assert_eq!(a, expected);
    }

    #[test]
    fn set_rejects_mismatched_type() {
        let mut a = Answers::default();
        assert!(!a.set(QuestionKey::IsDocker, AnswerValue::choice("Yes")));
        assert!(!a.set(QuestionKey::Orm, AnswerValue::Bool(true)));
        assert_eq!(a, Answers::default());
    }

    #[test]
    fn serializes_with_question_keys() {
        let json = serde_json::to_value(Answers::default()).unwrap();
        assert_eq!(json["isTypeScript"], serde_json::json!(true));
        assert_eq!(json["uiFramework"], serde_json::json!("None"));
        assert_eq!(json["cloudPlatform"], serde_json::json!("None"));
        assert_eq!(json["isDocker"], serde_json::json!(false));
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn language_follows_typescript_flag() {
        let mut a = Answers::default();
        assert_eq!(a.language(), "TypeScript");
        a.is_typescript = false;
        assert_eq!(a.language(), "JavaScript");
    }
}
