use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::protocol::{NewQuestion, QuestionUpdate};

/// Number of random hex digits appended to a question id.
const ID_SUFFIX_LEN: usize = 4;

/// One multiple-choice quiz item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`. Not range-checked.
    pub correct: i64,
    #[serde(default)]
    pub explanation: String,
    /// Fields the admin API does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Build a question with a freshly generated id for `attending_id`.
    pub fn create(attending_id: &str, payload: NewQuestion) -> Self {
        Self {
            id: generate_id(attending_id),
            question: payload.question,
            options: payload.options,
            correct: payload.correct,
            explanation: payload.explanation.unwrap_or_default(),
            extra: Map::new(),
        }
    }

    /// Overwrite every field present in `update`, leaving the rest intact.
    pub fn apply(&mut self, update: QuestionUpdate) {
        if let Some(question) = update.question {
            self.question = question;
        }
        if let Some(options) = update.options {
            self.options = options;
        }
        if let Some(correct) = update.correct {
            self.correct = correct;
        }
        if let Some(explanation) = update.explanation {
            self.explanation = explanation;
        }
    }
}

/// Generate a question id: the first character of the attending id followed
/// by four random hex digits.
///
/// Ids are not checked for collisions against existing questions.
pub fn generate_id(attending_id: &str) -> String {
    let prefix = attending_id.chars().next().map(String::from).unwrap_or_default();
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &hex[..ID_SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: "h1a2b".to_string(),
            question: "Where is McBurney's point?".to_string(),
            options: vec!["RLQ".to_string(), "LLQ".to_string()],
            correct: 0,
            explanation: "Two thirds from the umbilicus.".to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id("house");
        assert_eq!(id.len(), 5);
        assert!(id.starts_with('h'));
        assert!(id[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_id_multibyte_prefix() {
        let id = generate_id("élise");
        assert!(id.starts_with('é'));
        assert_eq!(id.chars().count(), 5);
    }

    #[test]
    fn test_create_defaults_explanation() {
        let q = Question::create(
            "grey",
            NewQuestion {
                question: "Q".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct: 1,
                explanation: None,
            },
        );
        assert!(q.id.starts_with('g'));
        assert_eq!(q.explanation, "");
        assert_eq!(q.correct, 1);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut q = sample();
        q.apply(QuestionUpdate {
            correct: Some(1),
            ..Default::default()
        });
        assert_eq!(q.correct, 1);
        assert_eq!(q.question, "Where is McBurney's point?");
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.explanation, "Two thirds from the umbilicus.");
    }

    #[test]
    fn test_unknown_fields_survive() {
        let json = r#"{"id":"x1234","question":"Q","options":["a"],"correct":0,"difficulty":3}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.explanation, "");
        assert_eq!(q.extra.get("difficulty"), Some(&Value::from(3)));

        let back = serde_json::to_value(&q).unwrap();
        assert_eq!(back["difficulty"], 3);
    }
}
