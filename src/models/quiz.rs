//! The whole question store as a single document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::QuizError;
use crate::protocol::{CatchphraseUpdate, NewQuestion, QuestionUpdate};

use super::{Attending, Question};

/// Root of `questions.json`.
///
/// Attendings keep their file order across a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizData {
    #[serde(default)]
    pub attendings: IndexMap<String, Attending>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuizData {
    pub fn attending(&self, id: &str) -> Result<&Attending, QuizError> {
        self.attendings
            .get(id)
            .ok_or_else(|| QuizError::AttendingNotFound(id.to_string()))
    }

    fn attending_mut(&mut self, id: &str) -> Result<&mut Attending, QuizError> {
        self.attendings
            .get_mut(id)
            .ok_or_else(|| QuizError::AttendingNotFound(id.to_string()))
    }

    /// Append a new question to an attending and return it.
    pub fn add_question(
        &mut self,
        attending_id: &str,
        payload: NewQuestion,
    ) -> Result<Question, QuizError> {
        let attending = self.attending_mut(attending_id)?;
        let question = Question::create(attending_id, payload);
        attending.questions.push(question.clone());
        Ok(question)
    }

    pub fn update_catchphrases(
        &mut self,
        attending_id: &str,
        update: CatchphraseUpdate,
    ) -> Result<(), QuizError> {
        self.attending_mut(attending_id)?.apply_catchphrases(update);
        Ok(())
    }

    /// Apply a partial update to one question and return its new state.
    pub fn update_question(
        &mut self,
        attending_id: &str,
        question_id: &str,
        update: QuestionUpdate,
    ) -> Result<Question, QuizError> {
        let question = self
            .attending_mut(attending_id)?
            .question_mut(question_id)
            .ok_or_else(|| QuizError::QuestionNotFound(question_id.to_string()))?;
        question.apply(update);
        Ok(question.clone())
    }

    pub fn delete_question(&mut self, attending_id: &str, question_id: &str) -> Result<(), QuizError> {
        match self.attending_mut(attending_id)?.remove_question(question_id) {
            0 => Err(QuizError::QuestionNotFound(question_id.to_string())),
            _ => Ok(()),
        }
    }

    pub fn question_count(&self) -> usize {
        self.attendings.values().map(|a| a.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> QuizData {
        serde_json::from_str(
            r#"{"attendings":{
                "house":{
                    "catchphrase_correct":"Good.",
                    "catchphrase_wrong":"Wrong.",
                    "questions":[
                        {"id":"h0001","question":"Q1","options":["a","b"],"correct":0,"explanation":"E1"}
                    ]
                },
                "grey":{"catchphrase_correct":"","catchphrase_wrong":"","questions":[]}
            }}"#,
        )
        .unwrap()
    }

    fn new_question() -> NewQuestion {
        NewQuestion {
            question: "Q2".to_string(),
            options: vec!["x".to_string(), "y".to_string(), "z".to_string()],
            correct: 2,
            explanation: Some("E2".to_string()),
        }
    }

    #[test]
    fn test_add_question_appends() {
        let mut data = data();
        let q = data.add_question("house", new_question()).unwrap();

        let house = data.attending("house").unwrap();
        assert_eq!(house.questions.len(), 2);
        assert_eq!(house.questions.last(), Some(&q));
        assert!(q.id.starts_with('h'));
    }

    #[test]
    fn test_add_question_unknown_attending() {
        let mut data = data();
        let before = data.clone();
        let err = data.add_question("cuddy", new_question()).unwrap_err();
        assert!(matches!(err, QuizError::AttendingNotFound(ref id) if id == "cuddy"));
        assert_eq!(err.to_string(), "Attending 'cuddy' not found");
        assert_eq!(data, before);
    }

    #[test]
    fn test_update_question_missing() {
        let mut data = data();
        let err = data
            .update_question("house", "h9999", QuestionUpdate::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Question 'h9999' not found");
    }

    #[test]
    fn test_update_question_overwrites_only_given() {
        let mut data = data();
        let q = data
            .update_question(
                "house",
                "h0001",
                QuestionUpdate {
                    explanation: Some("new".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(q.explanation, "new");
        assert_eq!(q.question, "Q1");
        assert_eq!(q.options, vec!["a", "b"]);
        assert_eq!(data.attending("house").unwrap().questions[0], q);
    }

    #[test]
    fn test_delete_question_twice() {
        let mut data = data();
        data.delete_question("house", "h0001").unwrap();
        assert_eq!(data.question_count(), 0);
        assert!(matches!(
            data.delete_question("house", "h0001"),
            Err(QuizError::QuestionNotFound(_))
        ));
    }

    #[test]
    fn test_delete_unknown_attending() {
        let mut data = data();
        assert!(matches!(
            data.delete_question("wilson", "h0001"),
            Err(QuizError::AttendingNotFound(_))
        ));
    }
}
