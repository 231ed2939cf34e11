use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::protocol::CatchphraseUpdate;

use super::Question;

/// A named group of questions, presented in the game as one character.
///
/// Fields only the game reads (`name`, `title`, `voiceRate`, `voicePitch`)
/// live in `extra` and are written back exactly as found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attending {
    /// Spoken on a correct answer.
    #[serde(default)]
    pub catchphrase_correct: String,
    /// Spoken on a wrong answer.
    #[serde(default)]
    pub catchphrase_wrong: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Attending {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn question_mut(&mut self, id: &str) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    /// Remove every question with `id`. Returns how many were removed.
    pub fn remove_question(&mut self, id: &str) -> usize {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        before - self.questions.len()
    }

    pub fn apply_catchphrases(&mut self, update: CatchphraseUpdate) {
        if let Some(correct) = update.catchphrase_correct {
            self.catchphrase_correct = correct;
        }
        if let Some(wrong) = update.catchphrase_wrong {
            self.catchphrase_wrong = wrong;
        }
    }
}
