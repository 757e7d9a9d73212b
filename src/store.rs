use crate::model::Question;

/// Local copy of the full question list. It is only ever replaced as a
/// whole, with whatever the last successful `list` returned, never patched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, questions: Vec<Question>) {
        self.questions = questions;
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
