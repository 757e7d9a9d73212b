use crate::model::{
    ChoiceOption, Difficulty, Question, QuestionKind, QuestionPayload, QuestionType, Reference,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the question content before saving.")]
    MissingContent,
}

/// Local, typed buffer for a question being composed or edited.
///
/// Both variant buffers live side by side: switching `question_type` keeps
/// whatever was typed into the other one, but [`shape`] only ever reads the
/// buffer of the active type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    pub question_type: QuestionType,
    pub content: String,
    pub options: Vec<ChoiceOption>,
    pub correct_answer: String,
    pub hint: String,
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// One scalar field of a draft, with its new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftField {
    Type(QuestionType),
    Content(String),
    CorrectAnswer(String),
    Hint(String),
    Explanation(String),
    Difficulty(Difficulty),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionField {
    Text(String),
    Correct(bool),
}

impl QuestionDraft {
    /// Multiple choice, easy, everything else empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = question_type;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_correct_answer(mut self, answer: impl Into<String>) -> Self {
        self.correct_answer = answer.into();
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Copies every field of an existing question into a fresh draft.
    pub fn from_question(question: &Question) -> Self {
        let draft = Self::new()
            .with_type(question.question_type())
            .with_content(question.content.clone())
            .with_hint(question.hint.clone().unwrap_or_default())
            .with_explanation(question.explanation.clone().unwrap_or_default())
            .with_difficulty(question.difficulty);

        match &question.kind {
            QuestionKind::MultipleChoice { options } => draft.with_options(options.clone()),
            QuestionKind::FillInTheBlank { correct_answer } => {
                draft.with_correct_answer(correct_answer.clone())
            }
        }
    }

    pub fn set_field(&mut self, field: DraftField) {
        match field {
            DraftField::Type(t) => self.question_type = t,
            DraftField::Content(v) => self.content = v,
            DraftField::CorrectAnswer(v) => self.correct_answer = v,
            DraftField::Hint(v) => self.hint = v,
            DraftField::Explanation(v) => self.explanation = v,
            DraftField::Difficulty(d) => self.difficulty = d,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }
}

/// Builds the wire payload for `draft`, attaching `reference`.
pub fn shape(draft: &QuestionDraft, reference: &Reference) -> QuestionPayload {
    let kind = match draft.question_type {
        QuestionType::MultipleChoice => QuestionKind::MultipleChoice {
            options: draft.options.clone(),
        },
        QuestionType::FillInTheBlank => QuestionKind::FillInTheBlank {
            correct_answer: draft.correct_answer.clone(),
        },
    };

    QuestionPayload {
        kind,
        content: draft.content.clone(),
        hint: draft.hint.clone(),
        explanation: draft.explanation.clone(),
        difficulty: draft.difficulty,
        reference: reference.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReferenceType;
    use serde_json::json;

    fn quiz_ref() -> Reference {
        Reference::new("quiz-42", ReferenceType::Quiz)
    }

    #[test]
    fn fill_in_the_blank_payload_omits_options() {
        let draft = QuestionDraft::new()
            .with_type(QuestionType::FillInTheBlank)
            .with_content("2+2=?")
            .with_correct_answer("4")
            .with_difficulty(Difficulty::Easy);

        let value = serde_json::to_value(shape(&draft, &quiz_ref())).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "fillInTheBlank",
                "content": "2+2=?",
                "correctAnswer": "4",
                "hint": "",
                "explanation": "",
                "difficulty": "easy",
                "reference": { "id": "quiz-42", "referenceType": "quiz" }
            })
        );
        assert!(value.get("options").is_none());
    }

    #[test]
    fn multiple_choice_payload_omits_stale_correct_answer() {
        let draft = QuestionDraft::new()
            .with_type(QuestionType::FillInTheBlank)
            .with_content("Capital of France?")
            .with_correct_answer("Paris")
            .with_type(QuestionType::MultipleChoice);

        let value = serde_json::to_value(shape(&draft, &quiz_ref())).unwrap();
        assert!(value.get("correctAnswer").is_none());
        assert_eq!(value["options"], json!([]));
        assert_eq!(value["type"], "multipleChoice");
    }

    #[test]
    fn switching_type_keeps_the_inactive_buffer() {
        let mut draft = QuestionDraft::new()
            .with_options(vec![ChoiceOption::new("a", true)])
            .with_content("q");
        draft.set_field(DraftField::Type(QuestionType::FillInTheBlank));
        assert_eq!(draft.options, vec![ChoiceOption::new("a", true)]);

        draft.set_field(DraftField::Type(QuestionType::MultipleChoice));
        let payload = shape(&draft, &quiz_ref());
        assert_eq!(
            payload.kind,
            QuestionKind::MultipleChoice {
                options: vec![ChoiceOption::new("a", true)]
            }
        );
    }

    #[test]
    fn empty_content_fails_validation() {
        assert_eq!(
            QuestionDraft::new().validate(),
            Err(ValidationError::MissingContent)
        );
        assert!(QuestionDraft::new().with_content(" ").validate().is_ok());
    }

    #[test]
    fn from_question_round_trips_through_shape() {
        let question = Question {
            id: "q7".into(),
            kind: QuestionKind::MultipleChoice {
                options: vec![ChoiceOption::new("3", false), ChoiceOption::new("4", true)],
            },
            content: "2+2=?".into(),
            hint: Some("count".into()),
            explanation: Some("arithmetic".into()),
            difficulty: Difficulty::Hard,
            reference: Some(Reference::new("exam-1", ReferenceType::Exam)),
        };

        let payload = shape(&QuestionDraft::from_question(&question), &quiz_ref());
        assert_eq!(payload.kind, question.kind);
        assert_eq!(payload.content, question.content);
        assert_eq!(payload.hint, "count");
        assert_eq!(payload.explanation, "arithmetic");
        assert_eq!(payload.difficulty, Difficulty::Hard);
        assert_eq!(payload.reference, quiz_ref());
    }
}
