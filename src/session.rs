use crate::draft::{DraftField, OptionField, QuestionDraft, ValidationError};
use crate::model::{ChoiceOption, Question};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("option {index} does not exist (the question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Add,
    Edit { id: String },
}

/// The form currently open for one question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub mode: SessionMode,
    pub draft: QuestionDraft,
}

impl EditSession {
    pub fn open_add() -> Self {
        Self {
            mode: SessionMode::Add,
            draft: QuestionDraft::new(),
        }
    }

    pub fn open_edit(question: &Question) -> Self {
        Self {
            mode: SessionMode::Edit {
                id: question.id.clone(),
            },
            draft: QuestionDraft::from_question(question),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            SessionMode::Add => "Add question",
            SessionMode::Edit { .. } => "Edit question",
        }
    }

    pub fn set_field(&mut self, field: DraftField) {
        self.draft.set_field(field);
    }

    pub fn add_option(&mut self) {
        self.draft.options.push(ChoiceOption::default());
    }

    pub fn set_option(&mut self, index: usize, field: OptionField) -> Result<(), SessionError> {
        let len = self.draft.options.len();
        let option = self
            .draft
            .options
            .get_mut(index)
            .ok_or(SessionError::OptionOutOfRange { index, len })?;

        match field {
            OptionField::Text(text) => option.option = text,
            OptionField::Correct(flag) => option.is_correct = flag,
        }
        Ok(())
    }

    pub fn remove_option(&mut self, index: usize) -> Result<ChoiceOption, SessionError> {
        let len = self.draft.options.len();
        if index >= len {
            return Err(SessionError::OptionOutOfRange { index, len });
        }
        Ok(self.draft.options.remove(index))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate()
    }

    /// Discards the session.
    pub fn close(self) {}
}
