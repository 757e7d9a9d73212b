use crate::api::{HttpQuestionApi, QuestionApi};
use crate::config::AdminConfig;
use crate::draft::ValidationError;
use crate::model::{Question, Reference};
use crate::session::{EditSession, SessionError};
use crate::store::QuestionStore;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use thiserror::Error;

pub mod actions;
pub mod editing;
pub mod view_models;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::view_models::QuestionRow;
pub use actions::{Job, JobFailure, JobKind, JobReport, run_job};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("another request is still in progress")]
    Busy,
    #[error("no question form is open")]
    NoSession,
    #[error("no question is selected for deletion")]
    NoDeleteTarget,
    #[error("question {0} is not in the list")]
    UnknownQuestion(String),
}

/// State behind the admin view: the question list, the open form, the
/// pending delete confirmation and the one request allowed in flight.
pub struct QuestionAdmin {
    pub store: QuestionStore,
    pub session: Option<EditSession>,
    pub delete_target: Option<String>,
    pub reference: Reference,
    pub message: String,
    api: Arc<dyn QuestionApi>,
    pending: Option<JobKind>,
    job_rx: Option<Receiver<JobReport>>,
    last_failure: Option<JobFailure>,
}

impl QuestionAdmin {
    pub fn new(api: Arc<dyn QuestionApi>, reference: Reference) -> Self {
        Self {
            store: QuestionStore::new(),
            session: None,
            delete_target: None,
            reference,
            message: String::new(),
            api,
            pending: None,
            job_rx: None,
            last_failure: None,
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        let api = HttpQuestionApi::new(&config.base_url);
        Self::new(Arc::new(api), config.reference.clone())
    }

    pub fn questions(&self) -> &[Question] {
        self.store.questions()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_job(&self) -> Option<JobKind> {
        self.pending
    }
}
