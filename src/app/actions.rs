use super::*;
use crate::api::TransportError;
use crate::draft::shape;
use crate::model::QuestionPayload;
use crate::session::SessionMode;
use log::{debug, error, info, warn};
use thiserror::Error;
use std::sync::mpsc::{self, TryRecvError};

/// One unit of network work. Every mutation is followed by a full reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Job {
    Refresh,
    Create(QuestionPayload),
    Update { id: String, payload: QuestionPayload },
    Delete { id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Refresh,
    Create,
    Update,
    Delete,
}

impl Job {
    pub fn kind(&self) -> JobKind {
        match self {
            Job::Refresh => JobKind::Refresh,
            Job::Create(_) => JobKind::Create,
            Job::Update { .. } => JobKind::Update,
            Job::Delete { .. } => JobKind::Delete,
        }
    }
}

impl JobKind {
    fn progress_message(self) -> &'static str {
        match self {
            JobKind::Refresh => "⏳ Loading questions...",
            JobKind::Create | JobKind::Update => "⏳ Saving question...",
            JobKind::Delete => "⏳ Deleting question...",
        }
    }
}

#[derive(Debug, Error)]
pub enum JobFailure {
    /// The create/update/delete call itself failed; nothing changed remotely.
    #[error(transparent)]
    Mutation(TransportError),
    /// The mutation (if any) went through but the reload after it did not.
    #[error("reloading the list failed: {0}")]
    Refresh(TransportError),
    #[error("the request worker ended without a result")]
    Interrupted,
}

#[derive(Debug)]
pub struct JobReport {
    pub kind: JobKind,
    pub outcome: Result<Vec<Question>, JobFailure>,
}

/// Runs `job` to completion on the calling thread.
pub fn run_job(api: &dyn QuestionApi, job: Job) -> JobReport {
    let kind = job.kind();
    let mutation = match &job {
        Job::Refresh => Ok(serde_json::Value::Null),
        Job::Create(payload) => api.create(payload),
        Job::Update { id, payload } => api.update(id, payload),
        Job::Delete { id } => api.delete(id),
    };

    let outcome = match mutation {
        Err(err) => Err(JobFailure::Mutation(err)),
        Ok(body) => {
            if kind != JobKind::Refresh {
                debug!("{kind:?} answered {body}");
            }
            api.list().map_err(JobFailure::Refresh)
        }
    };

    JobReport { kind, outcome }
}

impl QuestionAdmin {
    /// Reloads the whole list. The store is replaced when `list` answers and
    /// left untouched when it fails.
    pub fn refresh(&mut self) -> Result<(), AdminError> {
        self.dispatch(Job::Refresh)
    }

    /// Validates the open form and sends it as a create or update.
    pub fn save(&mut self) -> Result<(), AdminError> {
        let session = self.session.as_ref().ok_or(AdminError::NoSession)?;

        if let Err(err) = session.validate() {
            warn!("Save blocked: {err}");
            self.message = format!("⚠ {err}");
            return Err(err.into());
        }

        let payload = shape(&session.draft, &self.reference);
        let job = match &session.mode {
            SessionMode::Add => Job::Create(payload),
            SessionMode::Edit { id } => Job::Update {
                id: id.clone(),
                payload,
            },
        };
        self.dispatch(job)
    }

    pub fn request_delete(&mut self, id: &str) -> Result<(), AdminError> {
        if self.store.get(id).is_none() {
            return Err(AdminError::UnknownQuestion(id.to_string()));
        }
        self.delete_target = Some(id.to_string());
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    pub fn confirm_delete(&mut self) -> Result<(), AdminError> {
        let id = self
            .delete_target
            .clone()
            .ok_or(AdminError::NoDeleteTarget)?;
        self.dispatch(Job::Delete { id })
    }

    fn dispatch(&mut self, job: Job) -> Result<(), AdminError> {
        if let Some(running) = self.pending {
            warn!("Ignoring {:?}: {running:?} still in flight", job.kind());
            return Err(AdminError::Busy);
        }

        let kind = job.kind();
        let (tx, rx) = mpsc::channel::<JobReport>();
        let api = Arc::clone(&self.api);

        debug!("Dispatching {kind:?}");
        std::thread::spawn(move || {
            let report = run_job(api.as_ref(), job);
            let _ = tx.send(report);
        });

        self.pending = Some(kind);
        self.job_rx = Some(rx);
        self.last_failure = None;
        self.message = kind.progress_message().into();
        Ok(())
    }

    /// Applies the in-flight job's result if it has arrived. Returns `true`
    /// when something was applied.
    pub fn poll(&mut self) -> bool {
        let received = match self.job_rx.as_ref().map(|rx| rx.try_recv()) {
            None | Some(Err(TryRecvError::Empty)) => return false,
            Some(Ok(report)) => Some(report),
            Some(Err(TryRecvError::Disconnected)) => None,
        };
        self.finish(received);
        true
    }

    /// Blocks until the in-flight job (if any) finishes and applies it.
    pub fn wait(&mut self) -> bool {
        let Some(rx) = self.job_rx.as_ref() else {
            return false;
        };
        let received = rx.recv().ok();
        self.finish(received);
        true
    }

    fn finish(&mut self, report: Option<JobReport>) {
        let kind = self.pending.take().unwrap_or(JobKind::Refresh);
        self.job_rx = None;
        let report = report.unwrap_or(JobReport {
            kind,
            outcome: Err(JobFailure::Interrupted),
        });
        self.apply_report(report);
    }

    fn apply_report(&mut self, report: JobReport) {
        let JobReport { kind, outcome } = report;

        match outcome {
            Ok(questions) => {
                info!("{kind:?} finished, {} questions loaded", questions.len());
                self.store.replace(questions);
                self.close_after(kind);
                self.message = match kind {
                    JobKind::Refresh => String::new(),
                    JobKind::Create => "✅ Question added.".into(),
                    JobKind::Update => "✅ Question updated.".into(),
                    JobKind::Delete => "✅ Question deleted.".into(),
                };
            }
            Err(failure) => {
                match &failure {
                    JobFailure::Mutation(err) => {
                        error!("{kind:?} failed: {err}");
                        self.message = format!("❌ {err}");
                    }
                    JobFailure::Refresh(err) => {
                        error!("Reload after {kind:?} failed: {err}");
                        self.close_after(kind);
                        self.message = if kind == JobKind::Refresh {
                            format!("❌ {err}")
                        } else {
                            format!("❌ Change applied, but reloading the list failed: {err}")
                        };
                    }
                    JobFailure::Interrupted => {
                        error!("{kind:?} worker ended without a result");
                        self.message = "❌ The request was interrupted.".into();
                    }
                }
                self.last_failure = Some(failure);
            }
        }
    }

    /// Failure of the most recently finished job; cleared when a new job
    /// is dispatched.
    pub fn last_failure(&self) -> Option<&JobFailure> {
        self.last_failure.as_ref()
    }

    fn close_after(&mut self, kind: JobKind) {
        match kind {
            JobKind::Create | JobKind::Update => self.session = None,
            JobKind::Delete => self.delete_target = None,
            JobKind::Refresh => {}
        }
    }
}
