use super::QuestionAdmin;
use crate::api::{QuestionApi, TransportError};
use crate::model::{Difficulty, Question, QuestionKind, QuestionPayload, Reference, ReferenceType};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};

pub fn question(id: &str) -> Question {
    Question {
        id: id.into(),
        kind: QuestionKind::MultipleChoice { options: vec![] },
        content: format!("content {id}"),
        hint: None,
        explanation: None,
        difficulty: Difficulty::Easy,
        reference: None,
    }
}

pub fn admin_with(api: &FakeApi) -> QuestionAdmin {
    QuestionAdmin::new(
        Arc::new(api.clone()),
        Reference::new("quiz-1", ReferenceType::Quiz),
    )
}

#[derive(Default)]
struct Inner {
    server: Mutex<Vec<Question>>,
    calls: Mutex<Vec<String>>,
    payloads: Mutex<Vec<QuestionPayload>>,
    next_id: AtomicUsize,
    fail_mutations: AtomicBool,
    fail_lists: AtomicBool,
    gated: AtomicBool,
    gate: (Mutex<bool>, Condvar),
}

/// In-memory stand-in for the question service.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Inner>,
}

impl FakeApi {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let api = Self::default();
        *api.inner.server.lock().unwrap() = questions;
        api
    }

    /// Mutations block until [`FakeApi::release`] is called.
    pub fn gated(self) -> Self {
        self.inner.gated.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_mutations(self) -> Self {
        self.inner.fail_mutations.store(true, Ordering::SeqCst);
        self
    }

    pub fn fail_lists(&self) {
        self.inner.fail_lists.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        let (lock, cvar) = &self.inner.gate;
        *lock.lock().unwrap() = true;
        cvar.notify_all();
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn last_payload(&self) -> Option<QuestionPayload> {
        self.inner.payloads.lock().unwrap().last().cloned()
    }

    fn record(&self, call: String) {
        self.inner.calls.lock().unwrap().push(call);
    }

    fn wait_gate(&self) {
        if !self.inner.gated.load(Ordering::SeqCst) {
            return;
        }
        let (lock, cvar) = &self.inner.gate;
        let mut open = lock.lock().unwrap();
        while !*open {
            open = cvar.wait(open).unwrap();
        }
    }

    fn mutation_result(&self) -> Result<(), TransportError> {
        self.wait_gate();
        if self.inner.fail_mutations.load(Ordering::SeqCst) {
            return Err(TransportError::Status {
                status: 500,
                url: "http://fake/question".into(),
                body: "boom".into(),
            });
        }
        Ok(())
    }

    fn to_question(id: String, payload: &QuestionPayload) -> Question {
        Question {
            id,
            kind: payload.kind.clone(),
            content: payload.content.clone(),
            hint: Some(payload.hint.clone()),
            explanation: Some(payload.explanation.clone()),
            difficulty: payload.difficulty,
            reference: Some(payload.reference.clone()),
        }
    }
}

impl QuestionApi for FakeApi {
    fn list(&self) -> Result<Vec<Question>, TransportError> {
        self.record("list".into());
        self.wait_gate();
        if self.inner.fail_lists.load(Ordering::SeqCst) {
            return Err(TransportError::Status {
                status: 502,
                url: "http://fake/question".into(),
                body: String::new(),
            });
        }
        Ok(self.inner.server.lock().unwrap().clone())
    }

    fn create(&self, payload: &QuestionPayload) -> Result<Value, TransportError> {
        self.record("create".into());
        self.inner.payloads.lock().unwrap().push(payload.clone());
        self.mutation_result()?;

        let id = format!("new-{}", self.inner.next_id.fetch_add(1, Ordering::SeqCst));
        let created = Self::to_question(id.clone(), payload);
        self.inner.server.lock().unwrap().push(created);
        Ok(json!({ "id": id }))
    }

    fn update(&self, id: &str, payload: &QuestionPayload) -> Result<Value, TransportError> {
        self.record(format!("update:{id}"));
        self.inner.payloads.lock().unwrap().push(payload.clone());
        self.mutation_result()?;

        let mut server = self.inner.server.lock().unwrap();
        if let Some(slot) = server.iter_mut().find(|q| q.id == id) {
            *slot = Self::to_question(id.to_string(), payload);
        }
        Ok(json!({ "id": id }))
    }

    fn delete(&self, id: &str) -> Result<Value, TransportError> {
        self.record(format!("delete:{id}"));
        self.mutation_result()?;

        self.inner.server.lock().unwrap().retain(|q| q.id != id);
        Ok(json!({ "deleted": true }))
    }
}
