use crate::model::{Question, QuestionPayload};
use log::debug;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use thiserror::Error;

const QUESTION_PATH: &str = "/question";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not reach the question service: {0}")]
    Request(#[from] reqwest::Error),
    #[error("question service returned HTTP {status} for {url}{}", body_suffix(.body))]
    Status {
        status: u16,
        url: String,
        body: String,
    },
    #[error("invalid JSON from the question service: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("cannot build a request URL from {base}: {reason}")]
    InvalidUrl { base: String, reason: String },
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(". Body: {body}")
    }
}

/// The four REST operations the admin view relies on.
pub trait QuestionApi: Send + Sync {
    fn list(&self) -> Result<Vec<Question>, TransportError>;
    fn create(&self, payload: &QuestionPayload) -> Result<Value, TransportError>;
    fn update(&self, id: &str, payload: &QuestionPayload) -> Result<Value, TransportError>;
    fn delete(&self, id: &str) -> Result<Value, TransportError>;
}

pub(crate) fn trim_trailing_slashes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed == "/" {
        return String::new();
    }
    trimmed.trim_end_matches('/').to_string()
}

pub struct HttpQuestionApi {
    client: Client,
    base_url: String,
}

impl HttpQuestionApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_trailing_slashes(base_url),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}{QUESTION_PATH}", self.base_url)
    }

    /// Item URL with `id` pushed as a single escaped path segment.
    pub fn item_url(&self, id: &str) -> Result<Url, TransportError> {
        let base = self.collection_url();
        let invalid = |reason: String| TransportError::InvalidUrl {
            base: base.clone(),
            reason,
        };
        let mut url = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot carry a path".into()))?
            .push(id);
        Ok(url)
    }

    fn read_body(response: Response) -> Result<String, TransportError> {
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text()?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url,
                body: text.trim().to_string(),
            });
        }
        Ok(text)
    }

    fn read_json(response: Response) -> Result<Value, TransportError> {
        let text = Self::read_body(response)?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl QuestionApi for HttpQuestionApi {
    fn list(&self) -> Result<Vec<Question>, TransportError> {
        let url = self.collection_url();
        debug!("GET {url}");
        let text = Self::read_body(self.client.get(&url).send()?)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn create(&self, payload: &QuestionPayload) -> Result<Value, TransportError> {
        let url = self.collection_url();
        debug!("POST {url}");
        Self::read_json(self.client.post(&url).json(payload).send()?)
    }

    fn update(&self, id: &str, payload: &QuestionPayload) -> Result<Value, TransportError> {
        let url = self.item_url(id)?;
        debug!("PATCH {url}");
        Self::read_json(self.client.patch(url).json(payload).send()?)
    }

    fn delete(&self, id: &str) -> Result<Value, TransportError> {
        let url = self.item_url(id)?;
        debug!("DELETE {url}");
        Self::read_json(self.client.delete(url).send()?)
    }
}
