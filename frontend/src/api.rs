use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use crate::config::WidgetConfig;
use crate::models::{AnswerBody, QueryRequest};

/// Why a request to the answering service produced no reply.
///
/// The widget treats every variant the same way; the detail is only logged.
#[derive(Debug, Error)]
pub enum RequestFailed {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Body(String),
}

/// Something that can turn a user query into a reply from the answering service.
#[allow(async_fn_in_trait)]
pub trait AnswerClient {
    async fn ask(&self, query: &str) -> Result<AnswerBody, RequestFailed>;
}

/// Talks to the answering service over HTTP from the browser.
#[derive(Clone, Debug)]
pub struct HttpAnswerClient {
    endpoint: String,
}

impl HttpAnswerClient {
    pub fn new(config: &WidgetConfig) -> Self {
        Self { endpoint: config.endpoint.clone() }
    }
}

impl AnswerClient for HttpAnswerClient {
    async fn ask(&self, query: &str) -> Result<AnswerBody, RequestFailed> {
        let resp = Request::post(&self.endpoint)
            .json(&QueryRequest { query })
            .map_err(|e| RequestFailed::Body(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestFailed::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(RequestFailed::Status(resp.status()));
        }

        let body = resp
            .json::<Value>()
            .await
            .map_err(|e| RequestFailed::Body(e.to_string()))?;
        Ok(AnswerBody::from_json(&body))
    }
}
