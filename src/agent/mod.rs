use std::error::Error as StdError;
use std::io::ErrorKind;

use rig::client::Nothing;
use rig::completion::{Prompt, PromptError};
use rig::prelude::CompletionClient;
use rig::providers::ollama;
use tracing::error;

use crate::config::ServerConfig;
use crate::errors::AppError;

const PREAMBLE: &str = "You are a helpful medical information assistant. \
                        Be concise, accurate, and friendly. \
                        You do not replace a doctor; suggest seeing one when symptoms sound serious. \
                        If you don't know something, say so.";

/// Answers free-form questions with a local Ollama model through rig.
///
/// Every question is a fresh single-turn prompt; no history is kept.
#[derive(Clone)]
pub struct OllamaAgentService {
    client: ollama::Client,
    base_url: String,
    model: String,
}

impl OllamaAgentService {
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        let client = ollama::Client::builder()
            .api_key(Nothing)
            .base_url(&config.ollama_base_url)
            .build()
            .map_err(|e| AppError::Config(format!("Ollama client: {e:?}")))?;
        Ok(Self {
            client,
            base_url: config.ollama_base_url.clone(),
            model: config.model.clone(),
        })
    }

    pub async fn answer(&self, question: &str) -> Result<String, AppError> {
        let agent = self
            .client
            .agent(&self.model)
            .preamble(PREAMBLE)
            .build();

        agent.prompt(question).await.map_err(|e| {
            error!("Ollama inference failed: {e}");
            classify_prompt_error(e, &self.base_url)
        })
    }
}

fn classify_prompt_error(err: PromptError, host: &str) -> AppError {
    if is_connection_failure(&err) {
        AppError::OllamaUnavailable { host: host.to_string() }
    } else {
        AppError::InferenceError { message: err.to_string() }
    }
}

/// Whether anything in the `source()` chain says the model could not be reached.
///
/// rig only prints the outermost "error sending request" text, so the
/// transport's `io::Error` has to be dug out of the chain.
fn is_connection_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionRefused
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::NotConnected
                    | ErrorKind::AddrNotAvailable
                    | ErrorKind::TimedOut
            ) {
                return true;
            }
        }
        // Fallback for transports that don't expose an io::Error.
        let msg = e.to_string();
        if msg.contains("Connection refused") || msg.contains("connect") {
            return true;
        }
        current = e.source();
    }
    false
}
