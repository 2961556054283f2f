use crate::errors::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.2";

/// Server settings, read from the process environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub ollama_base_url: String,
    pub model: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match lookup("MEDIBOT_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("MEDIBOT_PORT '{raw}': {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("MEDIBOT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            ollama_base_url: lookup("OLLAMA_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string()),
            model: lookup("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
