/// Answering service endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/get_response";

/// Settings injected into the chat widget when it is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
}

impl WidgetConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Reads `MEDIBOT_ENDPOINT` at compile time; the wasm bundle has no
    /// process environment to consult at runtime.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MEDIBOT_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT))
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
