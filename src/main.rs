mod agent;
mod config;
mod errors;
mod models;
mod routes;
mod service;

use tracing::info;

use crate::agent::OllamaAgentService;
use crate::config::ServerConfig;
use crate::service::answer_service::AnswerService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medibot=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let agent = OllamaAgentService::new(&config)?;
    let answer_service = AnswerService::new(agent);
    let app = routes::router(answer_service);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(model = %config.model, ollama = %config.ollama_base_url, "Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
