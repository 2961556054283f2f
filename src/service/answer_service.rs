use tracing::info;

use crate::agent::OllamaAgentService;
use crate::errors::AppError;
use crate::models::{AnswerResponse, QueryRequest};
use crate::service::catalog;

const MAX_QUERY_LENGTH: usize = 8000;

#[derive(Clone)]
pub struct AnswerService {
    agent: OllamaAgentService,
}

impl AnswerService {
    pub fn new(agent: OllamaAgentService) -> Self {
        Self { agent }
    }

    pub async fn answer(&self, request: QueryRequest) -> Result<AnswerResponse, AppError> {
        // ── Validation ────────────────────────────────────────────────────────
        if request.query.trim().is_empty() {
            return Err(AppError::EmptyField { field_name: "query".to_string() });
        }
        if request.query.len() > MAX_QUERY_LENGTH {
            return Err(AppError::FieldTooLong {
                field_name: "query".to_string(),
                max_length: MAX_QUERY_LENGTH,
                actual_length: request.query.len(),
            });
        }

        // ── Catalog first ─────────────────────────────────────────────────────
        if let Some(disease) = catalog::match_disease(&request.query) {
            info!(disease = disease.name, "Answering from catalog");
            return Ok(AnswerResponse::Disease {
                disease_info: disease.information.to_string(),
                prevention: disease.prevention.to_string(),
                remedies: disease.remedies.to_string(),
                doctor_recommendations: catalog::recommend_doctor(disease.name),
            });
        }

        // ── Otherwise ask the model ───────────────────────────────────────────
        let response = self.agent.answer(&request.query).await?;
        Ok(AnswerResponse::Generic { response })
    }
}
