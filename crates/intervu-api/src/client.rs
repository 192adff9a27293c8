use std::sync::Arc;

use serde::{Deserialize, Serialize};

use intervu_core::{InterviewConfig, Question, SessionId, INTERVIEW_DOMAIN};

use crate::error::ApiError;
use crate::transport::HttpTransport;

const SESSIONS_PATH: &str = "/sessions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSessionPayload {
    pub domain: String,
    pub role: String,
    pub difficulty: String,
    pub num_questions: u32,
}

impl CreateSessionPayload {
    pub fn from_config(config: &InterviewConfig) -> Self {
        Self {
            domain: INTERVIEW_DOMAIN.to_owned(),
            role: config.role.clone(),
            difficulty: config.difficulty.as_str().to_owned(),
            num_questions: config.question_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: SessionId,
    pub questions: Vec<Question>,
}

/// Structured error body the backend sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

pub struct SessionClient {
    transport: Arc<dyn HttpTransport>,
}

impl SessionClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Creates a practice session. Failures are classified so the caller
    /// can reduce them to one display string; the caller only touches its
    /// session store on `Ok`.
    pub async fn create_session(
        &self,
        payload: &CreateSessionPayload,
    ) -> Result<CreateSessionResponse, ApiError> {
        let body = serde_json::to_value(payload)
            .map_err(|err| ApiError::Malformed(format!("failed to encode payload: {err}")))?;
        let parts = self.transport.post_json(SESSIONS_PATH, body).await?;

        if !(200..300).contains(&parts.status) {
            return Err(ApiError::Backend {
                status: parts.status,
                detail: extract_detail(&parts.body),
                body_excerpt: truncate_for_error(&parts.body),
            });
        }

        serde_json::from_str(&parts.body)
            .map_err(|err| ApiError::Malformed(format!("failed to decode session response: {err}")))
    }
}

fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.trim().is_empty())
}

fn truncate_for_error(body: &str) -> String {
    const MAX_LEN: usize = 200;
    if body.chars().count() <= MAX_LEN {
        body.to_owned()
    } else {
        format!("{}...", body.chars().take(MAX_LEN).collect::<String>())
    }
}
