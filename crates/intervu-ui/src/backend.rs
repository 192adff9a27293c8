use async_trait::async_trait;

use intervu_api::{ApiError, CreateSessionPayload, CreateSessionResponse, SessionClient};

/// Boundary the shell talks to when it needs a new practice session. The
/// application wires the HTTP client in; tests install a fake.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn create_session(
        &self,
        payload: CreateSessionPayload,
    ) -> Result<CreateSessionResponse, ApiError>;
}

#[async_trait]
impl SessionBackend for SessionClient {
    async fn create_session(
        &self,
        payload: CreateSessionPayload,
    ) -> Result<CreateSessionResponse, ApiError> {
        SessionClient::create_session(self, &payload).await
    }
}
