use std::fmt;

use async_trait::async_trait;

use crate::error::ApiError;

/// Raw outcome of an HTTP exchange: status plus the undecoded body. The
/// client layer decides what a given status/body combination means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseParts {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<ResponseParts, ApiError>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent("intervu/api-client")
            .build()
            .map_err(|err| {
                ApiError::Transport(format!("failed to initialize practice API client: {err}"))
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<ResponseParts, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(format!("failed to read response body: {err}")))?;

        Ok(ResponseParts { status, body })
    }
}
