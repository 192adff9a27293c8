use thiserror::Error;

/// Shown when neither a structured detail nor a transport message exists.
pub const GENERIC_SESSION_ERROR: &str = "Failed to start session.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to call practice API: {0}")]
    Transport(String),
    #[error("practice API returned HTTP {status}: {body_excerpt}")]
    Backend {
        status: u16,
        detail: Option<String>,
        body_excerpt: String,
    },
    #[error("malformed practice API response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Reduces any failure to the one string a screen displays inline:
    /// the server's `detail` field when present, else the transport-level
    /// message, else a generic fallback. Never empty, never a raw body.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            Self::Backend { status, .. } => {
                format!("Request failed with status code {status}")
            }
            Self::Transport(message) if !message.trim().is_empty() => message.clone(),
            Self::Transport(_) | Self::Malformed(_) => GENERIC_SESSION_ERROR.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_detail_wins_verbatim() {
        let err = ApiError::Backend {
            status: 500,
            detail: Some("no questions available".to_owned()),
            body_excerpt: "{\"detail\":\"no questions available\"}".to_owned(),
        };
        assert_eq!(err.user_message(), "no questions available");
    }

    #[test]
    fn backend_without_detail_reports_the_status() {
        let err = ApiError::Backend {
            status: 502,
            detail: None,
            body_excerpt: "<html>bad gateway</html>".to_owned(),
        };
        assert_eq!(err.user_message(), "Request failed with status code 502");
    }

    #[test]
    fn transport_and_malformed_errors_never_reduce_to_an_empty_string() {
        let timeout = ApiError::Transport("connection timed out".to_owned());
        assert_eq!(timeout.user_message(), "connection timed out");

        let blank = ApiError::Transport("  ".to_owned());
        assert_eq!(blank.user_message(), GENERIC_SESSION_ERROR);

        let malformed = ApiError::Malformed("missing field `questions`".to_owned());
        assert_eq!(malformed.user_message(), GENERIC_SESSION_ERROR);
    }
}
