use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let head: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", head, body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            404 => FetchError::NotFound(truncated),
            429 => FetchError::RateLimited,
            500..=599 => FetchError::ServerError(truncated),
            _ => FetchError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_maps_common_codes() {
        assert!(matches!(
            FetchError::from_status(StatusCode::NOT_FOUND, "missing"),
            FetchError::NotFound(_)
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            FetchError::RateLimited
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::BAD_GATEWAY, "oops"),
            FetchError::ServerError(_)
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::FORBIDDEN, "no"),
            FetchError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_truncate_body_long() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH + 10);
        let truncated = FetchError::truncate_body(&body);
        assert!(truncated.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.contains("truncated, 510 total bytes"));
    }

    #[test]
    fn test_truncate_body_multibyte_safe() {
        let body = "é".repeat(MAX_ERROR_BODY_LENGTH + 1);
        // Would panic if sliced on a byte offset
        let truncated = FetchError::truncate_body(&body);
        assert!(truncated.starts_with(&"é".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.contains("truncated"));
    }

    #[test]
    fn test_multibyte_body_at_limit_kept_whole() {
        let body = "é".repeat(MAX_ERROR_BODY_LENGTH);
        assert_eq!(FetchError::truncate_body(&body), body);
    }
}
