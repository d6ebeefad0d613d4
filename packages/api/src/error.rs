//! Errors returned by the remote client.

use serde::Deserialize;
use store::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend is not configured: {0}")]
    Config(String),
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// The error body shapes the hosted backend uses. PostgREST sends `message`,
/// the auth service sends `msg` or `error_description`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Status {
                status,
                message: error_message(body),
            },
        }
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error_description).or(b.error))
        .unwrap_or_else(|| body.trim().to_string())
}

impl From<ApiError> for BackendError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => BackendError::Unauthorized,
            ApiError::Status { status, message } => BackendError::Rejected { status, message },
            ApiError::Transport(e) => BackendError::Transport(e.to_string()),
            ApiError::Decode(msg) => BackendError::Decode(msg),
            ApiError::Config(msg) => BackendError::Transport(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_are_unauthorized() {
        assert!(matches!(ApiError::from_status(401, ""), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(403, "{}"), ApiError::Unauthorized));
    }

    #[test]
    fn test_message_is_taken_from_json_body() {
        let err = ApiError::from_status(
            400,
            r#"{"code":"22P02","message":"invalid input syntax for type uuid","details":null}"#,
        );
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "invalid input syntax for type uuid");
            }
            other => panic!("unexpected {other:?}"),
        }

        let err = ApiError::from_status(422, r#"{"msg":"Token has expired"}"#);
        assert!(matches!(err, ApiError::Status { message, .. } if message == "Token has expired"));
    }

    #[test]
    fn test_plain_text_body_is_kept() {
        let err = ApiError::from_status(502, " Bad gateway \n");
        assert!(matches!(err, ApiError::Status { message, .. } if message == "Bad gateway"));
    }

    #[test]
    fn test_converts_into_backend_error() {
        assert_eq!(BackendError::from(ApiError::Unauthorized), BackendError::Unauthorized);
        assert_eq!(
            BackendError::from(ApiError::from_status(409, r#"{"message":"duplicate key"}"#)),
            BackendError::Rejected {
                status: 409,
                message: "duplicate key".into()
            }
        );
        assert_eq!(
            BackendError::from(ApiError::Decode("eof".into())),
            BackendError::Decode("eof".into())
        );
    }
}
