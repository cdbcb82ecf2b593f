use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// A non-2xx response, with whatever the backend put in its error envelope.
#[derive(Debug, Error)]
#[error("ApiError {status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub data: Option<Value>,
}

impl ApiError {
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let data: Option<Value> = serde_json::from_str(body).ok();
        let message = data
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Self {
            status,
            message,
            data,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("api error: {0}")]
    ApiError(#[from] ApiError),
    #[error("decode error ({status}): {source}")]
    DecodeError {
        status: StatusCode,
        source: serde_json::Error,
    },
    #[error("session io error: {0}")]
    SessionError(#[from] std::io::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn api_error_extracts_backend_message() {
        let error = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"The email field is required.","errors":{"email":["required"]}}"#,
        );
        assert_eq!(error.message, "The email field is required.");
        assert!(error.data.is_some());
    }

    #[test]
    fn api_error_falls_back_to_status_text() {
        let error = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(error.message, "Bad Gateway");
        assert!(error.data.is_none());
    }

    #[test]
    fn api_error_ignores_blank_message_field() {
        let error = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"message":""}"#);
        assert_eq!(error.message, "Not Found");
        assert!(error.is_not_found());
    }
}
