use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        json_rejection_error(rejection)
    }
}

impl Error {
    /// Codes below 100 are ours; the message is not shown to callers.
    pub fn is_internal(&self) -> bool {
        (1..=99).contains(&self.code)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = if self.is_internal() {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        } else {
            (StatusCode::BAD_REQUEST, self.message.as_str())
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn invalid_coordinate_error() -> Error {
    Error {
        code: 102,
        message: "coordinate out of range".into(),
    }
}

pub fn unknown_region_error() -> Error {
    Error {
        code: 103,
        message: "unknown state or district".into(),
    }
}

/// Malformed request bodies are caller errors. An out-of-range coordinate
/// surfaces from deep inside the deserializer, so look for it in the chain.
pub fn json_rejection_error(rejection: JsonRejection) -> Error {
    tracing::warn!("rejected request body: {}", rejection);

    let coordinate_message = invalid_coordinate_error().message;
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&rejection);

    while let Some(err) = source {
        if err.to_string().contains(&coordinate_message) {
            return invalid_coordinate_error();
        }
        source = err.source();
    }

    invalid_input_error()
}

pub fn env_var_error(err: env::VarError) -> Error {
    tracing::error!("environment variable error: {}", err);

    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::error!("reqwest error: {}", err);

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn config_error() -> Error {
    Error {
        code: 6,
        message: "configuration error".into(),
    }
}

#[test]
fn internal_errors_hide_their_message() {
    let response = upstream_error().into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = unknown_region_error().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn env_var_errors_convert() {
    let err: Error = env::VarError::NotPresent.into();
    assert_eq!(err.code, 1);
    assert!(err.is_internal());
    assert!(!invalid_input_error().is_internal());
}
