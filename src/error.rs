use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Tagged error kinds for the core API. The HTTP boundary maps kinds, not
/// message text, to transport status codes.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid API credentials")]
    Authentication,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(#[source] anyhow::Error),
}

impl GatewayError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::Validation(_) => "BAD_REQUEST_ERROR",
            Self::NotFound(_) => "NOT_FOUND_ERROR",
            Self::Storage(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let Self::Storage(err) = &self {
            tracing::error!("storage failure: {err:#}");
        }

        let description = match &self {
            // Internal detail stays out of the wire body.
            Self::Storage(_) => "internal error".to_string(),
            other => other.to_string(),
        };

        let envelope = ErrorEnvelope {
            error: ErrorBody {
                code: self.code().to_string(),
                description,
            },
        };

        (self.status(), Json(envelope)).into_response()
    }
}
