use crate::server::ErrorResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Upstream call timed out after {0:?}")]
    Timeout(std::time::Duration),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }
}

/// Errors surfaced to HTTP callers.
///
/// The `Display` text of each variant is exactly the `detail` returned in the
/// response body, so nothing from the upstream provider leaks through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("API key not configured")]
    Configuration,

    #[error("{detail}")]
    Validation { status: StatusCode, detail: String },

    #[error("Origin not allowed")]
    OriginRejected,

    #[error("no response received")]
    UpstreamEmpty,

    #[error("authentication error")]
    Auth,

    #[error("rate limit exceeded")]
    RateLimit,

    #[error("internal server error")]
    Internal,
}

impl ChatError {
    pub fn empty_message() -> Self {
        Self::Validation {
            status: StatusCode::BAD_REQUEST,
            detail: "message must not be empty".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::OriginRejected => StatusCode::FORBIDDEN,
            Self::Configuration | Self::UpstreamEmpty | Self::Auth | Self::RateLimit | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ChatError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// Coarse category of an upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    Auth,
    RateLimit,
    Internal,
}

/// Classifies an upstream failure by its error text.
pub fn classify_error(text: &str) -> UpstreamErrorKind {
    if text.contains("API key") {
        UpstreamErrorKind::Auth
    } else if text.contains("Rate limit") {
        UpstreamErrorKind::RateLimit
    } else {
        UpstreamErrorKind::Internal
    }
}

impl From<UpstreamErrorKind> for ChatError {
    fn from(kind: UpstreamErrorKind) -> Self {
        match kind {
            UpstreamErrorKind::Auth => Self::Auth,
            UpstreamErrorKind::RateLimit => Self::RateLimit,
            UpstreamErrorKind::Internal => Self::Internal,
        }
    }
}
