use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::types::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a request carries no diary content.
pub const CONTENT_REQUIRED_MESSAGE: &str = "일기 내용을 입력해주세요.";

/// Message shown when the Gemini credential is not configured.
pub const API_KEY_MISSING_MESSAGE: &str = "API 키가 서버에 설정되지 않았습니다.";

/// Message shown for every failure of the analysis call itself.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "AI 분석 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Diary content is missing or empty")]
    MissingContent,

    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Status and message shown to the caller. Anything upstream-originated
    /// collapses to one generic message; the detail stays in the server
    /// logs.
    pub fn public_parts(&self) -> (StatusCode, &'static str) {
        match self {
            Self::MissingContent => (StatusCode::BAD_REQUEST, CONTENT_REQUIRED_MESSAGE),
            Self::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, API_KEY_MISSING_MESSAGE),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED_MESSAGE),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = self.public_parts();
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
