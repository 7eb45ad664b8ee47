use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contextor::ContextorError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to prepare content source: {0}")]
    Rag(#[source] ContextorError),

    // --- IO / server ---
    #[error("failed to bind listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    // --- Request ---
    #[error("{0}")]
    BadRequest(String),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Http { status, .. } => *status,
            // startup-only
            AppError::Config(_)
            | AppError::Rag(_)
            | AppError::Bind { .. }
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Rag(_) => "RAG_ERROR",
            AppError::Bind { .. } => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            detail: self.to_string(),
        };
        if status.is_server_error() {
            error!(status = status.as_u16(), code = body.error, detail = %body.detail, "request failed");
        } else {
            warn!(status = status.as_u16(), code = body.error, detail = %body.detail, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Malformed body, wrong content type or missing fields are all client errors.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

/// Request-time failures from the answering pipeline.
///
/// Fetch, embedding and model errors share one upstream class; the detail
/// carries the underlying message.
impl From<ContextorError> for AppError {
    fn from(err: ContextorError) -> Self {
        let code = match &err {
            ContextorError::Fetch { .. } => "CONTENT_FETCH_ERROR",
            ContextorError::Rag(_) => "RETRIEVAL_ERROR",
            ContextorError::Llm(_) => "LLM_ERROR",
            ContextorError::Config(_) => "CONFIG_ERROR",
        };
        AppError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code,
            message: err.to_string(),
        }
    }
}

impl From<ai_llm_service::AiLlmError> for AppError {
    fn from(err: ai_llm_service::AiLlmError) -> Self {
        AppError::Config(err.to_string())
    }
}
