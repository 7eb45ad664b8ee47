//! Unified error types for the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for rag-store operations.
#[derive(Debug, Error)]
pub enum RagError {
    /// I/O or filesystem errors.
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source document does not exist.
    #[error("source document not found: {0}")]
    MissingDocument(PathBuf),

    /// PDF could not be parsed.
    #[error("pdf error in {path}: {reason}")]
    Pdf { path: PathBuf, reason: String },

    /// Document produced no text at all.
    #[error("source document has no extractable text: {0}")]
    EmptyDocument(PathBuf),

    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Embedding backend failure.
    #[error("embedding error: {0}")]
    Embedding(String),

    /// Remote embedding provider failure.
    #[error(transparent)]
    Llm(#[from] ai_llm_service::AiLlmError),

    /// Mismatch in vector dimensionality.
    #[error("vector size mismatch: got {got}, want {want}")]
    VectorSizeMismatch { got: usize, want: usize },

    /// Blocking task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
