//! Typed error for the contextor crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextorError {
    /// Errors from the in-memory index (startup build or question embedding).
    #[error("RAG error: {0}")]
    Rag(#[from] rag_store::RagError),

    /// Chat-completion or remote embedding failures.
    #[error("LLM error: {0}")]
    Llm(#[from] ai_llm_service::AiLlmError),

    /// Remote site content could not be fetched or understood.
    #[error("failed to fetch site content from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),
}
