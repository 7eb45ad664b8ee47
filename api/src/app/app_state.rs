use std::sync::Arc;

use ai_llm_service::LlmServiceProfiles;
use contextor::Contextor;
use tracing::info;

use crate::{app::app_config::AppConfig, error_handler::AppError};

/// Shared state for all HTTP handlers.
///
/// Built completely before the listener binds and never mutated afterwards.
pub struct AppState {
    pub contextor: Contextor,
}

impl AppState {
    pub fn new(contextor: Contextor) -> Self {
        Self { contextor }
    }

    /// Creates the LLM clients and prepares the content source.
    ///
    /// # Errors
    /// `AppError::Config` if a client cannot be created, `AppError::Rag` if
    /// the document cannot be loaded or indexed.
    pub async fn build(cfg: &AppConfig) -> Result<Self, AppError> {
        let llm = Arc::new(LlmServiceProfiles::new(
            cfg.chat.clone(),
            cfg.embedding.clone(),
        )?);
        info!(
            provider = %cfg.chat.provider,
            model = %cfg.chat.model,
            mode = %cfg.contextor.mode,
            "preparing content source"
        );

        let contextor = Contextor::from_config(&cfg.contextor, llm)
            .await
            .map_err(AppError::Rag)?;
        Ok(Self::new(contextor))
    }
}
