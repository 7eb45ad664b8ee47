//! Shared LLM service with a `chat` profile and an optional `embedding` profile.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once at startup, wrap in `Arc`, and pass clones to dependents.
//! - Clients are built eagerly, so the service is immutable afterwards and
//!   needs no locking on the request path.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::{LlmServiceProfiles, config_chat};
//!
//! # async fn run() -> Result<(), ai_llm_service::AiLlmError> {
//! let svc = Arc::new(LlmServiceProfiles::new(config_chat()?, None)?);
//! let txt = svc.generate("Hello world", None).await?;
//! println!("{txt}");
//! # Ok(()) }
//! ```

use std::sync::Arc;

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, ConfigError},
    services::open_ai_service::OpenAiService,
};

/// Chat + embedding clients bundled behind one handle.
#[derive(Debug)]
pub struct LlmServiceProfiles {
    chat: Arc<OpenAiService>,
    embedding: Option<Arc<OpenAiService>>,
}

impl LlmServiceProfiles {
    /// Creates the service.
    ///
    /// - `chat`: required chat-completion profile.
    /// - `embedding`: optional remote embedding profile; `None` when
    ///   embeddings are computed elsewhere.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if either client cannot be constructed.
    pub fn new(
        chat: LlmModelConfig,
        embedding: Option<LlmModelConfig>,
    ) -> Result<Self, AiLlmError> {
        let chat = Arc::new(OpenAiService::new(chat)?);
        let embedding = match embedding {
            Some(cfg) => Some(Arc::new(OpenAiService::new(cfg)?)),
            None => None,
        };
        Ok(Self { chat, embedding })
    }

    /// Generates text using the **chat** profile.
    ///
    /// # Arguments
    /// - `prompt`: input text prompt (sent as the user message).
    /// - `system`: optional system instruction.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if generation fails.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        self.chat.generate(prompt, system).await
    }

    /// Computes embeddings using the **embedding** profile.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingEmbeddingProfile`] when the service was
    /// built without one, or the provider error otherwise.
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>, AiLlmError> {
        let cli = self
            .embedding
            .as_ref()
            .ok_or(ConfigError::MissingEmbeddingProfile)?;
        cli.embeddings(input).await
    }

    /// Returns the chat profile config.
    pub fn chat_profile(&self) -> &LlmModelConfig {
        self.chat.config()
    }

    /// Returns the embedding profile config, if any.
    pub fn embedding_profile(&self) -> Option<&LlmModelConfig> {
        self.embedding.as_deref().map(OpenAiService::config)
    }
}
