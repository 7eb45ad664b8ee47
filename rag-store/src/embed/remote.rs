//! Embeddings served by the OpenAI-compatible `/v1/embeddings` endpoint.

use std::sync::Arc;

use ai_llm_service::LlmServiceProfiles;

use crate::{
    embed::{EmbedFuture, EmbeddingsProvider},
    errors::RagError,
};

/// Remote embedding provider backed by the shared LLM service.
#[derive(Clone)]
pub struct RemoteEmbedder {
    svc: Arc<LlmServiceProfiles>,
    model: String,
}

impl RemoteEmbedder {
    /// # Errors
    /// Returns `RagError::Config` if `svc` has no embedding profile.
    pub fn new(svc: Arc<LlmServiceProfiles>) -> Result<Self, RagError> {
        let model = svc
            .embedding_profile()
            .map(|p| p.model.clone())
            .ok_or_else(|| RagError::Config("remote embeddings need an embedding profile".into()))?;
        Ok(Self { svc, model })
    }
}

impl EmbeddingsProvider for RemoteEmbedder {
    fn name(&self) -> &str {
        &self.model
    }

    fn embed<'a>(&'a self, text: &'a str) -> EmbedFuture<'a, Vec<f32>> {
        Box::pin(async move { Ok(self.svc.embed(text).await?) })
    }
}
