//! Local sentence embeddings via `fastembed` (ONNX, all-MiniLM-L6-v2).
//!
//! The model is downloaded on first use into fastembed's cache directory.
//! Inference needs exclusive access to the session, so the model sits behind
//! a `Mutex` and every call runs on the blocking pool.

use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use crate::{
    embed::{EmbedFuture, EmbeddingsProvider},
    errors::RagError,
};

const MODEL_NAME: &str = "sentence-transformers/all-MiniLM-L6-v2";

#[derive(Clone)]
pub struct LocalEmbedder {
    model: Arc<Mutex<TextEmbedding>>,
}

impl LocalEmbedder {
    /// Loads (and if needed downloads) the model on the blocking pool.
    ///
    /// # Errors
    /// Returns `RagError::Embedding` if the model cannot be initialised.
    pub async fn load() -> Result<Self, RagError> {
        let model = tokio::task::spawn_blocking(|| {
            let opts =
                InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false);
            TextEmbedding::try_new(opts).map_err(|e| RagError::Embedding(e.to_string()))
        })
        .await??;

        info!(model = MODEL_NAME, "local embedding model ready");
        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }

    fn run(&self, texts: Vec<String>) -> EmbedFuture<'static, Vec<Vec<f32>>> {
        let model = Arc::clone(&self.model);
        Box::pin(async move {
            tokio::task::spawn_blocking(move || {
                let mut model = model
                    .lock()
                    .map_err(|_| RagError::Embedding("embedding model lock poisoned".into()))?;
                model
                    .embed(texts, None)
                    .map_err(|e| RagError::Embedding(e.to_string()))
            })
            .await?
        })
    }
}

impl EmbeddingsProvider for LocalEmbedder {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn embed<'a>(&'a self, text: &'a str) -> EmbedFuture<'a, Vec<f32>> {
        let fut = self.run(vec![text.to_string()]);
        Box::pin(async move {
            fut.await?
                .into_iter()
                .next()
                .ok_or_else(|| RagError::Embedding("model returned no embeddings".into()))
        })
    }

    fn embed_batch<'a>(&'a self, texts: &'a [String]) -> EmbedFuture<'a, Vec<Vec<f32>>> {
        self.run(texts.to_vec())
    }
}
