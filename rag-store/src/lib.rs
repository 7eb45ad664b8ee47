//! In-memory RAG facade: load → split → embed → index, then top-k retrieval.
//!
//! The index is built once before the HTTP listener binds and is read-only
//! afterwards, so a built [`RagStore`] can be shared behind an `Arc` without
//! any locking.

mod config;
mod errors;
mod index;
mod loader;
mod record;
mod splitter;
#[cfg(test)]
mod test_pdf;

pub mod embed;

pub use config::RagConfig;
pub use embed::{EmbeddingsProvider, local::LocalEmbedder, remote::RemoteEmbedder};
pub use errors::RagError;
pub use index::MemoryIndex;
pub use loader::load_document;
pub use record::{DocumentChunk, PageText, RagHit};
pub use splitter::RecursiveCharacterSplitter;

use std::{sync::Arc, time::Instant};

use tracing::{debug, info};

/// Resident vector index plus the embedder that built it.
pub struct RagStore {
    cfg: RagConfig,
    index: MemoryIndex,
    embedder: Arc<dyn EmbeddingsProvider>,
}

impl RagStore {
    /// Loads `cfg.source_path` and builds the index.
    ///
    /// Document parsing runs on the blocking pool.
    ///
    /// # Errors
    /// Config, load, parse, empty-document and embedding errors. All of them
    /// are fatal at startup.
    pub async fn build(
        cfg: RagConfig,
        embedder: Arc<dyn EmbeddingsProvider>,
    ) -> Result<Self, RagError> {
        cfg.validate()?;
        let path = cfg.source_path.clone();
        info!(path = %path.display(), "loading source document");
        let pages = tokio::task::spawn_blocking(move || load_document(&path)).await??;
        Self::from_pages(cfg, pages, embedder).await
    }

    /// Builds the index from already-loaded pages.
    ///
    /// # Errors
    /// `RagError::EmptyDocument` if splitting yields no chunk, plus config
    /// and embedding errors.
    pub async fn from_pages(
        cfg: RagConfig,
        pages: Vec<PageText>,
        embedder: Arc<dyn EmbeddingsProvider>,
    ) -> Result<Self, RagError> {
        cfg.validate()?;
        let started = Instant::now();
        let splitter = RecursiveCharacterSplitter::new(cfg.chunk_size, cfg.chunk_overlap)?;

        let mut chunks = Vec::new();
        for page in &pages {
            for text in splitter.split_text(&page.text) {
                chunks.push(DocumentChunk {
                    position: chunks.len(),
                    page: page.page,
                    text,
                });
            }
        }
        if chunks.is_empty() {
            return Err(RagError::EmptyDocument(cfg.source_path.clone()));
        }
        info!(pages = pages.len(), chunks = chunks.len(), "document split");

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = embedder.embed_batch(&texts).await?;
        let index = MemoryIndex::build(chunks, vectors)?;

        info!(
            chunks = index.len(),
            dim = index.dim(),
            embedder = embedder.name(),
            elapsed_ms = started.elapsed().as_millis(),
            "vector index built"
        );

        Ok(Self {
            cfg,
            index,
            embedder,
        })
    }

    /// Retrieves the configured top-k chunks for `question`.
    ///
    /// # Errors
    /// Embedding failures for the question.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<RagHit>, RagError> {
        self.retrieve_k(question, self.cfg.top_k).await
    }

    /// Retrieves `min(k, len)` chunks, best first, without a score floor.
    ///
    /// # Errors
    /// Embedding failures for the question.
    pub async fn retrieve_k(&self, question: &str, k: usize) -> Result<Vec<RagHit>, RagError> {
        let qv = self.embedder.embed(question).await?;
        let hits = self.index.search(&qv, k)?;
        debug!(
            k,
            hits = hits.len(),
            best = hits.first().map(|h| h.score),
            "retrieved context"
        );
        Ok(hits)
    }

    pub fn config(&self) -> &RagConfig {
        &self.cfg
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
