//! Context sources behind one call: `context(question) -> String`.

use std::sync::Arc;

use rag_store::RagStore;

use crate::{error::ContextorError, remote::RemoteContent};

/// Separator between retrieved chunks in the prompt context.
pub const CHUNK_SEPARATOR: &str = "\n\n";

pub enum ContentSource {
    /// Pre-built vector index over the source document.
    Indexed(Arc<RagStore>),
    /// Site content fetched on every question.
    Remote(RemoteContent),
}

impl ContentSource {
    /// Produces the context block for `question`.
    ///
    /// The remote source ignores the question and returns the whole document.
    ///
    /// # Errors
    /// Embedding failures for the indexed source, fetch failures for the
    /// remote one.
    pub async fn context(&self, question: &str) -> Result<String, ContextorError> {
        match self {
            Self::Indexed(store) => {
                let hits = store.retrieve(question).await?;
                Ok(hits
                    .iter()
                    .map(|h| h.chunk.text.as_str())
                    .collect::<Vec<_>>()
                    .join(CHUNK_SEPARATOR))
            }
            Self::Remote(remote) => remote.context().await,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Indexed(_) => "indexed",
            Self::Remote(_) => "remote_json",
        }
    }
}
