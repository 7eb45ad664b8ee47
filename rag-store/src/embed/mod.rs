use crate::errors::RagError;
use std::{future::Future, pin::Pin};

/// Boxed future returned by [`EmbeddingsProvider`] methods.
pub type EmbedFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RagError>> + Send + 'a>>;

/// Provider interface for embedding generation.
///
/// Async because real providers either call HTTP APIs or push CPU-bound
/// inference onto the blocking pool. The same provider must embed both the
/// chunks and the questions so that vectors share one space.
pub trait EmbeddingsProvider: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Embeds a single text.
    fn embed<'a>(&'a self, text: &'a str) -> EmbedFuture<'a, Vec<f32>>;

    /// Embeds many texts, preserving order.
    ///
    /// The default implementation calls [`EmbeddingsProvider::embed`] one text
    /// at a time.
    fn embed_batch<'a>(&'a self, texts: &'a [String]) -> EmbedFuture<'a, Vec<Vec<f32>>> {
        Box::pin(async move {
            let mut out = Vec::with_capacity(texts.len());
            for t in texts {
                out.push(self.embed(t).await?);
            }
            Ok(out)
        })
    }
}

pub mod local;
pub mod remote;
