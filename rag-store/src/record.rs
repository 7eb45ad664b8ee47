//! Core data models used by the library.

/// Text of a single document page, as produced by the loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number (`1` for plain-text documents).
    pub page: u32,
    pub text: String,
}

/// Contiguous, non-empty span of source text.
///
/// Identity is the position in the index; chunks are never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentChunk {
    /// Index of the chunk across the whole document.
    pub position: usize,
    /// Page the chunk was cut from.
    pub page: u32,
    pub text: String,
}

/// A single retrieval hit with its cosine similarity.
#[derive(Clone, Debug)]
pub struct RagHit {
    pub score: f32,
    pub chunk: DocumentChunk,
}
