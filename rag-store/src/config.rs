//! Index configuration.

use std::path::PathBuf;

use crate::errors::RagError;

/// Configuration for building and querying the in-memory index.
#[derive(Clone, Debug, PartialEq)]
pub struct RagConfig {
    /// Document indexed at startup (`.pdf`, or anything else read as UTF-8 text).
    pub source_path: PathBuf,
    /// Maximum chunk length in characters.
    pub chunk_size: usize,
    /// Characters shared by neighbouring chunks.
    pub chunk_overlap: usize,
    /// Number of chunks returned per question.
    pub top_k: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("Resume.pdf"),
            chunk_size: 500,
            chunk_overlap: 50,
            top_k: 3,
        }
    }
}

impl RagConfig {
    /// Validates config values.
    ///
    /// # Errors
    /// Returns `RagError::Config` for a zero chunk size or top-k, or an
    /// overlap that is not smaller than the chunk size.
    pub fn validate(&self) -> Result<(), RagError> {
        if self.chunk_size == 0 {
            return Err(RagError::Config("chunk_size must be > 0".into()));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(RagError::Config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        if self.top_k == 0 {
            return Err(RagError::Config("top_k must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = RagConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.chunk_size, cfg.chunk_overlap, cfg.top_k), (500, 50, 3));
    }

    #[test]
    fn overlap_must_be_smaller_than_chunk() {
        let cfg = RagConfig {
            chunk_overlap: 500,
            ..RagConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(RagError::Config(_))));
    }
}
