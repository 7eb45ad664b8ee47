//! Brute-force in-memory vector index.
//!
//! Built once, read-only afterwards. Search scores every chunk with cosine
//! similarity and returns the best `k`, ties broken by chunk position so that
//! identical queries always return identical results.

use crate::{
    errors::RagError,
    record::{DocumentChunk, RagHit},
};

#[derive(Debug)]
struct Entry {
    chunk: DocumentChunk,
    vector: Vec<f32>,
    norm: f32,
}

#[derive(Debug, Default)]
pub struct MemoryIndex {
    entries: Vec<Entry>,
    dim: usize,
}

impl MemoryIndex {
    /// Builds the index from chunks and their vectors (same order).
    ///
    /// # Errors
    /// - `RagError::Config` if the two lists differ in length
    /// - `RagError::VectorSizeMismatch` if vectors disagree on dimension
    pub fn build(chunks: Vec<DocumentChunk>, vectors: Vec<Vec<f32>>) -> Result<Self, RagError> {
        if chunks.len() != vectors.len() {
            return Err(RagError::Config(format!(
                "{} chunks but {} embeddings",
                chunks.len(),
                vectors.len()
            )));
        }

        let dim = vectors.first().map_or(0, Vec::len);
        let mut entries = Vec::with_capacity(chunks.len());
        for (chunk, vector) in chunks.into_iter().zip(vectors) {
            if vector.len() != dim {
                return Err(RagError::VectorSizeMismatch {
                    got: vector.len(),
                    want: dim,
                });
            }
            let norm = l2_norm(&vector);
            entries.push(Entry {
                chunk,
                vector,
                norm,
            });
        }
        Ok(Self { entries, dim })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vector dimension (0 for an empty index).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the `min(k, len)` most similar chunks, best first.
    ///
    /// No similarity threshold is applied.
    ///
    /// # Errors
    /// `RagError::VectorSizeMismatch` if `query` has the wrong dimension.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<RagHit>, RagError> {
        if self.entries.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        if query.len() != self.dim {
            return Err(RagError::VectorSizeMismatch {
                got: query.len(),
                want: self.dim,
            });
        }

        let qnorm = l2_norm(query);
        let mut scored: Vec<(f32, &Entry)> = self
            .entries
            .iter()
            .map(|e| (cosine(query, qnorm, &e.vector, e.norm), e))
            .collect();

        scored.sort_by(|(sa, a), (sb, b)| {
            sb.total_cmp(sa)
                .then_with(|| a.chunk.position.cmp(&b.chunk.position))
        });

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(score, e)| RagHit {
                score,
                chunk: e.chunk.clone(),
            })
            .collect())
    }
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

fn cosine(a: &[f32], na: f32, b: &[f32], nb: f32) -> f32 {
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let s = dot / (na * nb);
    if s.is_nan() { 0.0 } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(position: usize, text: &str) -> DocumentChunk {
        DocumentChunk {
            position,
            page: 1,
            text: text.to_string(),
        }
    }

    fn sample() -> MemoryIndex {
        MemoryIndex::build(
            vec![
                chunk(0, "x-axis"),
                chunk(1, "y-axis"),
                chunk(2, "diagonal"),
                chunk(3, "negative x"),
            ],
            vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 1.0],
                vec![-1.0, 0.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn returns_top_k_by_descending_similarity() {
        let idx = sample();
        let hits = idx.search(&[1.0, 0.1], 3).unwrap();
        let texts: Vec<_> = hits.iter().map(|h| h.chunk.text.as_str()).collect();
        assert_eq!(texts, vec!["x-axis", "diagonal", "y-axis"]);
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn k_larger_than_index_returns_everything() {
        let idx = sample();
        assert_eq!(idx.search(&[0.3, 0.7], 10).unwrap().len(), 4);
    }

    #[test]
    fn ties_are_broken_by_position() {
        let idx = MemoryIndex::build(
            vec![chunk(0, "a"), chunk(1, "b"), chunk(2, "c")],
            vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]],
        )
        .unwrap();
        let hits = idx.search(&[1.0, 0.0], 3).unwrap();
        let positions: Vec<_> = hits.iter().map(|h| h.chunk.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn search_is_deterministic() {
        let idx = sample();
        let a = idx.search(&[0.2, 0.9], 3).unwrap();
        let b = idx.search(&[0.2, 0.9], 3).unwrap();
        let ta: Vec<_> = a.iter().map(|h| &h.chunk.text).collect();
        let tb: Vec<_> = b.iter().map(|h| &h.chunk.text).collect();
        assert_eq!(ta, tb);
    }

    #[test]
    fn zero_vectors_score_zero() {
        let idx = MemoryIndex::build(vec![chunk(0, "blank")], vec![vec![0.0, 0.0]]).unwrap();
        let hits = idx.search(&[1.0, 0.0], 1).unwrap();
        assert_eq!(hits[0].score, 0.0);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let idx = sample();
        assert!(matches!(
            idx.search(&[1.0, 0.0, 0.0], 1),
            Err(RagError::VectorSizeMismatch { got: 3, want: 2 })
        ));

        let err = MemoryIndex::build(
            vec![chunk(0, "a"), chunk(1, "b")],
            vec![vec![1.0], vec![1.0, 2.0]],
        )
        .unwrap_err();
        assert!(matches!(err, RagError::VectorSizeMismatch { .. }));
    }
}
