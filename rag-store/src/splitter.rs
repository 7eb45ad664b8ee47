//! Recursive character splitter.
//!
//! Splits on the coarsest separator present in the text (`"\n\n"`, `"\n"`,
//! `" "`, then single characters), greedily merges the pieces into chunks of at
//! most `chunk_size` characters, and carries up to `chunk_overlap` characters
//! of trailing pieces into the next chunk. Pieces that are still too long are
//! split again with the next finer separator.
//!
//! Separators stay attached to the start of the piece that follows them, and
//! every emitted chunk is trimmed; whitespace-only chunks are dropped.

use std::collections::VecDeque;

use crate::errors::RagError;

const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

#[derive(Clone, Debug)]
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
}

impl RecursiveCharacterSplitter {
    /// # Errors
    /// Returns `RagError::Config` if `chunk_size` is zero or `chunk_overlap`
    /// is not smaller than `chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, RagError> {
        if chunk_size == 0 || chunk_overlap >= chunk_size {
            return Err(RagError::Config(format!(
                "invalid splitter window: size={chunk_size} overlap={chunk_overlap}"
            )));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, &self.separators)
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect()
    }

    fn split_recursive(&self, text: &str, separators: &[String]) -> Vec<String> {
        let mut separator = separators.last().map(String::as_str).unwrap_or("");
        let mut finer: &[String] = &[];
        for (i, s) in separators.iter().enumerate() {
            if s.is_empty() {
                separator = "";
                break;
            }
            if text.contains(s.as_str()) {
                separator = s;
                finer = &separators[i + 1..];
                break;
            }
        }

        let mut out = Vec::new();
        let mut good: Vec<&str> = Vec::new();
        for piece in split_keeping_separator(text, separator) {
            if char_len(piece) < self.chunk_size {
                good.push(piece);
                continue;
            }
            if !good.is_empty() {
                out.extend(self.merge_splits(&good));
                good.clear();
            }
            if finer.is_empty() {
                out.push(piece.to_string());
            } else {
                out.extend(self.split_recursive(piece, finer));
            }
        }
        if !good.is_empty() {
            out.extend(self.merge_splits(&good));
        }
        out
    }

    /// Greedy merge of small pieces into windows with overlap.
    fn merge_splits(&self, splits: &[&str]) -> Vec<String> {
        let mut docs = Vec::new();
        let mut current: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for &piece in splits {
            let len = char_len(piece);
            if total + len > self.chunk_size && !current.is_empty() {
                if let Some(doc) = join_trimmed(&current) {
                    docs.push(doc);
                }
                // Keep at most `chunk_overlap` chars, and make room for `piece`.
                while total > self.chunk_overlap || (total > 0 && total + len > self.chunk_size) {
                    match current.pop_front() {
                        Some(first) => total -= char_len(first),
                        None => break,
                    }
                }
            }
            current.push_back(piece);
            total += len;
        }

        if let Some(doc) = join_trimmed(&current) {
            docs.push(doc);
        }
        docs
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn join_trimmed(parts: &VecDeque<&str>) -> Option<String> {
    let joined: String = parts.iter().copied().collect();
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits `text` before every occurrence of `sep`; empty pieces are dropped.
fn split_keeping_separator<'t>(text: &'t str, sep: &str) -> Vec<&'t str> {
    if sep.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    let mut out = Vec::new();
    let mut start = 0;
    for (idx, _) in text.match_indices(sep) {
        if idx > start {
            out.push(&text[start..idx]);
        }
        start = idx;
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_trimmed_chunk() {
        let s = RecursiveCharacterSplitter::new(500, 50).unwrap();
        assert_eq!(s.split_text("  Jane Doe, engineer.\n"), vec!["Jane Doe, engineer."]);
    }

    #[test]
    fn blank_text_yields_nothing() {
        let s = RecursiveCharacterSplitter::new(500, 50).unwrap();
        assert!(s.split_text("").is_empty());
        assert!(s.split_text(" \n\n \n").is_empty());
    }

    #[test]
    fn words_are_merged_with_overlap() {
        let s = RecursiveCharacterSplitter::new(10, 5).unwrap();
        let chunks = s.split_text("one two three four five six");
        assert_eq!(chunks, vec!["one two", "two three", "four five", "five six"]);
    }

    #[test]
    fn paragraph_boundaries_win() {
        let s = RecursiveCharacterSplitter::new(12, 0).unwrap();
        let chunks = s.split_text("alpha beta\n\ngamma delta");
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn long_runs_fall_back_to_characters() {
        let s = RecursiveCharacterSplitter::new(4, 1).unwrap();
        let chunks = s.split_text("abcdefghij");
        assert!(chunks.iter().all(|c| c.chars().count() <= 4));
        assert_eq!(chunks.first().map(String::as_str), Some("abcd"));
        // Each window starts with the last char of the previous one.
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].chars().last(), pair[1].chars().next());
        }
    }

    #[test]
    fn chunks_respect_size_and_cover_text() {
        let text = "Experience\n\nBuilt a data pipeline in Rust. Shipped a search service. \
                    Mentored two interns.\nSkills: Rust, Python, SQL, Kubernetes.\n\n\
                    Education\n\nB.E. in Computer Science, 2024.";
        let s = RecursiveCharacterSplitter::new(60, 10).unwrap();
        let chunks = s.split_text(text);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| !c.is_empty() && c.chars().count() <= 60));
        for word in ["Experience", "Kubernetes.", "Education", "2024."] {
            assert!(chunks.iter().any(|c| c.contains(word)), "{word} lost");
        }
    }

    #[test]
    fn multibyte_text_is_safe() {
        let s = RecursiveCharacterSplitter::new(3, 1).unwrap();
        let chunks = s.split_text("héllo wörld ✓✓✓✓");
        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| c.chars().count() <= 3));
    }

    #[test]
    fn invalid_window_is_rejected() {
        assert!(RecursiveCharacterSplitter::new(0, 0).is_err());
        assert!(RecursiveCharacterSplitter::new(10, 10).is_err());
    }
}
