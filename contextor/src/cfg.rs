//! Runtime configuration loaded from environment variables.
//!
//! - `CONTENT_SOURCE`     = `pdf` (default) or `remote_json`
//! - `SOURCE_DOC_PATH`    = document indexed at startup (default `Resume.pdf`)
//! - `RAG_CHUNK_SIZE`     = chunk length in characters (default 500)
//! - `RAG_CHUNK_OVERLAP`  = overlap in characters (default 50)
//! - `RAG_TOP_K`          = chunks per question (default 3)
//! - `EMBEDDING_PROVIDER` = `local` (default) or `remote`
//! - `SITE_CONTENT_URL`   = JSON document fetched per question in `remote_json` mode

use std::{fmt, str::FromStr};

use ai_llm_service::error_handler::{opt_var, process_env};
use rag_store::RagConfig;

use crate::error::ContextorError;

pub const DEFAULT_SITE_CONTENT_URL: &str = "https://manojnhegde.github.io/data/site-content.json";

/// Where the context for a question comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentMode {
    /// Document indexed once at startup, top-k chunks per question.
    Pdf,
    /// JSON document fetched for every question.
    RemoteJson,
}

impl FromStr for ContentMode {
    type Err = ContextorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" | "document" => Ok(Self::Pdf),
            "remote_json" | "remote-json" | "json" => Ok(Self::RemoteJson),
            other => Err(ContextorError::Config(format!(
                "CONTENT_SOURCE: unsupported value `{other}` (expected pdf or remote_json)"
            ))),
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pdf => "pdf",
            Self::RemoteJson => "remote_json",
        })
    }
}

/// Which backend turns text into vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbeddingKind {
    /// In-process all-MiniLM-L6-v2.
    Local,
    /// Provider `/v1/embeddings` endpoint.
    Remote,
}

impl FromStr for EmbeddingKind {
    type Err = ContextorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "fastembed" => Ok(Self::Local),
            "remote" | "api" => Ok(Self::Remote),
            other => Err(ContextorError::Config(format!(
                "EMBEDDING_PROVIDER: unsupported value `{other}` (expected local or remote)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContextorConfig {
    pub mode: ContentMode,
    pub embedding: EmbeddingKind,
    pub rag: RagConfig,
    pub site_content_url: String,
}

impl Default for ContextorConfig {
    fn default() -> Self {
        Self {
            mode: ContentMode::Pdf,
            embedding: EmbeddingKind::Local,
            rag: RagConfig::default(),
            site_content_url: DEFAULT_SITE_CONTENT_URL.to_string(),
        }
    }
}

impl ContextorConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    /// See [`ContextorConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ContextorError> {
        Self::from_lookup(process_env)
    }

    /// Builds the config from an arbitrary variable lookup, falling back to
    /// defaults for unset or blank variables.
    ///
    /// # Errors
    /// `ContextorError::Config` for unknown enum values, malformed numbers,
    /// non-HTTP site URLs or chunk settings the splitter cannot use.
    ///
    /// # Example
    /// ```
    /// use contextor::{ContentMode, ContextorConfig};
    ///
    /// let cfg = ContextorConfig::from_lookup(|k| {
    ///     (k == "CONTENT_SOURCE").then(|| "remote_json".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(cfg.mode, ContentMode::RemoteJson);
    /// assert_eq!(cfg.rag.top_k, 3);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContextorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mode = match opt_var(&lookup, "CONTENT_SOURCE") {
            Some(v) => v.parse()?,
            None => defaults.mode,
        };
        let embedding = match opt_var(&lookup, "EMBEDDING_PROVIDER") {
            Some(v) => v.parse()?,
            None => defaults.embedding,
        };

        let rag = RagConfig {
            source_path: opt_var(&lookup, "SOURCE_DOC_PATH")
                .map(Into::into)
                .unwrap_or(defaults.rag.source_path),
            chunk_size: parse_usize(&lookup, "RAG_CHUNK_SIZE", defaults.rag.chunk_size)?,
            chunk_overlap: parse_usize(&lookup, "RAG_CHUNK_OVERLAP", defaults.rag.chunk_overlap)?,
            top_k: parse_usize(&lookup, "RAG_TOP_K", defaults.rag.top_k)?,
        };
        rag.validate()
            .map_err(|e| ContextorError::Config(e.to_string()))?;

        let site_content_url =
            opt_var(&lookup, "SITE_CONTENT_URL").unwrap_or(defaults.site_content_url);
        if !(site_content_url.starts_with("http://") || site_content_url.starts_with("https://")) {
            return Err(ContextorError::Config(
                "SITE_CONTENT_URL: must start with http:// or https://".into(),
            ));
        }

        Ok(Self {
            mode,
            embedding,
            rag,
            site_content_url,
        })
    }
}

fn parse_usize<F>(lookup: &F, name: &str, default: usize) -> Result<usize, ContextorError>
where
    F: Fn(&str) -> Option<String>,
{
    match opt_var(lookup, name) {
        Some(v) => v
            .parse()
            .map_err(|_| ContextorError::Config(format!("{name}: expected a non-negative integer, got `{v}`"))),
        None => Ok(default),
    }
}
