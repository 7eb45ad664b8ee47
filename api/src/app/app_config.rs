//! Server configuration resolved once at startup.

use ai_llm_service::{
    LlmModelConfig, config_chat_from, config_embedding_from,
    error_handler::{opt_var, process_env},
};
use contextor::{ContentMode, ContextorConfig, EmbeddingKind};

use crate::error_handler::AppError;

pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// Origin allowed by default when serving the indexed resume.
pub const DEFAULT_PDF_ORIGIN: &str = "https://my-portfolio-fhyq.onrender.com";

/// Origin allowed by default when serving remote site content.
pub const DEFAULT_REMOTE_JSON_ORIGIN: &str = "https://manojnhegde.github.io";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_address: String,
    pub cors_origins: Vec<String>,
    pub chat: LlmModelConfig,
    /// Set only when chunks are embedded through the provider API.
    pub embedding: Option<LlmModelConfig>,
    pub contextor: ContextorConfig,
}

impl AppConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(process_env)
    }

    /// Resolves every knob from `lookup`.
    ///
    /// # Errors
    /// `AppError::Config` for a missing API key or any malformed value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contextor =
            ContextorConfig::from_lookup(&lookup).map_err(|e| AppError::Config(e.to_string()))?;
        let chat = config_chat_from(&lookup)?;

        let embedding = if contextor.mode == ContentMode::Pdf
            && contextor.embedding == EmbeddingKind::Remote
        {
            Some(config_embedding_from(&lookup, &chat)?)
        } else {
            None
        };

        let api_address =
            opt_var(&lookup, "API_ADDRESS").unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

        let cors_origins = match opt_var(&lookup, "CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => vec![default_origin(contextor.mode).to_string()],
        };

        Ok(Self {
            api_address,
            cors_origins,
            chat,
            embedding,
            contextor,
        })
    }
}

fn default_origin(mode: ContentMode) -> &'static str {
    match mode {
        ContentMode::Pdf => DEFAULT_PDF_ORIGIN,
        ContentMode::RemoteJson => DEFAULT_REMOTE_JSON_ORIGIN,
    }
}

/// Splits a comma-separated list; blanks and trailing slashes are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
