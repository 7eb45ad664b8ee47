use std::{fmt, str::FromStr};

use crate::error_handler::ConfigError;

/// Hosted provider serving an OpenAI-compatible REST API.
///
/// Both providers speak the same wire format (`/v1/chat/completions`,
/// `/v1/embeddings`); they differ only in defaults and the env variable that
/// carries the API key.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmProvider;
///
/// let p: LlmProvider = "groq".parse().unwrap();
/// assert_eq!(p.api_key_var(), "GROQ_API_KEY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Groq cloud (`https://api.groq.com/openai`).
    Groq,
    /// OpenAI API (`https://api.openai.com`).
    OpenAI,
}

impl LlmProvider {
    /// Base URL used when `LLM_ENDPOINT` is not set.
    pub fn default_endpoint(self) -> &'static str {
        match self {
            LlmProvider::Groq => "https://api.groq.com/openai",
            LlmProvider::OpenAI => "https://api.openai.com",
        }
    }

    /// Chat model used when `LLM_MODEL` is not set.
    pub fn default_model(self) -> &'static str {
        match self {
            LlmProvider::Groq => "llama-3.3-70b-versatile",
            LlmProvider::OpenAI => "gpt-4o-mini",
        }
    }

    /// Whether the provider's own base URL serves `/v1/embeddings`.
    pub fn serves_embeddings(self) -> bool {
        match self {
            LlmProvider::Groq => false,
            LlmProvider::OpenAI => true,
        }
    }

    /// Environment variable holding the bearer key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            LlmProvider::Groq => "GROQ_API_KEY",
            LlmProvider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::Groq => f.write_str("Groq"),
            LlmProvider::OpenAI => f.write_str("OpenAI"),
        }
    }
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(LlmProvider::Groq),
            "openai" | "chatgpt" => Ok(LlmProvider::OpenAI),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}
