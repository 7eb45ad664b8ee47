//! Shared LLM service for the portfolio backend.
//!
//! Talks to OpenAI-compatible chat-completion and embedding endpoints (Groq by
//! default). Construct [`service_profiles::LlmServiceProfiles`] once at startup,
//! wrap it in `Arc`, and hand clones to dependents.

pub mod config;
pub mod error_handler;
pub mod service_profiles;
pub mod services;

pub use config::{
    default_config::{config_chat, config_chat_from, config_embedding_from},
    llm_model_config::LlmModelConfig,
    llm_provider::LlmProvider,
};
pub use error_handler::{AiLlmError, ConfigError, ProviderError, ProviderErrorKind};
pub use service_profiles::LlmServiceProfiles;
