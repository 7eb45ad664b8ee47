//! LLM configs resolved from environment variables.
//!
//! Every constructor has a `*_from(lookup)` form taking a variable lookup
//! function, and the plain form reads the process environment.
//!
//! # Environment variables
//!
//! - `LLM_PROVIDER`      = `groq` (default) or `openai`
//! - `GROQ_API_KEY` / `OPENAI_API_KEY` = bearer key (mandatory, per provider)
//! - `LLM_MODEL`         = chat model (provider default otherwise)
//! - `LLM_ENDPOINT`      = API base URL (provider default otherwise)
//! - `LLM_MAX_TOKENS`    = optional max tokens (u32)
//! - `LLM_TEMPERATURE`   = optional temperature (0.0..=2.0)
//! - `LLM_TOP_P`         = optional nucleus sampling cutoff (0.0..=1.0)
//! - `LLM_TIMEOUT_SECS`  = optional client timeout (u64)
//! - `EMBEDDING_MODEL`   = remote embedding model (default `text-embedding-3-small`)
//! - `EMBEDDING_ENDPOINT` / `EMBEDDING_API_KEY` = separate embeddings host and
//!   key (required for providers without `/v1/embeddings`, such as Groq)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, must_var, opt_number, opt_var, process_env,
        validate_http_endpoint, validate_range_f32,
    },
};

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Constructs the chat config from the process environment.
///
/// # Errors
/// See [`config_chat_from`].
pub fn config_chat() -> Result<LlmModelConfig, AiLlmError> {
    config_chat_from(process_env)
}

/// Constructs the chat config from an arbitrary variable lookup.
///
/// # Errors
/// - [`crate::ConfigError::MissingVar`] when the provider's API key is absent
/// - [`crate::ConfigError::UnsupportedProvider`] for an unknown `LLM_PROVIDER`
/// - [`crate::ConfigError::InvalidNumber`] / [`crate::ConfigError::OutOfRange`]
///   for malformed knobs
///
/// # Example
/// ```
/// use ai_llm_service::config_chat_from;
///
/// let cfg = config_chat_from(|k| (k == "GROQ_API_KEY").then(|| "gsk_test".to_string()))
///     .unwrap();
/// assert_eq!(cfg.model, "llama-3.3-70b-versatile");
/// ```
pub fn config_chat_from<F>(lookup: F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let provider = match opt_var(&lookup, "LLM_PROVIDER") {
        Some(raw) => raw.parse::<LlmProvider>()?,
        None => LlmProvider::Groq,
    };

    let api_key = must_var(&lookup, provider.api_key_var())?;

    let endpoint = opt_var(&lookup, "LLM_ENDPOINT")
        .unwrap_or_else(|| provider.default_endpoint().to_string());
    validate_http_endpoint("LLM_ENDPOINT", &endpoint)?;

    let model =
        opt_var(&lookup, "LLM_MODEL").unwrap_or_else(|| provider.default_model().to_string());

    let max_tokens = opt_number::<_, u32>(&lookup, "LLM_MAX_TOKENS", "expected u32")?;
    let timeout_secs = opt_number::<_, u64>(&lookup, "LLM_TIMEOUT_SECS", "expected u64")?;
    let temperature = opt_number::<_, f32>(&lookup, "LLM_TEMPERATURE", "expected f32")?;
    if let Some(t) = temperature {
        validate_range_f32("temperature", "expected 0.0..=2.0", t, 0.0, 2.0)?;
    }
    let top_p = opt_number::<_, f32>(&lookup, "LLM_TOP_P", "expected f32")?;
    if let Some(p) = top_p {
        validate_range_f32("top_p", "expected 0.0..=1.0", p, 0.0, 1.0)?;
    }

    Ok(LlmModelConfig {
        provider,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature,
        top_p,
        timeout_secs,
    })
}

/// Derives the remote embedding config from the chat config.
///
/// Endpoint and key default to the chat profile's; `EMBEDDING_ENDPOINT` and
/// `EMBEDDING_API_KEY` point embeddings at another host.
///
/// # Errors
/// - [`ConfigError::EmbeddingsUnsupported`] when the chat provider has no
///   embeddings endpoint and `EMBEDDING_ENDPOINT` is unset
/// - [`ConfigError::InvalidFormat`] for a non-HTTP `EMBEDDING_ENDPOINT`
pub fn config_embedding_from<F>(lookup: F, chat: &LlmModelConfig) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = match opt_var(&lookup, "EMBEDDING_ENDPOINT") {
        Some(url) => {
            validate_http_endpoint("EMBEDDING_ENDPOINT", &url)?;
            url
        }
        None if chat.provider.serves_embeddings() => chat.endpoint.clone(),
        None => return Err(ConfigError::EmbeddingsUnsupported(chat.provider).into()),
    };
    let api_key = opt_var(&lookup, "EMBEDDING_API_KEY").or_else(|| chat.api_key.clone());
    let model =
        opt_var(&lookup, "EMBEDDING_MODEL").unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string());

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key,
        max_tokens: None,
        temperature: None,
        top_p: None,
        ..chat.clone()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = config_chat_from(vars(&[])).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::MissingVar("GROQ_API_KEY"))
        ));
    }

    #[test]
    fn groq_defaults_apply() {
        let cfg = config_chat_from(vars(&[("GROQ_API_KEY", "gsk_1")])).unwrap();
        assert_eq!(cfg.provider, LlmProvider::Groq);
        assert_eq!(cfg.endpoint, "https://api.groq.com/openai");
        assert_eq!(cfg.model, "llama-3.3-70b-versatile");
        assert_eq!(cfg.api_key.as_deref(), Some("gsk_1"));
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn openai_provider_reads_its_own_key() {
        let err = config_chat_from(vars(&[
            ("LLM_PROVIDER", "openai"),
            ("GROQ_API_KEY", "gsk_1"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn knobs_are_parsed_and_validated() {
        let cfg = config_chat_from(vars(&[
            ("GROQ_API_KEY", "k"),
            ("LLM_MODEL", "llama-3.1-8b-instant"),
            ("LLM_MAX_TOKENS", "256"),
            ("LLM_TEMPERATURE", "0.3"),
        ]))
        .unwrap();
        assert_eq!(cfg.model, "llama-3.1-8b-instant");
        assert_eq!(cfg.max_tokens, Some(256));
        assert_eq!(cfg.temperature, Some(0.3));

        let err = config_chat_from(vars(&[("GROQ_API_KEY", "k"), ("LLM_TEMPERATURE", "7")]))
            .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::OutOfRange { field: "temperature", .. })
        ));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = config_chat_from(vars(&[("LLM_PROVIDER", "mystery")])).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn top_p_is_parsed_and_validated() {
        let cfg = config_chat_from(vars(&[("GROQ_API_KEY", "k"), ("LLM_TOP_P", "0.9")])).unwrap();
        assert_eq!(cfg.top_p, Some(0.9));

        let err = config_chat_from(vars(&[("GROQ_API_KEY", "k"), ("LLM_TOP_P", "1.5")]))
            .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::OutOfRange { field: "top_p", .. })
        ));
    }

    #[test]
    fn embedding_profile_reuses_openai_credentials() {
        let chat = config_chat_from(vars(&[("LLM_PROVIDER", "openai"), ("OPENAI_API_KEY", "sk")]))
            .unwrap();
        let emb = config_embedding_from(vars(&[]), &chat).unwrap();
        assert_eq!(emb.model, DEFAULT_EMBEDDING_MODEL);
        assert_eq!(emb.api_key, chat.api_key);
        assert_eq!(emb.endpoint, chat.endpoint);
    }

    #[test]
    fn groq_embeddings_need_a_separate_endpoint() {
        let chat = config_chat_from(vars(&[("GROQ_API_KEY", "gsk")])).unwrap();
        let err = config_embedding_from(vars(&[]), &chat).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::EmbeddingsUnsupported(LlmProvider::Groq))
        ));

        let emb = config_embedding_from(
            vars(&[
                ("EMBEDDING_ENDPOINT", "https://api.openai.com"),
                ("EMBEDDING_API_KEY", "sk"),
            ]),
            &chat,
        )
        .unwrap();
        assert_eq!(emb.endpoint, "https://api.openai.com");
        assert_eq!(emb.api_key.as_deref(), Some("sk"));

        let err = config_embedding_from(vars(&[("EMBEDDING_ENDPOINT", "api.openai.com")]), &chat)
            .unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::InvalidFormat { var: "EMBEDDING_ENDPOINT", .. })
        ));
    }
}
