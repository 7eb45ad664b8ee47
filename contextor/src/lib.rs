//! Question answering over portfolio content.
//!
//! Public API: [`Contextor::ask`]. It collects context for the question from
//! the configured [`ContentSource`] (top-k chunks of an indexed document, or a
//! flattened remote JSON document), fills the prompt template, calls the chat
//! model, and returns the model answer.

mod api_types;
mod cfg;
mod error;
mod prompt;
mod remote;
mod source;

pub use api_types::QaAnswer;
pub use cfg::{ContentMode, ContextorConfig, DEFAULT_SITE_CONTENT_URL, EmbeddingKind};
pub use error::ContextorError;
pub use prompt::{TEMPLATE, build_prompt};
pub use remote::{RemoteContent, SiteContent};
pub use source::{CHUNK_SEPARATOR, ContentSource};

use std::{sync::Arc, time::Instant};

use ai_llm_service::LlmServiceProfiles;
use rag_store::{EmbeddingsProvider, LocalEmbedder, RagStore, RemoteEmbedder};
use tracing::{debug, info};

/// Context source plus chat model, shared by all requests.
pub struct Contextor {
    source: ContentSource,
    llm: Arc<LlmServiceProfiles>,
}

impl Contextor {
    pub fn new(source: ContentSource, llm: Arc<LlmServiceProfiles>) -> Self {
        Self { source, llm }
    }

    /// Prepares the context source described by `cfg`.
    ///
    /// In `pdf` mode this loads the model (or checks the remote embedding
    /// profile), reads and splits the document and embeds every chunk, so it
    /// must finish before the server accepts traffic.
    ///
    /// # Errors
    /// Any load, parse or embedding failure. All of them are startup errors.
    ///
    /// # Example
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use contextor::{Contextor, ContextorConfig};
    /// # use ai_llm_service::{LlmServiceProfiles, config_chat};
    /// # #[tokio::main] async fn main() {
    /// let llm = Arc::new(LlmServiceProfiles::new(config_chat().unwrap(), None).unwrap());
    /// let ctx = Contextor::from_config(&ContextorConfig::from_env().unwrap(), llm)
    ///     .await
    ///     .unwrap();
    /// let qa = ctx.ask("What are her skills?").await.unwrap();
    /// println!("{}", qa.answer);
    /// # }
    /// ```
    pub async fn from_config(
        cfg: &ContextorConfig,
        llm: Arc<LlmServiceProfiles>,
    ) -> Result<Self, ContextorError> {
        let source = match cfg.mode {
            ContentMode::Pdf => {
                let embedder: Arc<dyn EmbeddingsProvider> = match cfg.embedding {
                    EmbeddingKind::Local => Arc::new(LocalEmbedder::load().await?),
                    EmbeddingKind::Remote => Arc::new(RemoteEmbedder::new(Arc::clone(&llm))?),
                };
                let store = RagStore::build(cfg.rag.clone(), embedder).await?;
                ContentSource::Indexed(Arc::new(store))
            }
            ContentMode::RemoteJson => {
                info!(url = %cfg.site_content_url, "site content will be fetched per question");
                ContentSource::Remote(RemoteContent::new(cfg.site_content_url.clone()))
            }
        };
        Ok(Self::new(source, llm))
    }

    /// Answers `question` from the configured content.
    ///
    /// The question is trimmed but otherwise passed through; rejecting empty
    /// questions is the caller's job.
    ///
    /// # Errors
    /// Context collection failures and chat-completion failures.
    pub async fn ask(&self, question: &str) -> Result<QaAnswer, ContextorError> {
        let started = Instant::now();
        let question = question.trim();
        info!(
            source = self.source.kind(),
            question_len = question.chars().count(),
            "answering question"
        );
        debug!(question, "question text");

        let context = self.source.context(question).await?;
        debug!(context_chars = context.chars().count(), "context collected");

        let prompt = build_prompt(&context, question);
        let answer = self.llm.generate(&prompt, None).await?;

        info!(
            answer_chars = answer.chars().count(),
            elapsed_ms = started.elapsed().as_millis(),
            "answer generated"
        );
        Ok(QaAnswer { answer, context })
    }
}
