//! Comparison engine: prompt construction and LLM invocation

mod openai;
mod prompt;

pub use openai::OpenAiClient;
pub use prompt::PromptBuilder;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::extraction::ExtractedText;

/// Sentinel returned when the provider answers with zero completions
pub const NO_RESPONSE: &str = "No response generated";

/// Trait for chat-completion providers.
///
/// Implementations:
/// - [`OpenAiClient`]: OpenAI-compatible chat completion API
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one completion for the prompt.
    ///
    /// Returns `None` when the provider produced zero completions; transport,
    /// auth, and provider errors come back as [`crate::Error::LlmInvocation`].
    async fn complete(&self, prompt: &str) -> Result<Option<String>>;

    /// Check if the provider is reachable and configured
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model being used
    fn model(&self) -> &str;
}

/// Pair of extracted texts to compare. Constructed only when both slots of a
/// session are filled.
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    /// Text of document #1, the base
    pub doc1_text: String,
    /// Text of document #2, compared against the base
    pub doc2_text: String,
}

impl ComparisonRequest {
    /// Build a request from two extracted documents
    pub fn new(doc1: ExtractedText, doc2: ExtractedText) -> Self {
        Self {
            doc1_text: doc1.content,
            doc2_text: doc2.content,
        }
    }
}

/// Comparison engine: builds the prompt and runs a single completion.
///
/// One blocking call per invocation. No streaming, no multi-turn context,
/// no caching: identical inputs re-query the model.
pub struct ComparisonEngine {
    provider: Arc<dyn LlmProvider>,
}

impl ComparisonEngine {
    /// Create an engine over the given provider
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Compare two documents, returning the model's markdown verbatim.
    ///
    /// Zero completions yield the [`NO_RESPONSE`] sentinel rather than an
    /// error; real failures propagate for the caller to turn into a banner.
    pub async fn compare(&self, request: &ComparisonRequest) -> Result<String> {
        let prompt = PromptBuilder::build_comparison_prompt(&request.doc1_text, &request.doc2_text);

        tracing::info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            "requesting comparison analysis"
        );

        match self.provider.complete(&prompt).await? {
            Some(text) => Ok(text),
            None => Ok(NO_RESPONSE.to_string()),
        }
    }

    /// The underlying provider
    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted provider: returns a fixed outcome and counts invocations
    struct ScriptedLlm {
        outcome: fn() -> Result<Option<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedLlm {
        fn new(outcome: fn() -> Result<Option<String>>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedLlm {
        async fn complete(&self, _prompt: &str) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-model"
        }
    }

    fn request() -> ComparisonRequest {
        ComparisonRequest {
            doc1_text: "Hello\nWorld".to_string(),
            doc2_text: "Hello\nMars".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_completion_returned_verbatim() {
        let provider = Arc::new(ScriptedLlm::new(|| {
            Ok(Some("## Differences\n\n- World vs Mars".to_string()))
        }));
        let engine = ComparisonEngine::new(provider.clone());

        let markdown = engine.compare(&request()).await.unwrap();
        assert_eq!(markdown, "## Differences\n\n- World vs Mars");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_zero_completions_yield_sentinel() {
        let provider = Arc::new(ScriptedLlm::new(|| Ok(None)));
        let engine = ComparisonEngine::new(provider);

        let markdown = engine.compare(&request()).await.unwrap();
        assert_eq!(markdown, NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = Arc::new(ScriptedLlm::new(|| {
            Err(Error::llm("connection refused"))
        }));
        let engine = ComparisonEngine::new(provider);

        assert!(matches!(
            engine.compare(&request()).await,
            Err(Error::LlmInvocation(_))
        ));
    }
}
