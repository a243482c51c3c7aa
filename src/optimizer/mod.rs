//! AI-assisted rewriting of listing titles and descriptions.
//!
//! A call goes through validation (blank text, missing key) before any
//! network traffic, then makes exactly one request to the completion
//! endpoint. The outcome is either the trimmed completion or one of the
//! [`OptimizeError`] kinds; retrying is always left to the caller.

pub mod prompts;
pub mod transport;
pub mod wire;

pub use prompts::{FieldKind, build_chat_messages};
pub use transport::{CompletionTransport, HttpTransport, TransportResponse};
pub use wire::{ChatMessage, ChatRequest};

use tracing::{debug, warn};

use crate::config::{AiConfig, AiConfigUpdate};
use crate::utils::error::OptimizeError;

/// Owns the AI configuration and the transport used to reach the service.
pub struct TextOptimizer<T = HttpTransport> {
    config: AiConfig,
    transport: T,
}

impl TextOptimizer<HttpTransport> {
    pub fn new(config: AiConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: CompletionTransport> TextOptimizer<T> {
    pub fn with_transport(config: AiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Merge a partial update into the configuration used by later calls.
    pub fn update_config(&mut self, update: AiConfigUpdate) {
        self.config.merge(update);
        debug!(
            "AI configuration updated: base_url={}, model={}, api_key_set={}",
            self.config.base_url,
            self.config.model,
            self.config.has_api_key()
        );
    }

    /// Rewrite `text` for the given field.
    ///
    /// The configuration is captured when the call starts; a concurrent
    /// update does not affect a request already in flight.
    pub async fn optimize(&self, text: &str, kind: FieldKind) -> Result<String, OptimizeError> {
        let config = self.config.clone();
        metrics::counter!("optimizer_requests_total", "field" => kind.as_str()).increment(1);

        let result = self.run(&config, text, kind).await;
        if let Err(e) = &result {
            metrics::counter!(
                "optimizer_failures_total",
                "field" => kind.as_str(),
                "kind" => e.kind()
            )
            .increment(1);
            warn!("AI {} optimization failed: {}", kind.as_str(), e);
        }
        result
    }

    async fn run(
        &self,
        config: &AiConfig,
        text: &str,
        kind: FieldKind,
    ) -> Result<String, OptimizeError> {
        if text.trim().is_empty() {
            return Err(OptimizeError::BlankInput);
        }
        if !config.has_api_key() {
            return Err(OptimizeError::ConfigMissing);
        }

        let request = ChatRequest {
            model: config.model.clone(),
            messages: build_chat_messages(text, kind),
            temperature: prompts::TEMPERATURE,
            max_tokens: kind.max_tokens(),
        };
        let url = config.completions_url();

        debug!(
            "Sending AI {} request: url={}, model={}, api_key_set=true",
            kind.as_str(),
            url,
            config.model
        );

        let response = self.transport.post_chat(&url, &config.api_key, &request).await?;
        debug!("AI response status: {}", response.status);

        classify_response(response)
    }
}

/// One-shot helper over a fresh HTTP transport.
pub async fn optimize(
    text: &str,
    kind: FieldKind,
    config: &AiConfig,
) -> Result<String, OptimizeError> {
    TextOptimizer::new(config.clone()).optimize(text, kind).await
}

/// Map a raw response onto the completion text or an error kind, by status code.
pub fn classify_response(response: TransportResponse) -> Result<String, OptimizeError> {
    match response.status {
        200..=299 => wire::decode_completion(&response.body),
        401 => Err(OptimizeError::Unauthorized),
        429 => Err(OptimizeError::RateLimited),
        status => Err(OptimizeError::Transport {
            status,
            message: wire::error_message(&response.body)
                .unwrap_or_else(|| "Unknown error".to_string()),
        }),
    }
}
