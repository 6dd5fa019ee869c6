//! OpenAI-compatible inference backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

use memoclip_core::defaults::{GEN_MODEL, TAG_MAX_TOKENS, TAG_TEMPERATURE};
use memoclip_core::{Error, GenerationBackend, Result, Secret, SubmissionConfig};

use super::types::*;

/// Default OpenAI API endpoint.
pub const DEFAULT_OPENAI_URL: &str = memoclip_core::defaults::OPENAI_URL;

/// Configuration for OpenAI-compatible backend.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication (optional for local endpoints).
    pub api_key: Option<Secret>,
    /// Model to use for generation.
    pub model: String,
    /// Output token ceiling.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Request timeout in seconds; transport default when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_URL.to_string(),
            api_key: None,
            model: GEN_MODEL.to_string(),
            max_tokens: Some(TAG_MAX_TOKENS),
            temperature: Some(TAG_TEMPERATURE),
            timeout_seconds: None,
        }
    }
}

impl OpenAIConfig {
    /// Tag-generation settings taken from submission options.
    pub fn from_submission(config: &SubmissionConfig) -> Self {
        Self {
            base_url: config.completion_base_url().to_string(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            timeout_seconds: config.timeout_secs,
            ..Default::default()
        }
    }
}

/// OpenAI-compatible inference backend.
pub struct OpenAIBackend {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIBackend {
    /// Create a new OpenAI backend with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(secs) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        let client = client_builder
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        debug!(
            "Initializing OpenAI backend: url={}, model={}",
            config.base_url, config.model
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(OpenAIConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// Build a request with authentication if configured.
    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", api_key.bearer());
        }

        req.header("Content-Type", "application/json")
    }
}

#[async_trait]
impl GenerationBackend for OpenAIBackend {
    #[instrument(skip(self, system, prompt), fields(subsystem = "inference", component = "openai", op = "generate", model = %self.config.model, prompt_len = prompt.len()))]
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let mut messages = Vec::new();

        if !system.is_empty() {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .build_request("/chat/completions")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<OpenAIErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Inference(format!(
                "OpenAI returned {}: {}",
                status, message
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let content = result.first_content();

        info!(response_len = content.len(), "Generation complete");
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenAIConfig::default();
        assert_eq!(config.base_url, DEFAULT_OPENAI_URL);
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, Some(100));
        assert_eq!(config.temperature, Some(0.3));
        assert!(config.api_key.is_none());
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_config_from_submission() {
        let submission = SubmissionConfig {
            openai_base_url: "http://localhost:11434/v1/".to_string(),
            openai_api_key: Some(Secret::new("sk-test")),
            openai_model: "qwen2.5:7b".to_string(),
            timeout_secs: Some(30),
            ..Default::default()
        };

        let config = OpenAIConfig::from_submission(&submission);
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.api_key.as_ref().map(Secret::expose), Some("sk-test"));
        assert_eq!(config.model, "qwen2.5:7b");
        assert_eq!(config.timeout_seconds, Some(30));
        assert_eq!(config.max_tokens, Some(100));
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = OpenAIConfig {
            api_key: Some(Secret::new("sk-very-secret")),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }

    #[test]
    fn test_backend_creation() {
        let backend = OpenAIBackend::with_defaults().unwrap();
        assert_eq!(backend.config().base_url, DEFAULT_OPENAI_URL);
        assert_eq!(backend.model_name(), "gpt-3.5-turbo");
    }
}
