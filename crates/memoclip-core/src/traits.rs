//! Core trait definitions for memoclip.
//!
//! These traits define the seams the submission pipeline is assembled from,
//! allowing HTTP-backed implementations to be swapped for in-memory ones.

use async_trait::async_trait;

use crate::{CreatedMemo, Result, SubmissionConfig, SubmissionError, SubmissionOutcome};

// =============================================================================
// NOTES SERVICE TRAITS
// =============================================================================

/// Source of the existing tag vocabulary.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// List existing tag names in server order.
    async fn list_tags(&self) -> Result<Vec<String>>;
}

/// Destination for new memos.
#[async_trait]
pub trait MemoSink: Send + Sync {
    /// Create a memo with the given body.
    async fn create_memo(&self, content: &str) -> std::result::Result<CreatedMemo, SubmissionError>;
}

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend for text generation (LLM).
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text with system context.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Proposes tags for a piece of content.
#[async_trait]
pub trait TagProposer: Send + Sync {
    /// Propose up to `max_tags` tags, preferring the existing vocabulary.
    async fn propose_tags(
        &self,
        content: &str,
        existing: &[String],
        max_tags: usize,
    ) -> Result<Vec<String>>;
}

// =============================================================================
// HOST TRAITS
// =============================================================================

/// Notification primitives offered by the invoking host.
pub trait Host: Send + Sync {
    /// Display a transient status message.
    fn show_text(&self, text: &str);

    /// Signal generic success.
    fn show_success(&self);
}

/// The action a host invokes with the selected text.
#[async_trait]
pub trait SubmitAction: Send + Sync {
    /// Save `input` as a memo according to `config`.
    async fn submit(
        &self,
        input: &str,
        config: &SubmissionConfig,
    ) -> std::result::Result<SubmissionOutcome, SubmissionError>;
}
