//! Tag proposal via a generation backend.

use async_trait::async_trait;
use tracing::{debug, instrument};

use memoclip_core::{
    analyze_tag_patterns, clamp_max_tags, parse_tag_list, GenerationBackend, Result, TagProposer,
};

use crate::prompt::{tag_prompt, TAG_SYSTEM_PROMPT};

/// Proposes tags by asking a language model.
pub struct LlmTagProposer<B> {
    backend: B,
}

impl<B: GenerationBackend> LlmTagProposer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[async_trait]
impl<B: GenerationBackend> TagProposer for LlmTagProposer<B> {
    #[instrument(skip_all, fields(subsystem = "inference", component = "tag_proposer", op = "propose_tags", model = %self.backend.model_name(), existing_count = existing.len()))]
    async fn propose_tags(
        &self,
        content: &str,
        existing: &[String],
        max_tags: usize,
    ) -> Result<Vec<String>> {
        let pattern = analyze_tag_patterns(existing);
        let prompt = tag_prompt(content, existing, clamp_max_tags(max_tags), &pattern);

        let raw = self
            .backend
            .generate_with_system(TAG_SYSTEM_PROMPT, &prompt)
            .await?;
        let tags = parse_tag_list(&raw);

        debug!(proposed_count = tags.len(), "Parsed tag proposal");
        Ok(tags)
    }
}
