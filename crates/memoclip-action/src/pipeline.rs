//! The note submission pipeline.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use memoclip_core::{
    compose_memo_content, reconcile_tags, MemoSink, SubmissionConfig, SubmissionError,
    SubmissionOutcome, SubmitAction, TagProposer, TagSource,
};
use memoclip_inference::{LlmTagProposer, OpenAIBackend, OpenAIConfig};
use memoclip_memos::MemosClient;

/// Fetch, propose and reconcile tags for `content`.
///
/// Never fails: a failed fetch or proposal is logged and treated as empty.
pub async fn generate_tags(
    source: &dyn TagSource,
    proposer: &dyn TagProposer,
    content: &str,
    max_tags: usize,
) -> Vec<String> {
    let existing = source.list_tags().await.unwrap_or_else(|e| {
        warn!(error = %e, "Could not fetch existing tags, continuing without them");
        Vec::new()
    });

    let proposed = proposer
        .propose_tags(content, &existing, max_tags)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "Tag generation failed, saving without tags");
            Vec::new()
        });

    let tags = reconcile_tags(&proposed, &existing, max_tags);

    debug!(
        existing_count = existing.len(),
        proposed_count = proposed.len(),
        tag_count = tags.len(),
        "Reconciled tags"
    );
    tags
}

/// Run one submission against explicit collaborators.
///
/// Tags are generated only when a `proposer` is supplied.
pub async fn run_pipeline(
    source: &dyn TagSource,
    proposer: Option<&dyn TagProposer>,
    sink: &dyn MemoSink,
    input: &str,
    max_tags: usize,
) -> Result<SubmissionOutcome, SubmissionError> {
    let tags = match proposer {
        Some(proposer) => generate_tags(source, proposer, input, max_tags).await,
        None => {
            debug!("Tag generation disabled");
            Vec::new()
        }
    };

    let content = compose_memo_content(input, &tags);
    let memo = sink.create_memo(&content).await?;

    Ok(SubmissionOutcome {
        memo,
        content,
        tags,
    })
}

/// Pipeline backed by the Memos REST API and an OpenAI-compatible endpoint.
///
/// Clients are built from the configuration of each invocation; nothing is
/// shared between invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoPipeline;

impl MemoPipeline {
    pub fn new() -> Self {
        Self
    }

    fn proposer_for(config: &SubmissionConfig) -> Option<LlmTagProposer<OpenAIBackend>> {
        if !config.tagging_enabled() {
            return None;
        }

        match OpenAIBackend::new(OpenAIConfig::from_submission(config)) {
            Ok(backend) => Some(LlmTagProposer::new(backend)),
            Err(e) => {
                warn!(error = %e, "Could not set up tag generation, saving without tags");
                None
            }
        }
    }
}

#[async_trait]
impl SubmitAction for MemoPipeline {
    #[instrument(skip_all, fields(subsystem = "action", component = "pipeline", op = "submit", tagging = config.tagging_enabled()))]
    async fn submit(
        &self,
        input: &str,
        config: &SubmissionConfig,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let start = Instant::now();

        let memos = MemosClient::from_config(config)
            .map_err(|e| SubmissionError::Request(e.to_string()))?;
        let proposer = Self::proposer_for(config);

        let result = run_pipeline(
            &memos,
            proposer.as_ref().map(|p| p as &dyn TagProposer),
            &memos,
            input,
            config.max_tags(),
        )
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(outcome) => info!(
                tag_count = outcome.tag_count(),
                duration_ms, "Submission complete"
            ),
            Err(e) => error!(
                error_kind = e.kind(),
                error = %e,
                duration_ms,
                "Submission failed"
            ),
        }

        result
    }
}
