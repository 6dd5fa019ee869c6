//! HTTP client for the Memos API.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use memoclip_core::defaults::{MEMOS_PATH, TAGS_PATH};
use memoclip_core::{
    CreatedMemo, Error, MemoSink, Result, Secret, SubmissionConfig, SubmissionError, TagSource,
};

use crate::types::{CreateMemoRequest, ListTagsResponse, MemosErrorBody};

/// Memos API client bound to one server and token.
pub struct MemosClient {
    client: Client,
    base_url: String,
    token: Secret,
}

impl MemosClient {
    /// Create a client with its own connection pool.
    pub fn new(base_url: &str, token: Secret, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url, token))
    }

    /// Create a client from submission options.
    pub fn from_config(config: &SubmissionConfig) -> Result<Self> {
        Self::new(
            config.api_base_url(),
            config.api_token.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_client(client: Client, base_url: &str, token: Secret) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Server base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(AUTHORIZATION, self.token.bearer())
            .header(CONTENT_TYPE, "application/json")
    }
}

/// Classify a failure to obtain a response.
///
/// Requests that could not be built are request errors; requests that went
/// out without an answer (connect, DNS, timeout) are network errors.
pub fn classify_send_error(e: reqwest::Error) -> SubmissionError {
    if e.is_builder() {
        SubmissionError::Request(e.to_string())
    } else if e.is_connect() || e.is_timeout() || e.is_request() {
        SubmissionError::Network {
            detail: e.to_string(),
        }
    } else {
        SubmissionError::Request(e.to_string())
    }
}

/// Server-provided message, or the status reason phrase.
async fn error_message(response: Response) -> String {
    let fallback = response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string();

    match response.json::<MemosErrorBody>().await {
        Ok(MemosErrorBody {
            message: Some(message),
        }) if !message.trim().is_empty() => message,
        _ => fallback,
    }
}

#[async_trait]
impl TagSource for MemosClient {
    #[instrument(skip(self), fields(subsystem = "memos", component = "memos_client", op = "list_tags"))]
    async fn list_tags(&self) -> Result<Vec<String>> {
        let response = self
            .authorized(self.client.get(self.endpoint(TAGS_PATH)))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: ListTagsResponse = response.json().await?;
        let tags = body.into_names();

        debug!(existing_count = tags.len(), "Fetched existing tags");
        Ok(tags)
    }
}

#[async_trait]
impl MemoSink for MemosClient {
    #[instrument(skip(self, content), fields(subsystem = "memos", component = "memos_client", op = "create_memo", content_len = content.len()))]
    async fn create_memo(&self, content: &str) -> std::result::Result<CreatedMemo, SubmissionError> {
        let request = CreateMemoRequest {
            content: content.to_string(),
        };

        let response = self
            .authorized(self.client.post(self.endpoint(MEMOS_PATH)))
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            warn!(status = status.as_u16(), error = %message, "Memos rejected memo");
            return Err(SubmissionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The memo exists at this point; an unreadable body only loses its name.
        let memo = match response.json::<CreatedMemo>().await {
            Ok(memo) => memo,
            Err(e) => {
                debug!(error = %e, "Could not read created memo");
                CreatedMemo::default()
            }
        };

        info!(status = status.as_u16(), name = ?memo.name, "Memo created");
        Ok(memo)
    }
}
