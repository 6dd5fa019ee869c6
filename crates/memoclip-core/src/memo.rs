//! Memo composition and submission results.

use serde::{Deserialize, Serialize};

/// Build the memo body: trimmed text, then a blank line and `#tag` tokens.
pub fn compose_memo_content(text: &str, tags: &[String]) -> String {
    let mut content = text.trim().to_string();

    if !tags.is_empty() {
        let line = tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        content.push_str("\n\n");
        content.push_str(&line);
    }

    content
}

/// Memo as acknowledged by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedMemo {
    /// Resource name, e.g. `memos/abc123`, when the server returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    /// The memo as created.
    pub memo: CreatedMemo,
    /// Body that was sent.
    pub content: String,
    /// Tags appended to the body.
    pub tags: Vec<String>,
}

impl SubmissionOutcome {
    /// Number of tags attached to the memo.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
