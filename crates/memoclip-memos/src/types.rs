//! Memos API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// TAG TYPES
// =============================================================================

/// Response from the tag listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListTagsResponse {
    #[serde(default)]
    pub tags: Vec<TagEntry>,
}

/// Single tag in a listing.
#[derive(Debug, Deserialize)]
pub struct TagEntry {
    #[serde(default)]
    pub name: Option<String>,
}

impl ListTagsResponse {
    /// Tag names in server order, skipping entries without a usable name.
    pub fn into_names(self) -> Vec<String> {
        self.tags
            .into_iter()
            .filter_map(|t| t.name)
            .filter(|n| !n.trim().is_empty())
            .collect()
    }
}

// =============================================================================
// MEMO TYPES
// =============================================================================

/// Request body for the memo creation endpoint.
#[derive(Debug, Serialize)]
pub struct CreateMemoRequest {
    pub content: String,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error body returned by Memos on failure.
#[derive(Debug, Deserialize)]
pub struct MemosErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
