//! Centralized default constants for memoclip.
//!
//! All crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// MEMOS SERVICE
// =============================================================================

/// Default Memos server URL.
pub const MEMOS_URL: &str = "http://localhost:5230";

/// Tag listing endpoint, relative to the Memos base URL.
pub const TAGS_PATH: &str = "/api/v1/tags";

/// Memo creation endpoint, relative to the Memos base URL.
pub const MEMOS_PATH: &str = "/api/v1/memos";

// =============================================================================
// COMPLETION SERVICE
// =============================================================================

/// Default OpenAI-compatible API base URL.
pub const OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default chat model used for tag generation.
pub const GEN_MODEL: &str = "gpt-3.5-turbo";

/// Output token ceiling for a tag proposal.
pub const TAG_MAX_TOKENS: u32 = 100;

/// Sampling temperature for a tag proposal.
pub const TAG_TEMPERATURE: f32 = 0.3;

// =============================================================================
// TAGGING
// =============================================================================

/// Tag generation is on unless switched off.
pub const ENABLE_TAGS: bool = true;

/// Maximum tags per memo when the configured value is missing or unusable.
pub const MAX_TAGS: usize = 3;

/// Lower bound for the configured maximum.
pub const MAX_TAGS_FLOOR: usize = 1;

/// Upper bound for the configured maximum.
pub const MAX_TAGS_CEILING: usize = 5;

/// Average tag length assumed when the vocabulary is empty.
pub const TAG_AVG_LENGTH: f64 = 3.0;

/// New tags may be this much longer than the vocabulary's average.
pub const TAG_LENGTH_FACTOR: f64 = 1.5;
