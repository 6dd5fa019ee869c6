//! # memoclip-core
//!
//! Core types, traits, and pure logic for memoclip.
//!
//! This crate provides:
//! - Submission configuration with redacted secrets
//! - Tag pattern analysis and reconciliation against an existing vocabulary
//! - Memo body composition
//! - The trait seams (tag source, tag proposer, memo sink, host) the
//!   submission pipeline is assembled from
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Memo creation failed |
//! | WARN  | Best-effort stage failed, empty default substituted |
//! | INFO  | Memo created, invocation finished |
//! | DEBUG | Stage decisions, intermediate counts |
//! | TRACE | Per-tag reconciliation decisions |
//!
//! Structured fields use `subsystem`, `component` and `op` for identity.

pub mod config;
pub mod defaults;
pub mod error;
pub mod memo;
pub mod secret;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use config::{parse_max_tags, ConfigError, ConfigResult, SubmissionConfig};
pub use error::{Error, Result, SubmissionError};
pub use memo::{compose_memo_content, CreatedMemo, SubmissionOutcome};
pub use secret::Secret;
pub use tags::*;
pub use traits::*;
