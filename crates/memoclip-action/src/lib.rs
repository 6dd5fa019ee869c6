//! # memoclip-action
//!
//! The note submission pipeline and its host boundary.
//!
//! One invocation runs, strictly in order:
//! 1. fetch the existing tag vocabulary from Memos (best effort)
//! 2. ask the language model for tags (best effort)
//! 3. reconcile proposals against the vocabulary
//! 4. create the memo (failures are surfaced)
//!
//! Steps 1 to 3 run only when tagging is enabled and an LLM key is set.

pub mod host;
pub mod pipeline;

pub use host::{failure_message, run_action, success_message, ConsoleHost};
pub use pipeline::{generate_tags, run_pipeline, MemoPipeline};
