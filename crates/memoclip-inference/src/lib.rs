//! # memoclip-inference
//!
//! LLM-backed tag proposal for memoclip.
//!
//! This crate provides:
//! - An OpenAI-compatible chat completion backend
//! - The tag prompt, built from the content and the existing vocabulary
//! - [`LlmTagProposer`], which turns a completion into tag candidates
//!
//! # Example
//!
//! ```rust,no_run
//! use memoclip_core::{Secret, TagProposer};
//! use memoclip_inference::openai::{OpenAIBackend, OpenAIConfig};
//! use memoclip_inference::LlmTagProposer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = OpenAIConfig {
//!         api_key: Some(Secret::new("sk-...")),
//!         ..Default::default()
//!     };
//!     let proposer = LlmTagProposer::new(OpenAIBackend::new(config).unwrap());
//!     let existing = vec!["工作".to_string(), "学习".to_string()];
//!     let _tags = proposer
//!         .propose_tags("学习 Rust 的所有权模型", &existing, 3)
//!         .await
//!         .unwrap_or_default();
//! }
//! ```

pub mod openai;
pub mod prompt;
mod proposer;

pub use openai::{OpenAIBackend, OpenAIConfig};
pub use prompt::{tag_prompt, TAG_SYSTEM_PROMPT};
pub use proposer::LlmTagProposer;
