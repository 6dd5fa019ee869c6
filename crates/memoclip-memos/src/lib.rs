//! # memoclip-memos
//!
//! Client for the Memos REST API (`/api/v1`).
//!
//! This crate provides:
//! - Tag vocabulary listing (`GET /api/v1/tags`)
//! - Memo creation (`POST /api/v1/memos`) with failure classification into
//!   API, network and request errors
//!
//! # Example
//!
//! ```rust,no_run
//! use memoclip_core::{MemoSink, Secret, TagSource};
//! use memoclip_memos::MemosClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = MemosClient::new("http://localhost:5230", Secret::new("token"), None).unwrap();
//!     let _existing = client.list_tags().await.unwrap_or_default();
//!     client.create_memo("hello").await.unwrap();
//! }
//! ```

mod client;
pub mod types;

pub use client::{classify_send_error, MemosClient};
pub use types::*;
