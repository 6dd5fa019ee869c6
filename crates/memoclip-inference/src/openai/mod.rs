//! OpenAI-compatible chat completion backend.
//!
//! Works with any endpoint that speaks the `/chat/completions` protocol:
//! OpenAI, Azure OpenAI, Ollama's compatibility mode, vLLM, LM Studio and
//! similar servers.

mod backend;
mod types;

pub use backend::{OpenAIBackend, OpenAIConfig, DEFAULT_OPENAI_URL};
pub use types::*;
