//! Completion provider boundary.
//!
//! Wire types plus a client trait so handlers and tests can swap the real
//! OpenAI-backed client for stubs.

pub mod client;
pub mod types;

pub use client::{CompletionClient, OpenAiClient};
pub use types::{ChatMessage, CompletionRequest};
