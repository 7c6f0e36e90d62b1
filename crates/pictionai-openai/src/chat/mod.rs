//! OpenAI chat completions API client.
//!
//! Implements the `TextModel` trait for chat models via the
//! `/v1/chat/completions` endpoint.

mod api;
mod client;
mod config;

pub use client::ChatClient;
pub use config::ChatConfig;
