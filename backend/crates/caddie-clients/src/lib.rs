//! HTTP clients for the two vendor APIs the recommendation flow talks to:
//! an OpenAI-compatible chat-completion endpoint and SerpAPI image search.
//!
//! Base URLs are injected so tests can point both clients at a local mock.

pub mod error;
pub mod openai;
pub mod serpapi;

pub use error::{ClientError, Result};
pub use openai::{ClubAttributes, ModelSuggestions, OpenAiClient};
pub use serpapi::SerpApiClient;
