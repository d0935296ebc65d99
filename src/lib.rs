//! Gemini Translator - interactive AI translation library
//!
//! This library packages a fixed translation prompt template, a static
//! language catalog, and a single-attempt completion client for Gemini's
//! OpenAI-compatible chat endpoint. It performs no translation itself; all
//! linguistic work is delegated to the remote model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use core::{
    agent::AgentIdentity,
    client::CompletionClient,
    config::EndpointConfig,
    errors::{FailureReason, TranslationError},
    models::{Translation, TranslationRequest},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
