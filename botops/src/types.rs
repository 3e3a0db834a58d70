//! Typed records exchanged with the BotOps API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently; the
//! integration tests catch schema drift against the mock server. Records are
//! serialized in declared field order with no renaming (except `type`, a Rust
//! keyword). Reconstruction from response JSON goes through serde, so unknown
//! fields are dropped silently and a missing required field is an error rather
//! than a panic.

use serde::{Deserialize, Serialize};

/// A single database column: its name and declared type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub attribute: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A database as the caller describes it for create/update calls.
///
/// `created_at` is an ISO-8601 timestamp kept as an opaque string; the client
/// never parses or validates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Database {
    pub name: String,
    pub created_at: String,
    pub attributes: Vec<Attribute>,
}

/// A database as the server returns it, with its assigned id.
///
/// Only ever reconstructed from a response body — callers never build one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseOut {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub attributes: Vec<Attribute>,
}

/// Payload for the chat-completion proxy endpoint.
///
/// Every field except `prompt` has a default; [`ChatRequest::new`] fills them.
/// No value is range-checked — whatever the caller sets is sent verbatim,
/// including out-of-bounds temperatures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_stream")]
    pub stream: bool,
}

impl ChatRequest {
    /// Build a request for `prompt` with every other field at its default.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            model: default_model(),
            provider: default_provider(),
            api_base: default_api_base(),
            api_key: String::new(),
            stream: default_stream(),
        }
    }
}

fn default_max_tokens() -> u32 {
    256
}

fn default_temperature() -> f64 {
    0.7
}

fn default_model() -> String {
    "llama3.1".to_string()
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_api_base() -> String {
    "http://ollama:11434".to_string()
}

fn default_stream() -> bool {
    true
}
