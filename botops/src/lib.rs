//! Synchronous client for the BotOps HTTP API.
//!
//! # Overview
//! One blocking [`HttpClient`] performs every network call and decodes JSON
//! bodies; thin resource façades ([`DatabaseApi`], [`ChatApi`], [`HealthApi`])
//! format endpoint paths and map responses into typed records. The top-level
//! [`BotopsClient`] wires them together and carries a registry for attaching
//! additional façades at runtime.
//!
//! # Design
//! - Every operation blocks the calling thread until the round-trip completes;
//!   there are no retries and no internal recovery — failures surface as
//!   [`ApiError`] at the call site.
//! - Database responses are reconstructed into [`DatabaseOut`] records; chat
//!   and health responses are intentionally left as raw `serde_json::Value`
//!   since the server does not document their shapes.
//! - Records are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod chat;
pub mod client;
pub mod database;
pub mod error;
pub mod health;
pub mod http;
pub mod types;

pub use chat::ChatApi;
pub use client::BotopsClient;
pub use database::DatabaseApi;
pub use error::ApiError;
pub use health::HealthApi;
pub use http::HttpClient;
pub use types::{Attribute, ChatRequest, Database, DatabaseOut};
