//! Top-level facade over the BotOps API.
//!
//! # Design
//! `BotopsClient` constructs one [`HttpClient`] and hands a clone to each
//! resource façade (agent clones share the underlying connection state, so
//! the session is still acquired once). Extra resource façades attach through
//! an explicit name-keyed registry rather than dynamic attribute injection:
//! `register_api` stores a constructed façade as a type-erased entry and
//! `api::<T>` is the typed accessor.

use std::any::Any;
use std::collections::HashMap;

use crate::chat::ChatApi;
use crate::database::DatabaseApi;
use crate::health::HealthApi;
use crate::http::HttpClient;

/// Entry point: owns the transport, the built-in façades, and the registry
/// of caller-attached façades.
pub struct BotopsClient {
    http: HttpClient,
    database: DatabaseApi,
    chat: ChatApi,
    health: HealthApi,
    extensions: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl BotopsClient {
    /// Build a client for the service at `base_url`.
    ///
    /// The base URL is stored exactly as given and prepended verbatim to every
    /// endpoint path, so it should not carry a trailing slash.
    pub fn new(base_url: &str) -> Self {
        let http = HttpClient::new(base_url);
        Self {
            database: DatabaseApi::new(http.clone()),
            chat: ChatApi::new(http.clone()),
            health: HealthApi::new(http.clone()),
            extensions: HashMap::new(),
            http,
        }
    }

    /// The shared transport, for callers building their own façades.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn database(&self) -> &DatabaseApi {
        &self.database
    }

    pub fn chat(&self) -> &ChatApi {
        &self.chat
    }

    pub fn health(&self) -> &HealthApi {
        &self.health
    }

    /// Construct a façade with a clone of the shared transport and register
    /// it under `name`. Registering the same name again replaces the entry.
    pub fn register_api<T, F>(&mut self, name: impl Into<String>, build: F)
    where
        T: Any + Send + Sync,
        F: FnOnce(HttpClient) -> T,
    {
        self.extensions
            .insert(name.into(), Box::new(build(self.http.clone())));
    }

    /// Look up a registered façade by name. Returns `None` when the name is
    /// absent or the entry is not a `T`.
    pub fn api<T: Any>(&self, name: &str) -> Option<&T> {
        self.extensions.get(name)?.downcast_ref::<T>()
    }
}
