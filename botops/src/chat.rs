//! Chat-completion proxy façade.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::ChatRequest;

/// Access to the `/api/chat` proxy endpoint.
pub struct ChatApi {
    client: HttpClient,
}

impl ChatApi {
    pub(crate) fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Send a chat request and return the raw decoded response.
    ///
    /// All eight fields are transmitted, defaults included. The response
    /// shape is not modeled, and even with `stream: true` one complete body
    /// is awaited and decoded — chunked consumption is out of scope.
    pub fn send(&self, request: &ChatRequest) -> Result<Value, ApiError> {
        let body = serde_json::to_value(request).map_err(ApiError::Serialize)?;
        self.client.post("/api/chat", Some(&body))
    }
}
