//! Health check façade.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpClient;

/// Access to the `/api/health` endpoint.
pub struct HealthApi {
    client: HttpClient,
}

impl HealthApi {
    pub(crate) fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetch the health document verbatim, untyped.
    pub fn check(&self) -> Result<Value, ApiError> {
        self.client.get("/api/health", &[])
    }
}
