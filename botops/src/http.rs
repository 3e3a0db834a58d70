//! Blocking HTTP transport for the BotOps API.
//!
//! # Design
//! `HttpClient` is the single point of network access: it owns a reusable
//! `ureq::Agent` (acquired once at construction; connection reuse lives in the
//! agent) and the service base URL. Each verb method concatenates
//! `base_url + endpoint` — no URL joining or normalization, callers supply the
//! leading separator — performs the call, fails on any non-2xx status with the
//! code and body, and decodes a non-empty body as JSON. The agent is
//! configured so 4xx/5xx responses come back as data rather than `Err`,
//! letting this layer own status interpretation.

use std::fmt;

use serde_json::Value;
use ureq::Agent;

use crate::error::ApiError;

/// Blocking transport client: one agent, one base URL, no other state.
#[derive(Clone)]
pub struct HttpClient {
    agent: Agent,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint`, appending `params` as query parameters.
    pub fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "GET");
        let mut request = self.agent.get(&url);
        for (key, value) in params {
            request = request.query(*key, *value);
        }
        read_response(request.call()?)
    }

    /// POST `endpoint` with an optional JSON body.
    pub fn post(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "POST");
        let response = match body {
            Some(json) => self
                .agent
                .post(&url)
                .content_type("application/json")
                .send(json.to_string().as_bytes())?,
            None => self.agent.post(&url).send_empty()?,
        };
        read_response(response)
    }

    /// PUT `endpoint` with an optional JSON body.
    pub fn put(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "PUT");
        let response = match body {
            Some(json) => self
                .agent
                .put(&url)
                .content_type("application/json")
                .send(json.to_string().as_bytes())?,
            None => self.agent.put(&url).send_empty()?,
        };
        read_response(response)
    }

    /// DELETE `endpoint`.
    pub fn delete(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(%url, "DELETE");
        read_response(self.agent.delete(&url).call()?)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Drain the response body and hand both to `parse_body`.
fn read_response(mut response: ureq::http::Response<ureq::Body>) -> Result<Value, ApiError> {
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    parse_body(status, &body)
}

/// Interpret a completed round-trip: non-2xx fails with the code and body, an
/// empty success body yields `{}`, anything else must be valid JSON.
fn parse_body(status: u16, body: &str) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }
    if body.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(body).map_err(ApiError::Decode)
}
