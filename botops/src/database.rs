//! Database resource façade.
//!
//! # Design
//! Every operation delegates to the shared [`HttpClient`] under the fixed
//! `/api/database/` prefix and reconstructs responses into [`DatabaseOut`]
//! records. Outgoing [`Database`] records are converted to plain JSON mappings
//! here, in declared field order, so the transport stays type-agnostic.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Database, DatabaseOut};

const COLLECTION: &str = "/api/database/";

/// CRUD operations over the `database` resource.
pub struct DatabaseApi {
    client: HttpClient,
}

impl DatabaseApi {
    pub(crate) fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// List databases, optionally narrowed by a filter string.
    ///
    /// The filter grammar (`OPERAND OPERATOR OPERAND` terms, joined with
    /// AND/OR, e.g. `name~Test`) belongs to the server; the string is passed
    /// through verbatim as the `filters` query parameter and never parsed or
    /// validated here.
    pub fn list(&self, filters: Option<&str>) -> Result<Vec<DatabaseOut>, ApiError> {
        let mut params = Vec::new();
        if let Some(filters) = filters {
            params.push(("filters", filters));
        }
        let response = self.client.get(COLLECTION, &params)?;
        serde_json::from_value(response).map_err(ApiError::Validation)
    }

    /// Create a database and return it with its server-assigned id.
    pub fn create(&self, database: &Database) -> Result<DatabaseOut, ApiError> {
        let body = serde_json::to_value(database).map_err(ApiError::Serialize)?;
        let response = self.client.post(COLLECTION, Some(&body))?;
        serde_json::from_value(response).map_err(ApiError::Validation)
    }

    /// Fetch one database by id.
    pub fn get(&self, id: &str) -> Result<DatabaseOut, ApiError> {
        let response = self.client.get(&format!("{COLLECTION}{id}"), &[])?;
        serde_json::from_value(response).map_err(ApiError::Validation)
    }

    /// Replace a database. Full-replace semantics, not a partial patch: every
    /// field of `database` overwrites the stored record.
    pub fn update(&self, id: &str, database: &Database) -> Result<DatabaseOut, ApiError> {
        let body = serde_json::to_value(database).map_err(ApiError::Serialize)?;
        let response = self.client.put(&format!("{COLLECTION}{id}"), Some(&body))?;
        serde_json::from_value(response).map_err(ApiError::Validation)
    }

    /// Delete a database by id.
    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{COLLECTION}{id}"))?;
        Ok(())
    }

    /// Run `action` once per database matching `filters`, in the order the
    /// server listed them, sequentially.
    ///
    /// The first error — from the listing or from `action` itself — halts
    /// iteration and propagates; remaining records are never visited. The
    /// action's error type only needs a `From<ApiError>` conversion so listing
    /// failures can surface through it (`ApiError` itself qualifies).
    pub fn for_each<F, E>(&self, mut action: F, filters: Option<&str>) -> Result<(), E>
    where
        F: FnMut(&DatabaseOut) -> Result<(), E>,
        E: From<ApiError>,
    {
        for database in self.list(filters)? {
            action(&database)?;
        }
        Ok(())
    }
}
