use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub attribute: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Deserialize)]
pub struct DatabaseIn {
    pub name: String,
    pub created_at: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatabaseRecord {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub filters: Option<String>,
}

/// Chat payload with every field required: the client is expected to send
/// all eight, defaults included.
#[derive(Deserialize)]
pub struct ChatPayload {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub model: String,
    pub provider: String,
    pub api_base: String,
    pub api_key: String,
    pub stream: bool,
}

// BTreeMap so listings come back in a deterministic order.
pub type Db = Arc<RwLock<BTreeMap<String, DatabaseRecord>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/api/database/", get(list_databases).post(create_database))
        .route(
            "/api/database/{id}",
            get(get_database).put(update_database).delete(delete_database),
        )
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Single-term subset of the filter grammar: `FIELD~VALUE` (substring) or
/// `FIELD=VALUE` (exact), with optional whitespace around the operator.
/// Anything the mock does not understand matches nothing.
fn matches_filter(record: &DatabaseRecord, filters: &str) -> bool {
    let (field, value, contains) = if let Some((field, value)) = filters.split_once('~') {
        (field, value, true)
    } else if let Some((field, value)) = filters.split_once('=') {
        (field, value, false)
    } else {
        return false;
    };
    let actual = match field.trim() {
        "id" => &record.id,
        "name" => &record.name,
        "created_at" => &record.created_at,
        _ => return false,
    };
    let value = value.trim();
    if contains {
        actual.contains(value)
    } else {
        actual == value
    }
}

async fn list_databases(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Vec<DatabaseRecord>> {
    let databases = db.read().await;
    let records = match params.filters.as_deref() {
        Some(filters) => databases
            .values()
            .filter(|record| matches_filter(record, filters))
            .cloned()
            .collect(),
        None => databases.values().cloned().collect(),
    };
    Json(records)
}

async fn create_database(
    State(db): State<Db>,
    Json(input): Json<DatabaseIn>,
) -> (StatusCode, Json<DatabaseRecord>) {
    let record = DatabaseRecord {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        created_at: input.created_at,
        attributes: input.attributes,
    };
    db.write().await.insert(record.id.clone(), record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn get_database(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<DatabaseRecord>, StatusCode> {
    let databases = db.read().await;
    databases.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_database(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<DatabaseIn>,
) -> Result<Json<DatabaseRecord>, StatusCode> {
    let mut databases = db.write().await;
    if !databases.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let record = DatabaseRecord {
        id: id.clone(),
        name: input.name,
        created_at: input.created_at,
        attributes: input.attributes,
    };
    databases.insert(id, record.clone());
    Ok(Json(record))
}

async fn delete_database(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut databases = db.write().await;
    databases.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn chat(Json(request): Json<ChatPayload>) -> Json<serde_json::Value> {
    Json(json!({
        "model": request.model,
        "provider": request.provider,
        "response": format!("echo: {}", request.prompt),
        "done": true,
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
