use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, DatabaseRecord};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

const TEST_DB: &str = r#"{"name":"TestDB","created_at":"2024-11-29T00:00:00","attributes":[{"attribute":"id","type":"int"}]}"#;

// --- health ---

#[tokio::test]
async fn health_returns_ok_document() {
    let app = app();
    let resp = app.oneshot(get_request("/api/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

// --- list ---

#[tokio::test]
async fn list_databases_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/api/database/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let databases: Vec<DatabaseRecord> = body_json(resp).await;
    assert!(databases.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_database_returns_201_with_id() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/database/", TEST_DB))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let record: DatabaseRecord = body_json(resp).await;
    assert!(!record.id.is_empty());
    assert_eq!(record.name, "TestDB");
    assert_eq!(record.attributes.len(), 1);
}

#[tokio::test]
async fn create_database_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/database/", r#"{"not_name":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_database_not_found() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/database/no-such-id"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_database_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/api/database/no-such-id", TEST_DB))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_database_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/database/no-such-id")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- chat ---

#[tokio::test]
async fn chat_echoes_prompt_and_model() {
    let app = app();
    let payload = r#"{"prompt":"hello","max_tokens":256,"temperature":0.7,"model":"llama3.1","provider":"ollama","api_base":"http://ollama:11434","api_key":"","stream":true}"#;
    let resp = app
        .oneshot(json_request("POST", "/api/chat", payload))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["model"], "llama3.1");
    assert_eq!(body["provider"], "ollama");
    assert_eq!(body["response"], "echo: hello");
}

#[tokio::test]
async fn chat_missing_fields_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/chat", r#"{"prompt":"hello"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- filters ---

#[tokio::test]
async fn list_databases_applies_filter_subset() {
    use tower::Service;

    let mut app = app().into_service();

    for body in [
        TEST_DB,
        r#"{"name":"Other","created_at":"2024-11-29T00:00:00","attributes":[]}"#,
    ] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/api/database/", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/database/?filters=name~Test"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let databases: Vec<DatabaseRecord> = body_json(resp).await;
    assert_eq!(databases.len(), 1);
    assert_eq!(databases[0].name, "TestDB");

    // Unrecognized filter strings match nothing.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/database/?filters=gibberish"))
        .await
        .unwrap();
    let databases: Vec<DatabaseRecord> = body_json(resp).await;
    assert!(databases.is_empty());
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/database/", TEST_DB))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: DatabaseRecord = body_json(resp).await;
    let id = created.id.clone();

    // list — should contain the one database
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/database/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let databases: Vec<DatabaseRecord> = body_json(resp).await;
    assert_eq!(databases.len(), 1);
    assert_eq!(databases[0].id, id);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/api/database/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: DatabaseRecord = body_json(resp).await;
    assert_eq!(fetched.name, "TestDB");

    // update — full replace, attributes included
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/database/{id}"),
            r#"{"name":"Renamed","created_at":"2025-01-01T00:00:00","attributes":[]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: DatabaseRecord = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Renamed");
    assert!(updated.attributes.is_empty());

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/api/database/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/api/database/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
