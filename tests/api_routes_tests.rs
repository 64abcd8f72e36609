use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use pdfmaster_cms::db::Tool;
use pdfmaster_cms::router::{CmsState, cms_router};
use pdfmaster_cms::{Config, Store};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn setup() -> (Router, Store) {
    let store = Store::open_in_memory().await.expect("open store");
    store
        .seed_admin_if_empty("admin", "admin123")
        .await
        .expect("seed admin");
    let state = CmsState::new(store.clone(), &Config::default());
    (cms_router(state), store)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body was not json")
    };
    (status, value)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/login",
            None,
            json!({"username": "admin", "password": "admin123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token string").to_string()
}

fn full_update(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Join PDFs",
        "category": "organize",
        "seoTitle": "Merge PDF online",
        "seoDescription": "Combine PDFs",
        "longDescription": "Longer text",
        "features": ["fast", "secure", "free"],
        "useCases": ["reports"],
        "steps": ["upload", "merge", "download"]
    })
}

async fn seed_merge_pdf(store: &Store) {
    store
        .replace_all_tools(&[Tool {
            id: "merge-pdf".into(),
            name: "Merge PDF".into(),
            features: vec!["fast".into(), "secure".into()],
            ..Tool::default()
        }])
        .await
        .expect("seed tools");
}

#[tokio::test]
async fn login_with_admin_credentials_returns_token() {
    let (app, _store) = setup().await;
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/login",
            None,
            json!({"username": "admin", "password": "admin123"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().expect("token");
    assert!(token.len() >= 43);
    assert_ne!(token, "mock-jwt-token");
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (app, _store) = setup().await;
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/login",
            None,
            json!({"username": "admin", "password": "letmein"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"success": false, "message": "Invalid credentials"}));
}

#[tokio::test]
async fn login_with_malformed_body_is_client_error() {
    let (app, _store) = setup().await;
    let (status, body) = send(
        &app,
        json_request("POST", "/api/login", None, json!({"username": "admin"})),
    )
    .await;

    assert!(status.is_client_error());
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn list_tools_on_empty_table_is_empty_array() {
    let (app, _store) = setup().await;
    let (status, body) = send(&app, get("/api/tools")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_tool_returns_decoded_lists_and_empty_strings() {
    let (app, store) = setup().await;
    seed_merge_pdf(&store).await;

    let (status, body) = send(&app, get("/api/tools/merge-pdf")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "merge-pdf",
            "name": "Merge PDF",
            "description": "",
            "category": "",
            "seoTitle": "",
            "seoDescription": "",
            "longDescription": "",
            "features": ["fast", "secure"],
            "useCases": [],
            "steps": []
        })
    );

    let (status, list) = send(&app, get("/api/tools")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([body]));
}

#[tokio::test]
async fn get_unknown_tool_is_not_found() {
    let (app, _store) = setup().await;
    let (status, body) = send(&app, get("/api/tools/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tool not found");
}

#[tokio::test]
async fn update_persists_every_field() {
    let (app, store) = setup().await;
    seed_merge_pdf(&store).await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/tools/merge-pdf",
            Some(token.as_str()),
            full_update("Merge PDF Pro"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, tool) = send(&app, get("/api/tools/merge-pdf")).await;
    let mut expected = full_update("Merge PDF Pro");
    expected["id"] = json!("merge-pdf");
    assert_eq!(tool, expected);
}

#[tokio::test]
async fn update_unknown_tool_is_not_found() {
    let (app, _store) = setup().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        json_request("PUT", "/api/tools/ghost", Some(token.as_str()), full_update("Ghost")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tool not found");

    let (_, list) = send(&app, get("/api/tools")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn update_requires_session() {
    let (app, store) = setup().await;
    seed_merge_pdf(&store).await;

    let (status, _) = send(
        &app,
        json_request("PUT", "/api/tools/merge-pdf", None, full_update("Hijack")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/tools/merge-pdf",
            Some("forged-token"),
            full_update("Hijack"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or missing session");

    let (_, tool) = send(&app, get("/api/tools/merge-pdf")).await;
    assert_eq!(tool["name"], "Merge PDF");
}

#[tokio::test]
async fn update_with_partial_body_is_rejected() {
    let (app, store) = setup().await;
    seed_merge_pdf(&store).await;
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        json_request(
            "PUT",
            "/api/tools/merge-pdf",
            Some(token.as_str()),
            json!({"name": "Only name"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, tool) = send(&app, get("/api/tools/merge-pdf")).await;
    assert_eq!(tool["name"], "Merge PDF");
}

#[tokio::test]
async fn logout_revokes_token() {
    let (app, store) = setup().await;
    seed_merge_pdf(&store).await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/logout", Some(token.as_str()), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = send(
        &app,
        json_request("PUT", "/api/tools/merge-pdf", Some(token.as_str()), full_update("After")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        json_request("POST", "/api/logout", Some(token.as_str()), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _store) = setup().await;
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn update_accepts_null_for_nullable_columns() {
    let (app, store) = setup().await;
    seed_merge_pdf(&store).await;
    let token = login(&app).await;

    let mut body = full_update("Merge PDF");
    body["description"] = Value::Null;
    body["longDescription"] = Value::Null;
    body["steps"] = Value::Null;

    let (status, ack) = send(
        &app,
        json_request("PUT", "/api/tools/merge-pdf", Some(token.as_str()), body),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({"success": true}));

    let (_, tool) = send(&app, get("/api/tools/merge-pdf")).await;
    assert_eq!(tool["description"], "");
    assert_eq!(tool["longDescription"], "");
    assert_eq!(tool["steps"], json!([]));
    assert_eq!(tool["category"], "organize");
}

#[tokio::test]
async fn update_rejects_null_name() {
    let (app, store) = setup().await;
    seed_merge_pdf(&store).await;
    let token = login(&app).await;

    let mut body = full_update("ignored");
    body["name"] = Value::Null;
    let (status, _) = send(
        &app,
        json_request("PUT", "/api/tools/merge-pdf", Some(token.as_str()), body),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn login_with_overflowing_session_ttl_fails_cleanly() {
    let store = Store::open_in_memory().await.expect("open store");
    store
        .seed_admin_if_empty("admin", "admin123")
        .await
        .expect("seed admin");
    let cfg = Config {
        session_ttl_minutes: 150_000_000_000,
        ..Config::default()
    };
    let app = cms_router(CmsState::new(store, &cfg));

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/login",
            None,
            json!({"username": "admin", "password": "admin123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}
