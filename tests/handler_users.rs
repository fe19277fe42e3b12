mod common;

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};

// ─── WALKTHROUGH ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_update_delete_walkthrough() {
    let server = common::make_server();

    let response = server
        .post("/api/users")
        .json(&common::user_body("Ana", "ana@x.com", 30))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "id": 1, "name": "Ana", "email": "ana@x.com", "age": 30 }));

    let response = server
        .put("/api/users/1")
        .json(&common::user_body("Ana B.", "ana@x.com", 31))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "id": 1, "name": "Ana B.", "email": "ana@x.com", "age": 31 }));

    let response = server.delete("/api/users/1").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    server.get("/api/users/1").await.assert_status_not_found();
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let server = common::make_server();

    let response = server.get("/api/users").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let server = common::make_server();
    common::create_user(&server, "Ana", "ana@x.com", 30).await;
    let bob = common::create_user(&server, "Bob", "bob@x.com", 40).await;
    common::create_user(&server, "Cid", "cid@x.com", 50).await;

    server
        .delete(&format!("/api/users/{}", bob))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let users = server.get("/api/users").await.json::<Vec<Value>>();

    let names: Vec<&str> = users.iter().map(|u| u["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ana", "Cid"]);
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_after_create_returns_same_record() {
    let server = common::make_server();

    let created = server
        .post("/api/users")
        .json(&common::user_body("Ana", "ana@x.com", 30))
        .await
        .json::<Value>();

    let fetched = server
        .get(&format!("/api/users/{}", created["id"]))
        .await
        .json::<Value>();

    assert_eq!(created, fetched);
}

#[tokio::test]
async fn test_get_not_found_envelope() {
    let server = common::make_server();

    let response = server.get("/api/users/42").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["id"], 42);
}

#[tokio::test]
async fn test_get_non_numeric_id() {
    let server = common::make_server();

    let response = server.get("/api/users/abc").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_ignores_client_id() {
    let server = common::make_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "id": 500, "name": "Ana", "email": "ana@x.com", "age": 30 }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], 1);
    server.get("/api/users/500").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let server = common::make_server();

    let a = common::create_user(&server, "Ana", "ana@x.com", 30).await;
    server
        .delete(&format!("/api/users/{}", a))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let b = common::create_user(&server, "Bob", "bob@x.com", 40).await;

    assert_ne!(a, b);
}

#[tokio::test]
async fn test_create_accepts_nom_alias() {
    let server = common::make_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "nom": "Ana", "email": "ana@x.com", "age": 30 }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Ana");
    assert!(body.get("nom").is_none());
}

#[tokio::test]
async fn test_create_invalid_body_rejected() {
    let server = common::make_server();

    let response = server
        .post("/api/users")
        .json(&common::user_body("", "not-an-email", 200))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    let fields = &body["error"]["details"]["fields"];
    assert!(fields.get("name").is_some());
    assert!(fields.get("email").is_some());
    assert!(fields.get("age").is_some());

    server.get("/api/users").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_missing_field_rejected() {
    let server = common::make_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ana", "age": 30 }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_non_json_body_rejected() {
    let server = common::make_server();

    let response = server.post("/api/users").text("name=Ana").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_lenient_mode_skips_validation() {
    let server = TestServer::new(common::create_test_app(false)).unwrap();

    let response = server
        .post("/api/users")
        .json(&common::user_body("", "not-an-email", 200))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["email"], "not-an-email");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_not_found_does_not_create() {
    let server = common::make_server();

    let response = server
        .put("/api/users/7")
        .json(&common::user_body("Ghost", "ghost@x.com", 1))
        .await;

    response.assert_status_not_found();
    server.get("/api/users").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_update_keeps_id_even_if_body_has_one() {
    let server = common::make_server();
    let id = common::create_user(&server, "Ana", "ana@x.com", 30).await;

    let response = server
        .put(&format!("/api/users/{}", id))
        .json(&json!({ "id": 99, "name": "Ana", "email": "ana@y.com", "age": 30 }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["email"], "ana@y.com");
}

#[tokio::test]
async fn test_update_invalid_body_rejected() {
    let server = common::make_server();
    let id = common::create_user(&server, "Ana", "ana@x.com", 30).await;

    let response = server
        .put(&format!("/api/users/{}", id))
        .json(&common::user_body("Ana", "broken", 30))
        .await;

    response.assert_status_bad_request();
    let stored = server
        .get(&format!("/api/users/{}", id))
        .await
        .json::<Value>();
    assert_eq!(stored["email"], "ana@x.com");
}

#[tokio::test]
async fn test_post_update_alias() {
    let server = common::make_server();
    let id = common::create_user(&server, "Ana", "ana@x.com", 30).await;

    let response = server
        .post(&format!("/api/users/{}/update", id))
        .json(&common::user_body("Ana B.", "ana@x.com", 31))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Ana B.");

    server
        .post("/api/users/999/update")
        .json(&common::user_body("Ghost", "ghost@x.com", 1))
        .await
        .assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_is_idempotent() {
    let server = common::make_server();
    let id = common::create_user(&server, "Ana", "ana@x.com", 30).await;
    let path = format!("/api/users/{}", id);

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);

    server.get(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_id_succeeds() {
    let server = common::make_server();

    server
        .delete("/api/users/12345")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_post_delete_alias() {
    let server = common::make_server();
    let id = common::create_user(&server, "Ana", "ana@x.com", 30).await;

    server
        .post(&format!("/api/users/{}/delete", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/api/users").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_post_delete_alias_unknown_id_succeeds() {
    let server = common::make_server();
    common::create_user(&server, "Ana", "ana@x.com", 30).await;

    server
        .post("/api/users/12345/delete")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let users = server.get("/api/users").await.json::<Vec<Value>>();
    assert_eq!(users.len(), 1);
}

// ─── CORS ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cors_origin_reflected() {
    let server = common::make_server();

    let response = server
        .get("/api/users")
        .add_header("Origin", common::ALLOWED_ORIGIN)
        .await;

    response.assert_status_ok();
    let header = response.header("access-control-allow-origin");
    assert_eq!(header.to_str().unwrap(), common::ALLOWED_ORIGIN);
}

#[tokio::test]
async fn test_cors_on_error_responses() {
    let server = common::make_server();

    let response = server
        .get("/api/users/1")
        .add_header("Origin", common::ALLOWED_ORIGIN)
        .await;

    response.assert_status_not_found();
    let header = response.header("access-control-allow-origin");
    assert_eq!(header.to_str().unwrap(), common::ALLOWED_ORIGIN);
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = common::make_server();

    let response = server
        .method(Method::OPTIONS, "/api/users/1")
        .add_header("Origin", common::ALLOWED_ORIGIN)
        .add_header("Access-Control-Request-Method", "PUT")
        .await;

    response.assert_status_ok();
    let methods = response.header("access-control-allow-methods");
    assert!(methods.to_str().unwrap().contains("PUT"));
}
