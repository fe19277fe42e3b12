#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use user_crud::infrastructure::persistence::InMemoryUserRepository;
use user_crud::routes::app_router;
use user_crud::state::AppState;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn create_test_state(strict_validation: bool) -> AppState {
    AppState::new(Arc::new(InMemoryUserRepository::new()), strict_validation)
}

pub fn create_test_app(strict_validation: bool) -> Router {
    app_router(create_test_state(strict_validation), ALLOWED_ORIGIN).unwrap()
}

pub fn make_server() -> TestServer {
    TestServer::new(create_test_app(true)).unwrap()
}

pub fn user_body(name: &str, email: &str, age: i32) -> Value {
    json!({ "name": name, "email": email, "age": age })
}

/// Creates a user through the API and returns its id.
pub async fn create_user(server: &TestServer, name: &str, email: &str, age: i32) -> i64 {
    let response = server
        .post("/api/users")
        .json(&user_body(name, email, age))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap()
}
