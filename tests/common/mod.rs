#![allow(dead_code)]

use axum::http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use base64::{Engine, engine::general_purpose::STANDARD};
use course_api::infrastructure::persistence::MemoryStore;
use course_api::routes::api_router;
use course_api::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub const JOE_EMAIL: &str = "joe@smith.com";
pub const JOE_PASSWORD: &str = "joepassword";
pub const SALLY_EMAIL: &str = "sally@jones.com";
pub const SALLY_PASSWORD: &str = "sallypassword";

/// Lowest bcrypt cost, keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), store.clone(), TEST_BCRYPT_COST);
    (state, store)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(api_router(AppState::in_memory(TEST_BCRYPT_COST))).unwrap()
}

pub fn basic_auth(email: &str, password: &str) -> HeaderValue {
    let encoded = STANDARD.encode(format!("{email}:{password}"));
    HeaderValue::from_str(&format!("Basic {encoded}")).unwrap()
}

pub fn joe_auth() -> HeaderValue {
    basic_auth(JOE_EMAIL, JOE_PASSWORD)
}

pub fn sally_auth() -> HeaderValue {
    basic_auth(SALLY_EMAIL, SALLY_PASSWORD)
}

pub async fn register_user(
    server: &TestServer,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) {
    server
        .post("/users")
        .json(&json!({
            "firstName": first_name,
            "lastName": last_name,
            "emailAddress": email,
            "password": password
        }))
        .await
        .assert_status(StatusCode::CREATED);
}

/// Registers Joe (id 1) and Sally (id 2).
pub async fn seed_users(server: &TestServer) {
    register_user(server, "Joe", "Smith", JOE_EMAIL, JOE_PASSWORD).await;
    register_user(server, "Sally", "Jones", SALLY_EMAIL, SALLY_PASSWORD).await;
}

pub fn bookcase(user_id: i64) -> Value {
    json!({
        "title": "Build a Basic Bookcase",
        "description": "High-end furniture projects are great to dream about.",
        "estimatedTime": "12 hours",
        "materialsNeeded": "* 1/2 x 3/4 inch parting strip",
        "userId": user_id
    })
}

/// Creates a course as Joe and returns the id assigned to it.
pub async fn create_course(server: &TestServer, body: &Value) -> i64 {
    server
        .post("/courses")
        .add_header(AUTHORIZATION, joe_auth())
        .json(body)
        .await
        .assert_status(StatusCode::CREATED);

    let courses = server.get("/courses").await.json::<Value>();
    courses
        .as_array()
        .and_then(|all| all.last())
        .and_then(|course| course["id"].as_i64())
        .unwrap()
}
