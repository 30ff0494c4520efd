//! Handler for unmatched routes.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Returns `404 {"message": "Route Not Found"}` for any unknown path.
pub async fn not_found_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route Not Found" })),
    )
}
