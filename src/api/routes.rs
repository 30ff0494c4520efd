//! API route configuration.
//!
//! Public routes need no credentials. Protected routes pass through
//! [`crate::api::middleware::auth::layer`] before reaching the handler; body
//! validation runs after authentication, inside the handler's extractors.

use crate::api::handlers::{
    create_course_handler, create_user_handler, current_user_handler, delete_course_handler,
    get_course_handler, list_courses_handler, update_course_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Routes open to anonymous callers.
///
/// # Endpoints
///
/// - `POST /users`         - Register a user
/// - `GET  /courses`       - List courses with owners
/// - `GET  /courses/{id}`  - One course with its owner
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/courses", get(list_courses_handler))
        .route("/courses/{id}", get(get_course_handler))
}

/// Routes that require basic-auth credentials.
///
/// # Endpoints
///
/// - `GET    /users`         - The authenticated user
/// - `POST   /courses`       - Create a course
/// - `PUT    /courses/{id}`  - Update a course (owner only)
/// - `DELETE /courses/{id}`  - Delete a course (owner only)
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(current_user_handler))
        .route("/courses", post(create_course_handler))
        .route(
            "/courses/{id}",
            axum::routing::put(update_course_handler).delete(delete_course_handler),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::layer))
}

/// Every API route, public and protected, on shared paths.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state))
}
