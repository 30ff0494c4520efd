//! Handlers for the user endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::user::{CreateUserRequest, CurrentUserResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::api::middleware::validation::Valid;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the authenticated user.
///
/// # Endpoint
///
/// `GET /users` (basic auth)
///
/// # Response
///
/// ```json
/// { "firstName": "Joe", "lastName": "Smith", "emailAddress": "joe@smith.com" }
/// ```
pub async fn current_user_handler(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<CurrentUserResponse> {
    Json(user.into())
}

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Sally",
///   "lastName": "Jones",
///   "emailAddress": "sally@jones.com",
///   "password": "sallypassword"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request listing every failed field rule, including an
/// email address that is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Valid(payload): Valid<CreateUserRequest>,
) -> Result<StatusCode, AppError> {
    state.user_service.register(payload.into()).await?;

    Ok(StatusCode::CREATED)
}
