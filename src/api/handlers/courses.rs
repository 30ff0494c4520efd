//! Handlers for the course endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::api::dto::course::{CourseEnvelope, CourseRequest, CourseResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::api::middleware::validation::Valid;
use crate::error::AppError;
use crate::state::AppState;

/// Parses the `{id}` path segment, rejecting non-integers with a 400.
fn course_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::invalid("Course id must be an integer"))
}

/// Lists all courses with their owners.
///
/// # Endpoint
///
/// `GET /courses`
///
/// Always `200 OK`; an empty catalogue is an empty array.
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_service.list_courses().await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Returns one course with its owner.
///
/// # Endpoint
///
/// `GET /courses/{id}`
///
/// # Response
///
/// ```json
/// {
///   "course": {
///     "id": 1,
///     "title": "Build a Basic Bookcase",
///     "description": "...",
///     "estimatedTime": "12 hours",
///     "materialsNeeded": "...",
///     "userId": 1,
///     "owner": { "id": 1, "firstName": "Joe", "lastName": "Smith", "emailAddress": "joe@smith.com" }
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no course has this id.
pub async fn get_course_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CourseEnvelope>, AppError> {
    let id = course_id(path)?;
    let course = state.course_service.get_course(id).await?;

    Ok(Json(CourseEnvelope {
        course: course.into(),
    }))
}

/// Creates a course.
///
/// # Endpoint
///
/// `POST /courses` (basic auth)
///
/// The owner is the `userId` in the body, not the authenticated user.
///
/// # Errors
///
/// Returns 400 Bad Request if `title`/`description` are missing or `userId`
/// does not reference a user.
pub async fn create_course_handler(
    State(state): State<AppState>,
    Valid(payload): Valid<CourseRequest>,
) -> Result<StatusCode, AppError> {
    state
        .course_service
        .create_course(payload.into_new_course())
        .await?;

    Ok(StatusCode::CREATED)
}

/// Replaces the editable fields of a course.
///
/// # Endpoint
///
/// `PUT /courses/{id}` (basic auth, owner only)
///
/// # Errors
///
/// - 400 Bad Request if `title`/`description` are missing
/// - 403 Forbidden if the authenticated user does not own the course
/// - 404 Not Found if no course has this id
pub async fn update_course_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    path: Result<Path<i64>, PathRejection>,
    Valid(payload): Valid<CourseRequest>,
) -> Result<StatusCode, AppError> {
    let id = course_id(path)?;

    state
        .course_service
        .update_course(id, &user, payload.into_changes())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /courses/{id}` (basic auth, owner only)
///
/// # Errors
///
/// - 403 Forbidden if the authenticated user does not own the course
/// - 404 Not Found if no course has this id
pub async fn delete_course_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = course_id(path)?;

    state.course_service.delete_course(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
