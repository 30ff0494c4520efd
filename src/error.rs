//! Application error type and its HTTP rendering.
//!
//! Every failure a handler can produce is an [`AppError`]. The variant decides
//! the status code and the JSON body:
//!
//! | Variant        | Status | Body                                 |
//! |----------------|--------|--------------------------------------|
//! | `Unauthorized` | 401    | `{"message": "Access Denied"}`       |
//! | `Validation`   | 400    | `{"errors": ["...", "..."]}`         |
//! | `Forbidden`    | 403    | `{"message": "..."}`                 |
//! | `NotFound`     | 404    | `{"message": "..."}`                 |
//! | `Internal`     | 500    | `{"message": "Internal Server Error"}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::error::ErrorKind;

/// Message sent for every authentication failure, whatever check failed.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Message sent for unhandled failures. Details are only logged.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", ACCESS_DENIED)]
    Unauthorized,

    #[error("validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Validation failure carrying a single message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![message.into()],
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation { errors } => (status, Json(ErrorsBody { errors })).into_response(),
            AppError::Unauthorized => (
                status,
                Json(MessageBody {
                    message: ACCESS_DENIED.to_string(),
                }),
            )
                .into_response(),
            AppError::Forbidden { message } | AppError::NotFound { message } => {
                (status, Json(MessageBody { message })).into_response()
            }
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Unhandled failure");
                (
                    status,
                    Json(MessageBody {
                        message: INTERNAL_SERVER_ERROR.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Translates storage constraint violations into client errors.
///
/// - unique violation on the users email index → "Email already exists"
/// - foreign key / NOT NULL violation → invalid course owner
/// - anything else → internal error
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        match db.kind() {
            ErrorKind::UniqueViolation if db.constraint() == Some("users_email_address_key") => {
                return AppError::invalid(EMAIL_TAKEN);
            }
            ErrorKind::ForeignKeyViolation | ErrorKind::NotNullViolation => {
                return AppError::invalid(INVALID_OWNER);
            }
            _ => {}
        }
    }

    AppError::internal(format!("Database error: {e}"))
}

/// Reported when an email address is already registered.
pub const EMAIL_TAKEN: &str = "Email already exists";

/// Reported when a course's `userId` is missing or names no user.
pub const INVALID_OWNER: &str = "Please provide a \"userId\" that references an existing user";
