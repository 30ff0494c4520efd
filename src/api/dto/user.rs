//! DTOs for the user endpoints.

use serde::Serialize;

use crate::api::middleware::validation::{Check, FieldRule, FieldRules, Fields};
use crate::application::services::Registration;
use crate::domain::entities::User;

/// Request body for `POST /users`, built once every field rule has passed.
///
/// Scalar values of any JSON type are taken in their text form.
#[derive(Debug, Default)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl FieldRules for CreateUserRequest {
    // A missing `emailAddress` fails only the presence rule: `Check::Email`
    // passes absent values, so the format message is not reported on top.
    const RULES: &'static [FieldRule] = &[
        FieldRule::new(
            "firstName",
            Check::Present,
            "Please provide a value for \"firstName\"",
        ),
        FieldRule::new(
            "lastName",
            Check::Present,
            "Please provide a value for \"lastName\"",
        ),
        FieldRule::new(
            "emailAddress",
            Check::Exists,
            "Please provide a value for \"emailAddress\"",
        ),
        FieldRule::new(
            "emailAddress",
            Check::Email,
            "Email must be a valid \"email address\"",
        ),
        FieldRule::new("emailAddress", Check::UniqueEmail, crate::error::EMAIL_TAKEN),
        FieldRule::new(
            "password",
            Check::Present,
            "Please provide a value for \"password\"",
        ),
    ];

    fn from_fields(fields: &Fields) -> Self {
        Self {
            first_name: fields.text("firstName").unwrap_or_default(),
            last_name: fields.text("lastName").unwrap_or_default(),
            email_address: fields.text("emailAddress").unwrap_or_default(),
            password: fields.text("password").unwrap_or_default(),
        }
    }
}

impl From<CreateUserRequest> for Registration {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email_address: request.email_address,
            password: request.password,
        }
    }
}

/// Response body for `GET /users`. Never carries the password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}
