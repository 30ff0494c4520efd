//! Data Transfer Objects for API requests and responses.
//!
//! Responses serialize with camelCase JSON keys. Request bodies declare their
//! field rules through [`crate::api::middleware::validation::FieldRules`] and
//! are built from the validated JSON object.

pub mod course;
pub mod user;
