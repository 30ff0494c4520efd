//! Application layer services implementing business logic.
//!
//! Services sit between HTTP handlers and repository traits. They own the
//! rules that are not about HTTP: password hashing, credential checks,
//! not-found mapping and course ownership.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Basic-auth credential checks
//! - [`services::user_service::UserService`] - Registration and email lookups
//! - [`services::course_service::CourseService`] - Course reads and owner-only writes

pub mod services;
