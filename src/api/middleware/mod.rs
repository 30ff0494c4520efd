//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, body validation, rate limiting, panic containment
//! and observability middleware.

pub mod auth;
pub mod panic;
pub mod rate_limit;
pub mod tracing;
pub mod validation;
