//! Helpers shared across layers.
//!
//! - [`password`] - bcrypt hashing and verification off the async executor

pub mod password;
