//! User registration and lookup.

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Plaintext registration data, already validated.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

/// Service for user accounts.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    /// Creates a new user service.
    ///
    /// `bcrypt_cost` is the work factor used when hashing new passwords.
    pub fn new(repository: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    /// Hashes the password and stores the new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email was registered in the
    /// meantime.
    /// Returns [`AppError::Internal`] on hashing or repository errors.
    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        let password_hash = hash_password(registration.password, self.bcrypt_cost).await?;

        let user = self
            .repository
            .create(NewUser {
                first_name: registration.first_name,
                last_name: registration.last_name,
                email_address: registration.email_address,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Returns true if a user already has this email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn is_email_taken(&self, email_address: &str) -> Result<bool, AppError> {
        Ok(self.repository.find_by_email(email_address).await?.is_some())
    }
}
