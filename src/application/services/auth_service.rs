//! Authentication service for basic-auth credentials.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;

/// Resolves basic-auth credentials to a user.
///
/// The username is matched exactly against `emailAddress`; the password is
/// checked against the stored bcrypt hash. Every failure yields the same
/// [`AppError::Unauthorized`]; only the log line says which check failed.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Authenticates an email/password pair.
    ///
    /// A missing password is compared as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no user has this email or the
    /// password does not match.
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn authenticate(
        &self,
        email_address: &str,
        password: Option<&str>,
    ) -> Result<User, AppError> {
        let Some(user) = self.repository.find_by_email(email_address).await? else {
            warn!(username = %email_address, "User not found for username");
            return Err(AppError::Unauthorized);
        };

        let plain = password.unwrap_or_default().to_string();
        let matches = match verify_password(plain, user.password.clone()).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!(user_id = user.id, error = %e, "Stored password hash could not be checked");
                false
            }
        };

        if !matches {
            warn!(username = %user.email_address, "Authentication failure for username");
            return Err(AppError::Unauthorized);
        }

        info!(email_address = %user.email_address, "Authentication successful");
        Ok(user)
    }
}
