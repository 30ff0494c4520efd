//! HTTP basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::domain::entities::User;
use crate::{error::AppError, state::AppState};

/// The authenticated user, stored in request extensions by [`layer`].
///
/// Handlers behind the layer extract it with `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Authenticates requests using basic-auth credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<emailAddress>:<password>)
/// ```
///
/// # Authentication Flow
///
/// 1. Extract credentials from the `Authorization` header
/// 2. Look up the user by email address
/// 3. Verify the password against the stored bcrypt hash
/// 4. Attach [`CurrentUser`] to the request and continue
///
/// # Errors
///
/// Returns `401 {"message": "Access Denied"}` if the header is missing or
/// malformed, the user is unknown, or the password does not match. The
/// response is identical in every case.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/users", get(current_user_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((email_address, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::warn!("Auth header not found");
            AppError::Unauthorized
        })?;

    let user = st
        .auth_service
        .authenticate(&email_address, password.as_deref())
        .await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
