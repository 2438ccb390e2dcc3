//! Authenticated-identity extractor for Axum handlers.
//!
//! The RBAC middleware authenticates the request and attaches an [`AuthUser`]
//! to the request extensions; this extractor hands it to handlers that need
//! the caller identity (e.g. for audit columns).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use railasset_core::error::CoreError;

use crate::auth::basic::parse_basic_header;
use crate::auth::password::verify_password;
use crate::config::ServerConfig;
use crate::error::AppError;

/// Authenticated user resolved from HTTP Basic credentials.
///
/// Use this as an extractor parameter in any handler that needs the caller:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user = %user.username, role = user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The provisioned account name (e.g. `"admin"`).
    pub username: String,
    /// The account's role name (`"ADMIN"`, `"MANAGER"`, `"VIEWER"`).
    pub role: &'static str,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })
    }
}

/// Resolve Basic credentials from request headers against the provisioned
/// accounts.
///
/// Fails with `Unauthorized` when the header is missing or malformed, the
/// account is unknown, or the password does not verify.
pub fn authenticate_basic(
    headers: &HeaderMap,
    config: &ServerConfig,
) -> Result<AuthUser, AppError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))
        })?;

    let (username, password) = parse_basic_header(header).ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Basic <credentials>".into(),
        ))
    })?;

    let account = config.find_account(&username).ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
    })?;

    let verified = verify_password(&password, &account.password_hash)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password verify failed: {e}"))))?;
    if !verified {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    Ok(AuthUser {
        username: account.username.clone(),
        role: account.role,
    })
}
