//! Role-based access control for the asset API.
//!
//! Authorization is a single declarative table of
//! `(method, path prefix, allowed roles)` entries evaluated in order before
//! any handler runs; the first matching entry wins. Requests that match no
//! entry still require authentication. The resolved [`AuthUser`] is attached
//! to the request so handlers can read the caller identity.

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use railasset_core::error::CoreError;
use railasset_core::roles::{ROLE_ADMIN, ROLE_MANAGER, ROLE_VIEWER};

use super::auth::{authenticate_basic, AuthUser};
use crate::error::AppError;
use crate::state::AppState;

/// A single authorization rule.
struct PolicyEntry {
    method: Method,
    path_prefix: &'static str,
    allowed_roles: &'static [&'static str],
}

const WRITERS: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER];
const READERS: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER, ROLE_VIEWER];

/// Ordered route policy for the guarded API surface.
///
/// | Method | Prefix        | Roles                  |
/// |--------|---------------|------------------------|
/// | POST   | /api/assets   | ADMIN, MANAGER         |
/// | PUT    | /api/assets   | ADMIN, MANAGER         |
/// | DELETE | /api/assets   | ADMIN                  |
/// | GET    | /api/assets   | ADMIN, MANAGER, VIEWER |
static POLICY: &[PolicyEntry] = &[
    PolicyEntry {
        method: Method::POST,
        path_prefix: "/api/assets",
        allowed_roles: WRITERS,
    },
    PolicyEntry {
        method: Method::PUT,
        path_prefix: "/api/assets",
        allowed_roles: WRITERS,
    },
    PolicyEntry {
        method: Method::DELETE,
        path_prefix: "/api/assets",
        allowed_roles: &[ROLE_ADMIN],
    },
    PolicyEntry {
        method: Method::GET,
        path_prefix: "/api/assets",
        allowed_roles: READERS,
    },
];

/// Look up the roles allowed for a request, or `None` when no entry matches.
fn required_roles(method: &Method, path: &str) -> Option<&'static [&'static str]> {
    POLICY
        .iter()
        .find(|entry| entry.method == *method && path.starts_with(entry.path_prefix))
        .map(|entry| entry.allowed_roles)
}

/// Authenticate the request and enforce the route policy.
///
/// Rejects with 401 when credentials are missing or invalid, 403 when the
/// authenticated role is not allowed for the matched rule. On success the
/// [`AuthUser`] is inserted into the request extensions.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let allowed = required_roles(req.method(), req.uri().path());

    let user = authenticate_basic(req.headers(), &state.config)?;

    if let Some(allowed) = allowed {
        if !allowed.contains(&user.role) {
            tracing::warn!(
                user = %user.username,
                role = user.role,
                method = %req.method(),
                path = req.uri().path(),
                "Request rejected by route policy",
            );
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Role {} is not permitted for this operation",
                user.role
            ))));
        }
    }

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
