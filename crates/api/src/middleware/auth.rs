//! Session middleware for the ledger routes.
//!
//! The token comes from `Authorization: Bearer` or, failing that, the
//! configured session cookie. An unknown token answers 401; a role outside the
//! ledger policy answers 403. The resolved [`SessionContext`] is stored in the
//! request extensions and handed to handlers through [`AuthSession`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use rxerp_shared::{AppError, SessionContext};
use tracing::{debug, warn};

use crate::AppState;
use crate::error::ApiError;

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Finds the session token in the headers or the session cookie.
fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token);
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|c| c.value().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Session middleware that resolves the caller and applies the role gate.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(request.headers(), &state.session_cookie) else {
        return ApiError(AppError::Unauthorized(
            "A session token is required".to_string(),
        ))
        .into_response();
    };

    let context = match state.sessions.resolve(&token).await {
        Ok(Some(context)) => context,
        Ok(None) => {
            debug!("Rejected unknown session token");
            return ApiError(AppError::Unauthorized(
                "Session is invalid or has expired".to_string(),
            ))
            .into_response();
        }
        Err(e) => return ApiError(e).into_response(),
    };

    if !state.access.permits(&context.role) {
        warn!(email = %context.email, role = %context.role, "Role not permitted for ledger");
        return ApiError(AppError::Forbidden(format!(
            "Role '{}' may not open the financial ledger",
            context.role
        )))
        .into_response();
    }

    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Extractor for the resolved session.
///
/// ```ignore
/// async fn handler(session: AuthSession) -> impl IntoResponse {
///     let actor = session.context();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession(pub SessionContext);

impl AuthSession {
    /// Returns the session context.
    #[must_use]
    pub const fn context(&self) -> &SessionContext {
        &self.0
    }

    /// Returns the signed-in email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .map(AuthSession)
            .ok_or_else(|| ApiError(AppError::Unauthorized("Authentication required".to_string())))
    }
}
