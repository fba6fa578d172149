//! Session authentication middleware
//!
//! This module provides middleware for resolving the session cookie to a
//! user and threading that user through request extensions.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::{
    error::{Error, Result},
    models::users::User,
    services::{
        cookies::{SESSION_COOKIE, extract_cookie_value},
        sessions,
    },
    state::AppState,
};

/// Authenticated user resolved from the session cookie
///
/// This struct is added to request extensions by the session middleware
/// after successful resolution.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// User's unique identifier
    pub id: i64,
    /// User's username
    pub username: String,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Session authentication middleware
///
/// Resolves the `session_token` cookie to a user and adds the resolved
/// `AuthenticatedUser` to request extensions for handler access.
///
/// # Behavior
/// 1. Extracts the opaque session token from the Cookie header
/// 2. Looks up a non-expired session row by the token's SHA-256 hash
/// 3. Loads the referenced user; a session whose user has been removed is
///    deleted on the spot (stale-session self-healing)
/// 4. Adds `AuthenticatedUser` to request extensions
/// 5. Returns 401 JSON if the token is missing, unknown, expired, or stale
///
/// # Usage
/// Apply this middleware to protected routes using `route_layer()`:
///
/// ```ignore
/// Router::new()
///     .route("/books", get(list_books))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         session_auth_middleware,
///     ))
/// ```
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let cookie_header = headers.get("cookie").and_then(|h| h.to_str().ok());
    let token = cookie_header
        .and_then(|h| extract_cookie_value(h, SESSION_COOKIE))
        .ok_or_else(|| Error::Authentication("Missing session token".to_string()))?;

    // Scoped so the connection returns to the pool before the handler runs.
    let user = {
        let mut conn = state.pool.acquire().await.map_err(|e| {
            Error::Internal(format!("Failed to acquire database connection: {}", e))
        })?;
        sessions::resolve_session_user(&mut conn, &token).await?
    };

    let user =
        user.ok_or_else(|| Error::Authentication("Invalid or expired session".to_string()))?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(user));
    Ok(next.run(request).await)
}
