use axum::{
    Form,
    extract::State,
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
    response::{IntoResponse, Json, Redirect, Response},
};

use crate::{
    error::{Error, Result},
    models::users::{LoginUser, RegisterUser},
    services::{
        cookies::{
            SESSION_COOKIE, build_clear_session_cookie, build_session_cookie,
            extract_cookie_value,
        },
        sessions, users,
    },
    state::AppState,
};

/// Custom response type for redirects that also set a Set-Cookie header
pub struct SessionRedirect {
    location: &'static str,
    cookie: String,
}

impl IntoResponse for SessionRedirect {
    fn into_response(self) -> Response {
        let mut response = Redirect::to(self.location).into_response();

        if let Ok(cookie) = HeaderValue::from_str(&self.cookie) {
            response.headers_mut().append(SET_COOKIE, cookie);
        }

        response
    }
}

/// POST /register
///
/// Registers a new user and logs them in immediately.
///
/// # Request Body (form)
/// - `username`: Desired username (must be unique)
/// - `password`: User's password (never stored in plaintext)
///
/// # Returns
/// 303 redirect to `/` with the `session_token` cookie set.
///
/// # HTTP Status Codes
/// - `303 SEE_OTHER`: User registered and session established
/// - `400 BAD_REQUEST`: Missing username or password
/// - `409 CONFLICT`: Username already taken
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn register(
    State(state): State<AppState>,
    Form(request): Form<RegisterUser>,
) -> Result<SessionRedirect> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    // Create the user, then log the new user in automatically
    let user = users::register_user(&mut conn, request).await?;
    let token =
        sessions::establish_session(&mut conn, user.id, state.config.session.ttl_hours).await?;

    Ok(SessionRedirect {
        location: "/",
        cookie: build_session_cookie(
            &token,
            state.config.session.ttl_hours * 3600,
            &state.config.cookie,
        ),
    })
}

/// POST /login
///
/// Authenticates a user with username and password.
///
/// # Request Body (form)
/// - `username`: User's username
/// - `password`: User's password
///
/// # Returns
/// 303 redirect to `/` with the `session_token` cookie set.
///
/// # HTTP Status Codes
/// - `303 SEE_OTHER`: Authentication successful, session established
/// - `401 UNAUTHORIZED`: Invalid username or password
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginUser>,
) -> Result<SessionRedirect> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let user = users::authenticate_user(&mut conn, request).await?;
    let token =
        sessions::establish_session(&mut conn, user.id, state.config.session.ttl_hours).await?;

    Ok(SessionRedirect {
        location: "/",
        cookie: build_session_cookie(
            &token,
            state.config.session.ttl_hours * 3600,
            &state.config.cookie,
        ),
    })
}

/// GET /logout
///
/// Unconditionally revokes the current session and clears the cookie.
///
/// # Returns
/// 303 redirect to `/login` with the session cookie cleared.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<SessionRedirect> {
    let cookie_header = headers.get("cookie").and_then(|h| h.to_str().ok());

    if let Some(token) = cookie_header.and_then(|h| extract_cookie_value(h, SESSION_COOKIE)) {
        let mut conn = state.pool.acquire().await.map_err(|e| {
            Error::Internal(format!("Failed to acquire database connection: {}", e))
        })?;
        sessions::revoke_session(&mut conn, &token).await?;
    }

    Ok(SessionRedirect {
        location: "/login",
        cookie: build_clear_session_cookie(),
    })
}

/// GET /
///
/// Authenticated home. The page itself is rendered by the client; this
/// endpoint resolves the session explicitly and reports who is logged in,
/// redirecting to `/login` when no valid session is present.
///
/// # HTTP Status Codes
/// - `200 OK`: `{username}` for the authenticated user
/// - `303 SEE_OTHER`: No valid session, redirect to `/login`
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let cookie_header = headers.get("cookie").and_then(|h| h.to_str().ok());
    let Some(token) = cookie_header.and_then(|h| extract_cookie_value(h, SESSION_COOKIE)) else {
        return Ok(Redirect::to("/login").into_response());
    };

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    match sessions::resolve_session_user(&mut conn, &token).await? {
        Some(user) => Ok(Json(serde_json::json!({
            "username": user.username
        }))
        .into_response()),
        None => Ok(Redirect::to("/login").into_response()),
    }
}

/// GET /login
pub async fn login_page() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "page": "login" }))
}

/// GET /register
pub async fn register_page() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "page": "register" }))
}
