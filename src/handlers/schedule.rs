//! Schedule CRUD handlers
//!
//! Same thin-layer shape as the book handlers; all operations are scoped to
//! the authenticated user from request extensions.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};

use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::schedule::{CreateScheduleItemRequest, ScheduleItem, UpdateScheduleItemRequest},
    services::schedule,
    state::AppState,
};

/// GET /api/schedule
///
/// Lists all schedule items owned by the authenticated user, important items
/// first, then newest first.
///
/// # HTTP Status Codes
/// - `200 OK`: JSON array of ScheduleItem objects
/// - `401 UNAUTHORIZED`: No valid session
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn list_schedule(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<ScheduleItem>>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let items = schedule::list_items(&mut conn, auth_user.id).await?;

    Ok(Json(items))
}

/// POST /api/schedule
///
/// Creates a schedule item for the authenticated user.
///
/// # Request Body
/// - `activity`: Activity description (required, non-empty)
/// - `period`: Period label (required, non-empty)
/// - `is_important`: Optional flag, boolean or legacy 0/1 integer
/// - `is_favorite`: Optional flag, boolean or legacy 0/1 integer
///
/// # HTTP Status Codes
/// - `201 CREATED`: `{message, id}` for the new item
/// - `400 BAD_REQUEST`: Missing activity or period
/// - `401 UNAUTHORIZED`: No valid session
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn create_schedule_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateScheduleItemRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let item = schedule::create_item(&mut conn, auth_user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Activity added successfully",
            "id": item.id
        })),
    ))
}

/// GET /api/schedule/{id}
///
/// Gets a single schedule item owned by the authenticated user.
///
/// # HTTP Status Codes
/// - `200 OK`: The schedule item
/// - `401 UNAUTHORIZED`: No valid session
/// - `404 NOT_FOUND`: Item absent or owned by another user
pub async fn get_schedule_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(item_id): Path<i64>,
) -> Result<Json<ScheduleItem>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let item = schedule::get_item(&mut conn, auth_user.id, item_id).await?;

    Ok(Json(item))
}

/// PUT /api/schedule/{id}
///
/// Partially updates a schedule item owned by the authenticated user. Only
/// fields present in the payload are changed.
///
/// # Request Body
/// Any of `activity`, `period`, `is_important`, `is_favorite` (flags accept
/// booleans or the legacy 0/1 integers).
///
/// # HTTP Status Codes
/// - `200 OK`: `{message}` on success
/// - `401 UNAUTHORIZED`: No valid session
/// - `404 NOT_FOUND`: Item absent or owned by another user
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn update_schedule_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(item_id): Path<i64>,
    Json(request): Json<UpdateScheduleItemRequest>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    schedule::update_item(&mut conn, auth_user.id, item_id, request).await?;

    Ok(Json(serde_json::json!({
        "message": "Activity updated successfully"
    })))
}

/// DELETE /api/schedule/{id}
///
/// Permanently deletes a schedule item owned by the authenticated user.
///
/// # HTTP Status Codes
/// - `200 OK`: `{message}` on success
/// - `401 UNAUTHORIZED`: No valid session
/// - `404 NOT_FOUND`: Item absent or owned by another user
pub async fn delete_schedule_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(item_id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    schedule::delete_item(&mut conn, auth_user.id, item_id).await?;

    Ok(Json(serde_json::json!({
        "message": "Activity deleted successfully"
    })))
}
