//! Book CRUD handlers
//!
//! Handlers follow the thin-layer pattern: they extract inputs, delegate to
//! the service layer, and shape the response. Every operation is scoped to
//! the authenticated user from request extensions.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};

use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::books::{Book, CreateBookRequest, UpdateBookRequest},
    services::books,
    state::AppState,
};

/// GET /api/books
///
/// Lists all books owned by the authenticated user, ordered by creation date
/// descending (most recent first). No pagination.
///
/// # Returns
/// JSON array of Book objects.
///
/// # HTTP Status Codes
/// - `200 OK`: Books retrieved successfully
/// - `401 UNAUTHORIZED`: No valid session
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn list_books(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<Book>>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let books = books::list_books(&mut conn, auth_user.id).await?;

    Ok(Json(books))
}

/// POST /api/books
///
/// Creates a book for the authenticated user.
///
/// # Request Body
/// - `title`: Book title (required, non-empty)
/// - `author`: Book author (required, non-empty)
/// - `year`: Optional publication year (zero treated as absent)
/// - `rating`: Optional rating (zero treated as absent)
/// - `review`: Optional free-text review
/// - `cover_icon`: Optional cover icon tag (default "initial")
/// - `status`: Optional status tag (default "Reading")
///
/// The creation date is stamped server-side and cannot be supplied.
///
/// # HTTP Status Codes
/// - `201 CREATED`: `{message, id}` for the new book
/// - `400 BAD_REQUEST`: Missing title or author
/// - `401 UNAUTHORIZED`: No valid session
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn create_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let book = books::create_book(&mut conn, auth_user.id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Book added successfully",
            "id": book.id
        })),
    ))
}

/// PUT /api/books/{id}
///
/// Partially updates a book owned by the authenticated user. Only the fields
/// present in the payload are changed; `date_finished` and `rating` may be
/// cleared with an explicit null.
///
/// # Request Body
/// Any of `date_finished`, `rating`, `cover_icon`, `status`.
///
/// # HTTP Status Codes
/// - `200 OK`: `{message}` on success
/// - `401 UNAUTHORIZED`: No valid session
/// - `404 NOT_FOUND`: Book absent or owned by another user
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn update_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(book_id): Path<i64>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    books::update_book(&mut conn, auth_user.id, book_id, request).await?;

    Ok(Json(serde_json::json!({
        "message": "Book updated successfully"
    })))
}
