use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::books::{Book, CreateBookRequest, NewBook, UpdateBookRequest},
    queries::books,
};
use chrono::Local;

/// Lists all books owned by the user, most recently added first.
pub async fn list_books(conn: &mut DbConn, user_id: i64) -> Result<Vec<Book>> {
    books::list_books(conn, user_id).await
}

/// Validates and creates a book, stamping the creation date server-side.
pub async fn create_book(
    conn: &mut DbConn,
    user_id: i64,
    request: CreateBookRequest,
) -> Result<Book> {
    let title = request.title.unwrap_or_default();
    let author = request.author.unwrap_or_default();
    if title.trim().is_empty() || author.trim().is_empty() {
        return Err(Error::Validation(
            "Title and author are required".to_string(),
        ));
    }

    let new_book = NewBook {
        user_id,
        title: title.trim().to_string(),
        author: author.trim().to_string(),
        // Zero is treated as absent, matching the legacy clients.
        publication_year: request.year.filter(|year| *year != 0),
        date_added: Local::now().format("%Y-%m-%d").to_string(),
        review: request.review,
        rating: request.rating.filter(|rating| *rating != 0.0),
        cover_icon: request.cover_icon.unwrap_or_else(|| "initial".to_string()),
        status: request.status.unwrap_or_else(|| "Reading".to_string()),
    };

    books::create_book(conn, new_book).await
}

/// Applies a partial update to a book owned by the user.
///
/// Only fields present in the payload change. `date_finished` and `rating`
/// clear to null when the payload supplies null; an empty `date_finished`
/// string also clears, which legacy clients send when un-finishing a book.
pub async fn update_book(
    conn: &mut DbConn,
    user_id: i64,
    book_id: i64,
    request: UpdateBookRequest,
) -> Result<Book> {
    let mut book = books::get_book(conn, user_id, book_id)
        .await?
        .ok_or_else(|| Error::NotFound("Book not found".to_string()))?;

    if let Some(date_finished) = request.date_finished {
        book.date_finished = date_finished.filter(|date| !date.is_empty());
    }
    if let Some(rating) = request.rating {
        book.rating = rating;
    }
    if let Some(cover_icon) = request.cover_icon {
        book.cover_icon = cover_icon;
    }
    if let Some(status) = request.status {
        book.status = status;
    }

    books::update_book(conn, &book).await
}
