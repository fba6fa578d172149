use crate::{
    error::{Error, Result},
    models::books::{Book, NewBook},
};

use crate::DbConn;

/// Lists all books owned by a user, most recently added first.
pub async fn list_books(conn: &mut DbConn, user_id: i64) -> Result<Vec<Book>> {
    let books = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, user_id, title, author, publication_year, date_added,
               review, rating, date_finished, is_favorite, cover_icon, status
        FROM books
        WHERE user_id = ?
        ORDER BY date_added DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(books)
}

/// Creates a new book in the database.
pub async fn create_book(conn: &mut DbConn, new_book: NewBook) -> Result<Book> {
    let book = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (user_id, title, author, publication_year, date_added,
                           review, rating, cover_icon, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, title, author, publication_year, date_added,
                  review, rating, date_finished, is_favorite, cover_icon, status
        "#,
    )
    .bind(new_book.user_id)
    .bind(&new_book.title)
    .bind(&new_book.author)
    .bind(new_book.publication_year)
    .bind(&new_book.date_added)
    .bind(&new_book.review)
    .bind(new_book.rating)
    .bind(&new_book.cover_icon)
    .bind(&new_book.status)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(book)
}

/// Gets a single book scoped by owner. Absent and not-owned both yield None.
pub async fn get_book(conn: &mut DbConn, user_id: i64, book_id: i64) -> Result<Option<Book>> {
    let book = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, user_id, title, author, publication_year, date_added,
               review, rating, date_finished, is_favorite, cover_icon, status
        FROM books
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(book_id)
    .bind(user_id)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(book)
}

/// Writes a book's mutable columns back to the database.
pub async fn update_book(conn: &mut DbConn, book: &Book) -> Result<Book> {
    let updated_book = sqlx::query_as::<_, Book>(
        r#"
        UPDATE books
        SET date_finished = ?, rating = ?, cover_icon = ?, status = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, user_id, title, author, publication_year, date_added,
                  review, rating, date_finished, is_favorite, cover_icon, status
        "#,
    )
    .bind(&book.date_finished)
    .bind(book.rating)
    .bind(&book.cover_icon)
    .bind(&book.status)
    .bind(book.id)
    .bind(book.user_id)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(updated_book)
}

/// Counts a user's books whose finish date starts with the given `YYYY-MM`
/// prefix.
pub async fn count_finished_with_prefix(
    conn: &mut DbConn,
    user_id: i64,
    month_prefix: &str,
) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM books
        WHERE user_id = ? AND date_finished LIKE ?
        "#,
    )
    .bind(user_id)
    .bind(format!("{}%", month_prefix))
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(count)
}

/// Mean of a user's non-null ratings. None when no book has been rated.
pub async fn average_rating(conn: &mut DbConn, user_id: i64) -> Result<Option<f64>> {
    let average = sqlx::query_scalar::<_, Option<f64>>(
        r#"
        SELECT AVG(rating)
        FROM books
        WHERE user_id = ? AND rating IS NOT NULL
        "#,
    )
    .bind(user_id)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(average)
}
