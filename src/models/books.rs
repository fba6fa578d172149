use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: Option<i64>,
    /// Server-stamped creation date, `YYYY-MM-DD`. Immutable after creation.
    pub date_added: String,
    pub review: Option<String>,
    pub rating: Option<f64>,
    pub date_finished: Option<String>,
    pub is_favorite: bool,
    pub cover_icon: String,
    pub status: String,
}

/// Column values for a book insert, after validation and defaulting.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub user_id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: Option<i64>,
    pub date_added: String,
    pub review: Option<String>,
    pub rating: Option<f64>,
    pub cover_icon: String,
    pub status: String,
}

/// Body of `POST /api/books`.
///
/// Title and author are required but declared optional here so that a missing
/// field surfaces as a 400 validation error rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub review: Option<String>,
    pub cover_icon: Option<String>,
    pub status: Option<String>,
}

/// Body of `PUT /api/books/{id}`. Only fields present in the payload are
/// applied; `date_finished` and `rating` may be explicitly cleared with null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default, deserialize_with = "super::double_option")]
    pub date_finished: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub rating: Option<Option<f64>>,
    pub cover_icon: Option<String>,
    pub status: Option<String>,
}
