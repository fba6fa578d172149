use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ScheduleItem {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: i64,
    pub activity: String,
    pub period: String,
    pub is_important: bool,
    pub is_favorite: bool,
}

/// Body of `POST /api/schedule`. Flags accept both JSON booleans and the
/// legacy 0/1 integer encoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateScheduleItemRequest {
    pub activity: Option<String>,
    pub period: Option<String>,
    #[serde(default, deserialize_with = "super::optional_flag")]
    pub is_important: Option<bool>,
    #[serde(default, deserialize_with = "super::optional_flag")]
    pub is_favorite: Option<bool>,
}

/// Body of `PUT /api/schedule/{id}`. Only fields present in the payload are
/// applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScheduleItemRequest {
    pub activity: Option<String>,
    pub period: Option<String>,
    #[serde(default, deserialize_with = "super::optional_flag")]
    pub is_important: Option<bool>,
    #[serde(default, deserialize_with = "super::optional_flag")]
    pub is_favorite: Option<bool>,
}
