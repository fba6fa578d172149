use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::schedule::{CreateScheduleItemRequest, ScheduleItem, UpdateScheduleItemRequest},
    queries::schedule,
};

/// Lists the user's schedule: important items first, newest first within
/// equal importance.
pub async fn list_items(conn: &mut DbConn, user_id: i64) -> Result<Vec<ScheduleItem>> {
    schedule::list_items(conn, user_id).await
}

/// Validates and creates a schedule item. Flags default to false.
pub async fn create_item(
    conn: &mut DbConn,
    user_id: i64,
    request: CreateScheduleItemRequest,
) -> Result<ScheduleItem> {
    let activity = request.activity.unwrap_or_default();
    let period = request.period.unwrap_or_default();
    if activity.trim().is_empty() || period.trim().is_empty() {
        return Err(Error::Validation(
            "Activity and period are required".to_string(),
        ));
    }

    schedule::create_item(
        conn,
        user_id,
        activity.trim(),
        period.trim(),
        request.is_important.unwrap_or(false),
        request.is_favorite.unwrap_or(false),
    )
    .await
}

/// Gets a schedule item owned by the user.
pub async fn get_item(conn: &mut DbConn, user_id: i64, item_id: i64) -> Result<ScheduleItem> {
    schedule::get_item(conn, user_id, item_id)
        .await?
        .ok_or_else(|| Error::NotFound("Schedule item not found".to_string()))
}

/// Applies a partial update to a schedule item owned by the user. Only fields
/// present in the payload change.
pub async fn update_item(
    conn: &mut DbConn,
    user_id: i64,
    item_id: i64,
    request: UpdateScheduleItemRequest,
) -> Result<ScheduleItem> {
    let mut item = get_item(conn, user_id, item_id).await?;

    if let Some(activity) = request.activity {
        item.activity = activity;
    }
    if let Some(period) = request.period {
        item.period = period;
    }
    if let Some(is_important) = request.is_important {
        item.is_important = is_important;
    }
    if let Some(is_favorite) = request.is_favorite {
        item.is_favorite = is_favorite;
    }

    schedule::update_item(conn, &item).await
}

/// Permanently deletes a schedule item owned by the user.
pub async fn delete_item(conn: &mut DbConn, user_id: i64, item_id: i64) -> Result<()> {
    let rows_affected = schedule::delete_item(conn, user_id, item_id).await?;

    if rows_affected == 0 {
        return Err(Error::NotFound("Schedule item not found".to_string()));
    }

    Ok(())
}
