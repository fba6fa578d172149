use crate::{
    error::{Error, Result},
    models::schedule::ScheduleItem,
};

use crate::DbConn;

/// Lists a user's schedule: important items first, newest first within equal
/// importance.
pub async fn list_items(conn: &mut DbConn, user_id: i64) -> Result<Vec<ScheduleItem>> {
    let items = sqlx::query_as::<_, ScheduleItem>(
        r#"
        SELECT id, user_id, activity, period, is_important, is_favorite
        FROM schedule
        WHERE user_id = ?
        ORDER BY is_important DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(items)
}

/// Creates a new schedule item in the database.
pub async fn create_item(
    conn: &mut DbConn,
    user_id: i64,
    activity: &str,
    period: &str,
    is_important: bool,
    is_favorite: bool,
) -> Result<ScheduleItem> {
    let item = sqlx::query_as::<_, ScheduleItem>(
        r#"
        INSERT INTO schedule (user_id, activity, period, is_important, is_favorite)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, user_id, activity, period, is_important, is_favorite
        "#,
    )
    .bind(user_id)
    .bind(activity)
    .bind(period)
    .bind(is_important)
    .bind(is_favorite)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(item)
}

/// Gets a single schedule item scoped by owner. Absent and not-owned both
/// yield None.
pub async fn get_item(
    conn: &mut DbConn,
    user_id: i64,
    item_id: i64,
) -> Result<Option<ScheduleItem>> {
    let item = sqlx::query_as::<_, ScheduleItem>(
        r#"
        SELECT id, user_id, activity, period, is_important, is_favorite
        FROM schedule
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(item)
}

/// Writes a schedule item's mutable columns back to the database.
pub async fn update_item(conn: &mut DbConn, item: &ScheduleItem) -> Result<ScheduleItem> {
    let updated_item = sqlx::query_as::<_, ScheduleItem>(
        r#"
        UPDATE schedule
        SET activity = ?, period = ?, is_important = ?, is_favorite = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, user_id, activity, period, is_important, is_favorite
        "#,
    )
    .bind(&item.activity)
    .bind(&item.period)
    .bind(item.is_important)
    .bind(item.is_favorite)
    .bind(item.id)
    .bind(item.user_id)
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(updated_item)
}

/// Deletes a schedule item scoped by owner.
pub async fn delete_item(conn: &mut DbConn, user_id: i64, item_id: i64) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM schedule
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(item_id)
    .bind(user_id)
    .execute(conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}
