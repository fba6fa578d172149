use crate::{
    error::{Error, Result},
    models::users::{NewSession, Session},
};
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::DbConn;

/// Hash a session token using SHA-256 for secure storage
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Creates a new session in the database.
pub async fn create_session(conn: &mut DbConn, new_session: NewSession) -> Result<Session> {
    let session = sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (user_id, token_hash, expires_at, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, token_hash, expires_at, created_at
        "#,
    )
    .bind(new_session.user_id)
    .bind(&new_session.token_hash)
    .bind(new_session.expires_at)
    .bind(Utc::now())
    .fetch_one(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(session)
}

/// Gets a valid session (exists and not expired) by its token hash.
pub async fn get_valid_session_by_token_hash(
    conn: &mut DbConn,
    token_hash: &str,
) -> Result<Option<Session>> {
    let session = sqlx::query_as::<_, Session>(
        r#"
        SELECT id, user_id, token_hash, expires_at, created_at
        FROM sessions
        WHERE token_hash = ? AND expires_at > ?
        "#,
    )
    .bind(token_hash)
    .bind(Utc::now())
    .fetch_optional(conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(session)
}

/// Deletes a session by its ID.
pub async fn delete_session(conn: &mut DbConn, session_id: i64) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE id = ?
        "#,
    )
    .bind(session_id)
    .execute(conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}

/// Deletes a session by its token hash.
pub async fn delete_session_by_token_hash(conn: &mut DbConn, token_hash: &str) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE token_hash = ?
        "#,
    )
    .bind(token_hash)
    .execute(conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}

/// Deletes all expired sessions.
pub async fn delete_expired_sessions(conn: &mut DbConn) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE expires_at < ?
        "#,
    )
    .bind(Utc::now())
    .execute(conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}
