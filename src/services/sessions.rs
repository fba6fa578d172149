use crate::DbConn;
use crate::{
    error::Result,
    models::users::{NewSession, User},
    queries::{sessions, users},
};
use chrono::{Duration, Utc};
use rand::Rng;

/// Generates an opaque session token: 32 random bytes (256 bits of entropy),
/// hex-encoded. Only its SHA-256 hash is stored.
pub fn generate_session_token() -> String {
    let mut rng = rand::rng();
    let mut random_bytes = [0u8; 32];
    rng.fill(&mut random_bytes);

    hex::encode(random_bytes)
}

/// Creates a session row for the user and returns the client-held token.
pub async fn establish_session(conn: &mut DbConn, user_id: i64, ttl_hours: i64) -> Result<String> {
    let token = generate_session_token();
    let token_hash = sessions::hash_session_token(&token);
    let expires_at = Utc::now() + Duration::hours(ttl_hours);

    sessions::create_session(
        conn,
        NewSession {
            user_id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(token)
}

/// Resolves the user referenced by a session token.
///
/// Yields None for an unknown or expired token. A valid session whose user no
/// longer exists is deleted on the spot and also yields None, so stale
/// sessions heal themselves instead of erroring forever.
pub async fn resolve_session_user(conn: &mut DbConn, token: &str) -> Result<Option<User>> {
    let token_hash = sessions::hash_session_token(token);

    let Some(session) = sessions::get_valid_session_by_token_hash(conn, &token_hash).await? else {
        return Ok(None);
    };

    match users::get_user_by_id(conn, session.user_id).await? {
        Some(user) => Ok(Some(user)),
        None => {
            sessions::delete_session(conn, session.id).await?;
            Ok(None)
        }
    }
}

/// Revokes the session behind a token. Unconditional: revoking a token with
/// no session row is not an error.
pub async fn revoke_session(conn: &mut DbConn, token: &str) -> Result<()> {
    let token_hash = sessions::hash_session_token(token);
    sessions::delete_session_by_token_hash(conn, &token_hash).await?;
    Ok(())
}

/// Cleans up all expired sessions from the database
/// This should be called periodically to maintain database performance
pub async fn cleanup_expired_sessions(conn: &mut DbConn) -> Result<u64> {
    let rows_affected = sessions::delete_expired_sessions(conn).await?;
    Ok(rows_affected)
}
