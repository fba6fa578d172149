use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::users::{LoginUser, NewUser, RegisterUser, User},
    queries::users,
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Registers a new user with credential validation and password hashing
pub async fn register_user(conn: &mut DbConn, register_user: RegisterUser) -> Result<User> {
    let username = register_user.username.trim();
    if username.is_empty() || register_user.password.is_empty() {
        return Err(Error::Validation(
            "Username and password are required".to_string(),
        ));
    }

    // Hash the password using Argon2
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(register_user.password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    let new_user = NewUser {
        username: username.to_string(),
        password_hash,
    };

    // Insert user into database; a duplicate username surfaces as Conflict
    let user = users::create_user(conn, new_user).await?;

    Ok(user)
}

/// Authenticates a user by username and password.
///
/// Unknown username and wrong password produce the same error, so callers
/// cannot probe for existing accounts.
pub async fn authenticate_user(conn: &mut DbConn, login_user: LoginUser) -> Result<User> {
    let user = users::get_user_by_username(conn, login_user.username.trim()).await?;

    match user {
        Some(user) if verify_password(&login_user.password, &user.password_hash)? => Ok(user),
        _ => Err(Error::Authentication(
            "Invalid username or password".to_string(),
        )),
    }
}

/// Verifies a password against a password hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| Error::Internal(format!("Invalid password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

/// Creates the configured default user when the users table is empty, so a
/// fresh store is immediately usable.
pub async fn seed_default_user(conn: &mut DbConn, username: &str, password: &str) -> Result<()> {
    if users::count_users(conn).await? > 0 {
        return Ok(());
    }

    let user = register_user(
        conn,
        RegisterUser {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
    .await?;
    tracing::info!(username = %user.username, "Seeded default user");

    Ok(())
}
