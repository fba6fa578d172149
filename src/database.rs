use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Database connection pool type
pub type DbPool = sqlx::SqlitePool;

/// Database connection type used by the query layer
pub type DbConn = sqlx::SqliteConnection;

/// Opens the SQLite database at `url`, creating the file if it does not exist.
pub async fn connect(url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
