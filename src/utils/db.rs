use std::str::FromStr;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub const CREATE_BOOKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS books (
    isbn TEXT PRIMARY KEY,
    amazon_url TEXT NOT NULL,
    author TEXT NOT NULL,
    language TEXT NOT NULL,
    pages INTEGER NOT NULL,
    publisher TEXT NOT NULL,
    title TEXT NOT NULL,
    year INTEGER NOT NULL
)";

pub const DROP_BOOKS_TABLE: &str = "DROP TABLE IF EXISTS books";

pub async fn create_table<'e, E: Executor<'e>>(executor: E) -> LibraryResult<()> {
    executor.execute(CREATE_BOOKS_TABLE).await
        .map(|_| ())
        .map_err(|err| LibraryError::database(
            format!("failed to create books table due to {}", err).as_str(), None))
}

pub async fn delete_table<'e, E: Executor<'e>>(executor: E) -> LibraryResult<()> {
    executor.execute(DROP_BOOKS_TABLE).await
        .map(|_| ())
        .map_err(|err| LibraryError::database(
            format!("failed to delete books table due to {}", err).as_str(), None))
}

// helper method to build a postgres pool
pub async fn build_pg_pool(config: &Configuration) -> LibraryResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(config.database_url.as_str())
        .await
        .map_err(LibraryError::from)
}

// helper method to build a sqlite pool, the database file is created when missing
pub async fn build_sqlite_pool(config: &Configuration) -> LibraryResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(config.database_url.as_str())
        .map_err(LibraryError::from)?
        .create_if_missing(true);
    // an in-memory database lives as long as its connection, so never recycle it
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(LibraryError::from)
}
