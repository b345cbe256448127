//!
//! # Database Setup
//!
//! Opens the SQLite connection pool and creates the schema if it does not
//! exist yet. The pool is opened once at process start in `main` and injected
//! into handlers as application data.

use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{Sqlite, SqlitePool, SqlitePoolOptions},
};

/// Connects to the SQLite database at `database_url`, creating the database
/// file and schema on first run.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        log::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Creates the `users` and `todos` tables if they don't exist.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id),
            title TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            priority TEXT NOT NULL DEFAULT 'medium',
            due_date TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
