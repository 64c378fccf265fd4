//! SQLite persistence: pool setup, books table DDL, row operations.

use crate::error::AppError;
use crate::model::Book;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool on `database_url` (e.g. `sqlite:books.db`), creating the file if absent.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the books table if it does not exist. Call once at startup.
pub async fn ensure_books_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            year INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert two sample books when the table is empty. Startup convenience only.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;
    if count == 0 {
        insert_book(pool, "Le Petit Prince", "Antoine de Saint-Exupéry", Some(1943)).await?;
        insert_book(pool, "L'Étranger", "Albert Camus", Some(1942)).await?;
        tracing::info!("seeded sample books");
    }
    Ok(())
}

/// Insert one row and return the assigned id.
pub async fn insert_book(
    pool: &SqlitePool,
    title: &str,
    author: &str,
    year: Option<i64>,
) -> Result<i64, AppError> {
    let id: i64 =
        sqlx::query_scalar("INSERT INTO books (title, author, year) VALUES (?, ?, ?) RETURNING id")
            .bind(title)
            .bind(author)
            .bind(year)
            .fetch_one(pool)
            .await?;
    Ok(id)
}

/// All rows in insertion order (ascending id).
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Book>, AppError> {
    let books = sqlx::query_as("SELECT id, title, author, year FROM books ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(books)
}

pub async fn fetch_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Book>, AppError> {
    let book = sqlx::query_as("SELECT id, title, author, year FROM books WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(book)
}

/// Overwrite all three fields for the row with that id.
/// Returns false when no such row exists (zero rows affected).
pub async fn update_row(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    author: &str,
    year: Option<i64>,
) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE books SET title = ?, author = ?, year = ? WHERE id = ?")
        .bind(title)
        .bind(author)
        .bind(year)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete the row with that id. Idempotent: succeeds whether or not the row existed.
pub async fn delete_row(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
