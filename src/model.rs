//! Book record types and the CRUD façade over the store.

use crate::error::AppError;
use crate::store;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
}

/// Fields for a create: title and author already validated non-empty.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
}

/// Partial update body. Merge is presence-based: a field participates only
/// when its key appears in the request. `year` distinguishes an explicit
/// `"year": null` (clear the stored year) from an omitted key (keep it).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub year: Option<Option<i64>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

pub struct BookModel;

impl BookModel {
    /// All books in insertion order.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Book>, AppError> {
        store::fetch_all(pool).await
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Book>, AppError> {
        store::fetch_by_id(pool, id).await
    }

    /// Insert a new record; the store assigns the id.
    pub async fn create(pool: &SqlitePool, new: NewBook) -> Result<Book, AppError> {
        let id = store::insert_book(pool, &new.title, &new.author, new.year).await?;
        Ok(Book {
            id,
            title: new.title,
            author: new.author,
            year: new.year,
        })
    }

    /// Merge the supplied fields over the existing record and write the result
    /// back. Returns `None` when no record exists at `id`.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: BookPatch,
    ) -> Result<Option<Book>, AppError> {
        let Some(existing) = store::fetch_by_id(pool, id).await? else {
            return Ok(None);
        };
        let merged = Book {
            id: existing.id,
            title: patch.title.unwrap_or(existing.title),
            author: patch.author.unwrap_or(existing.author),
            year: patch.year.unwrap_or(existing.year),
        };
        // The row may vanish between the read and the write.
        if !store::update_row(pool, id, &merged.title, &merged.author, merged.year).await? {
            return Ok(None);
        }
        Ok(Some(merged))
    }

    /// Idempotent: succeeds even when no record exists at `id`.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        store::delete_row(pool, id).await
    }
}
