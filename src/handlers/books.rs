//! Book CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{BookModel, BookPatch, NewBook};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// A non-numeric or out-of-range id matches no record, so it reads as not found
/// rather than a malformed request.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}

#[derive(Debug, Deserialize)]
pub struct CreateBook {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
}

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let books = BookModel::list_all(&state.pool).await?;
    Ok(Json(books))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let book = BookModel::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(book))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateBook>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let title = body.title.filter(|t| !t.is_empty()).ok_or(AppError::MissingFields)?;
    let author = body
        .author
        .filter(|a| !a.is_empty())
        .ok_or(AppError::MissingFields)?;
    let book = BookModel::create(
        &state.pool,
        NewBook {
            title,
            author,
            year: body.year,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    // A supplied-but-empty title or author would break the non-empty invariant.
    if patch.title.as_deref() == Some("") || patch.author.as_deref() == Some("") {
        return Err(AppError::MissingFields);
    }
    let book = BookModel::update(&state.pool, id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(book))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    BookModel::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    BookModel::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
