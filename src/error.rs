//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Livre non trouvé")]
    NotFound,
    #[error("Titre et auteur requis")]
    MissingFields,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Wire shape for every error response: `{"message": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Livre non trouvé"),
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "Titre et auteur requis"),
            AppError::Db(e) => {
                // The underlying error is logged, never sent to the caller.
                tracing::error!(error = %e, "database failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erreur interne du serveur")
            }
        };
        let body = ErrorBody {
            message: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
