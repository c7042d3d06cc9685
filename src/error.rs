use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::{color::ImageDecodeError, recommendation::RecommendError};

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid image data: {0}")]
    InvalidImage(#[from] ImageDecodeError),

    #[error(transparent)]
    InsufficientWardrobe(#[from] RecommendError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidImage(_)
            | AppError::InsufficientWardrobe(_)
            | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let err = AppError::from(RecommendError::InsufficientWardrobe {
            missing: vec![Category::Shoes],
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = AppError::InvalidInput("warmth must be between 1 and 5".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_and_internal() {
        let err = AppError::NotFound("item".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::Internal("item analysis task failed".to_string());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_insufficient_wardrobe_message() {
        let err = AppError::from(RecommendError::InsufficientWardrobe {
            missing: vec![Category::Bottom],
        });
        assert_eq!(
            err.to_string(),
            "Not enough items to generate outfit: no eligible bottom"
        );
    }
}
