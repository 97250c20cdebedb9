use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error, warn};

#[derive(Debug, ThisError)]
pub enum RecordsError {
    #[error("{0}")]
    Validation(String),

    #[error("No record found with id: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl RecordsError {
    pub fn validation(msg: impl Into<String>) -> Self {
        RecordsError::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordsError::Validation(_) => StatusCode::BAD_REQUEST,
            // Clients currently see a missing row the same way as a store failure.
            RecordsError::NotFound(_) | RecordsError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error bodies are plain text; the frontend shows them verbatim.
impl IntoResponse for RecordsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            RecordsError::Validation(msg) => debug!(reason = %msg, "rejected request"),
            RecordsError::NotFound(id) => warn!(id = %id, "record not found"),
            RecordsError::DatabaseError(e) => error!(error = %e, "store operation failed"),
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = RecordsError::validation("Name is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn not_found_keeps_internal_error_status() {
        let err = RecordsError::NotFound("7".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "No record found with id: 7");
    }

    #[test]
    fn database_error_maps_to_internal_error() {
        let err: RecordsError = SqlxError::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Database error:"));
    }
}
