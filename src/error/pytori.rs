use axum::{Json, http::StatusCode, response::IntoResponse};
use pytori_schema::ErrorBody;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum PytoriError {
    #[error("Repository {0} not found")]
    RepositoryNotFound(i64),

    #[error("Invalid repository_id: {0:?}")]
    InvalidRepositoryId(String),

    /// A stored row violates the record contract (e.g. merged without a timestamp).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl PytoriError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PytoriError::RepositoryNotFound(_) => StatusCode::NOT_FOUND,
            PytoriError::InvalidRepositoryId(_) => StatusCode::BAD_REQUEST,
            PytoriError::InvalidRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PytoriError::StoreUnavailable(_)
            | PytoriError::RactorError(_)
            | PytoriError::DatabaseError(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            PytoriError::RepositoryNotFound(_) => "Repository not found",
            PytoriError::InvalidRepositoryId(_) => "Invalid repository_id",
            PytoriError::InvalidRecord(_) => "Failed to get summary",
            PytoriError::StoreUnavailable(_)
            | PytoriError::RactorError(_)
            | PytoriError::DatabaseError(_) => "Record store unavailable",
        }
    }
}

impl IntoResponse for PytoriError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            // Internal detail stays in the log; the body only carries the public message.
            error!(error = %self, status = status.as_u16(), "Summary request failed");
        }
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
