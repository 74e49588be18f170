use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// MongoDB server code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error)]
pub enum MedicineError {
    /// Unknown or malformed record id
    #[error("Medicine not found: {0}")]
    NotFound(String),

    #[error("Sequence number {0} is already taken")]
    DuplicateSequenceNumber(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type MedicineResult<T> = Result<T, MedicineError>;

impl From<MedicineError> for AppError {
    fn from(err: MedicineError) -> Self {
        match err {
            MedicineError::NotFound(_) => AppError::NotFound("Medicine not found".to_string()),
            MedicineError::DuplicateSequenceNumber(sno) => AppError::Conflict(format!(
                "Sequence number {} was taken by a concurrent insert, retry the request",
                sno
            )),
            MedicineError::Validation(msg) => AppError::BadRequest(msg),
            MedicineError::Database(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for MedicineError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for MedicineError {
    fn from(err: mongodb::error::Error) -> Self {
        MedicineError::Database(err.to_string())
    }
}

/// True when `err` is a unique index violation
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE
    )
}
