use axum::http::StatusCode;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Io(#[from] tokio::io::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),

    #[error(transparent)]
    RedisError(#[from] redis::RedisError),

    #[error(transparent)]
    DbPool(#[from] diesel_async::pooled_connection::deadpool::PoolError),

    #[error("Cache is not configured")]
    CacheDisabled,
}

impl ApiError {
    /// HTTP status the error should be reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::Diesel(DieselError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Diesel(DieselError::DatabaseError(kind, _)) => match kind {
                DatabaseErrorKind::ForeignKeyViolation => StatusCode::BAD_REQUEST,
                DatabaseErrorKind::UniqueViolation => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to a client. Internal failures are replaced by `fallback`.
    pub fn public_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Diesel(DieselError::NotFound) => "Record not found".to_string(),
            ApiError::Diesel(DieselError::DatabaseError(kind, _)) => match kind {
                DatabaseErrorKind::ForeignKeyViolation => {
                    ErrorMessages::MissingReference.to_string()
                }
                DatabaseErrorKind::UniqueViolation => ErrorMessages::Duplicate.to_string(),
                _ => fallback.to_string(),
            },
            _ => fallback.to_string(),
        }
    }
}

/// Error messages for the API Responses
pub enum ErrorMessages {
    DB,
    InvalidCredentials,
    MissingReference,
    Duplicate,
}

// Use the ErrorMessages enum to display error messages for the API Responses
impl fmt::Display for ErrorMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorMessages::DB => "Database connection failed",
            ErrorMessages::InvalidCredentials => "Invalid username or password",
            ErrorMessages::MissingReference => "A referenced record does not exist",
            ErrorMessages::Duplicate => "A record with the same unique value already exists",
        };
        write!(f, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Course not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Diesel(DieselError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Io(std::io::Error::other("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::CacheDisabled.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_internals() {
        let err = ApiError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        assert_eq!(err.public_message("Failed to fetch jobs"), "Failed to fetch jobs");

        let err = ApiError::NotFound("Job not found".into());
        assert_eq!(err.public_message("Failed to fetch job"), "Job not found");
    }
}
