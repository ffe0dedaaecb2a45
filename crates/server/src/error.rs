//! Unified error handling for the API surface.
//!
//! Provides a unified `AppError` type mapping every failure in the data
//! path to its HTTP status and JSON body. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::store::{IngestError, LookupError};

/// Application-level error type for the Doorlist API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is not the expected shape (e.g. `attendees` missing or
    /// not an array). Rejected before the store is touched.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// One or more rows failed schema validation. Rows that parsed
    /// cleanly were still inserted.
    #[error("row validation failed")]
    Validation {
        /// One message per failed row.
        details: Vec<String>,
    },

    /// One or more rows conflicted on the unique email column.
    #[error("duplicate emails")]
    DuplicateEmail {
        /// One message per conflicting row.
        details: Vec<String>,
    },

    /// Path identifier is not well-formed; the store was never queried.
    #[error("malformed attendee id")]
    MalformedId,

    /// No record carries the requested identifier.
    #[error("attendee not found")]
    NotFound,

    /// Unclassified store failure.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::DuplicateEmail { conflicts } => {
                Self::DuplicateEmail { details: conflicts }
            }
            IngestError::Repository(e) => Self::Repository(e),
        }
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound => Self::NotFound,
            LookupError::Repository(e) => Self::Repository(e),
        }
    }
}

/// JSON error body: `{ "message": ..., "details": [...] }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) | Self::Validation { .. } | Self::MalformedId => {
                StatusCode::BAD_REQUEST
            }
            Self::DuplicateEmail { .. } => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Repository(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = self.status();
        let body = match self {
            Self::MalformedBody(message) => ErrorBody {
                message,
                details: None,
            },
            Self::Validation { details } => ErrorBody {
                message: "Data validation failed. Please check your file for correct data \
                          types (e.g., numbers in numeric columns)."
                    .to_owned(),
                details: Some(details),
            },
            Self::DuplicateEmail { details } => ErrorBody {
                message: "Some attendees could not be saved due to duplicate emails.".to_owned(),
                details: Some(details),
            },
            Self::MalformedId => ErrorBody {
                message: "Invalid attendee ID format.".to_owned(),
                details: None,
            },
            Self::NotFound => ErrorBody {
                message: "Attendee not found.".to_owned(),
                details: None,
            },
            // Don't expose internal error details to clients
            Self::Repository(_) => ErrorBody {
                message: "An error occurred on the server.".to_owned(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes_match_the_contract() {
        assert_eq!(
            get_status(AppError::MalformedBody("bad".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Validation { details: vec![] }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::DuplicateEmail { details: vec![] }),
            StatusCode::CONFLICT
        );
        assert_eq!(get_status(AppError::MalformedId), StatusCode::BAD_REQUEST);
        assert_eq!(get_status(AppError::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_malformed_id_and_not_found_are_distinct() {
        assert_ne!(
            get_status(AppError::MalformedId),
            get_status(AppError::NotFound)
        );
    }

    #[test]
    fn test_ingest_error_conversion() {
        let err: AppError = crate::store::IngestError::DuplicateEmail {
            conflicts: vec!["duplicate key: a@b.c".to_owned()],
        }
        .into();
        assert!(matches!(err, AppError::DuplicateEmail { ref details } if details.len() == 1));
    }
}
