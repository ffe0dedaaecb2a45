//! HTTP client for the Doorlist API.
//!
//! Every request carries a fixed 30-second timeout; on expiry the local
//! wait is abandoned with a generic timeout message (the server is not
//! asked to stop working). Nothing is retried.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use doorlist_core::{Attendee, VerifiedAttendee};

use crate::spreadsheet::Row;

/// Fixed request timeout for every API call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors surfaced to the organizer from an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store did not respond within [`REQUEST_TIMEOUT`].
    #[error("Error: The request timed out. The server might be busy or down.")]
    Timeout,

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("Error: {0}")]
    Transport(reqwest::Error),

    /// The server rejected the request; its message is surfaced verbatim.
    #[error("{message}")]
    Rejected {
        status: StatusCode,
        message: String,
        details: Vec<String>,
    },
}

impl ApiError {
    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(e)
        }
    }
}

/// Server error body: `{ "message": ..., "details": [...] }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    details: Vec<String>,
}

/// Successful upload response.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub data: Vec<Attendee>,
}

/// Client for the ingestion and verification endpoints.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the underlying client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Upload a batch of spreadsheet rows to the ingestion endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on timeout, transport failure, or any
    /// non-success status (duplicate emails, validation, server error).
    pub async fn upload_attendees(&self, rows: &[Row]) -> Result<UploadResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/attendees/upload", self.base_url))
            .json(&serde_json::json!({ "attendees": rows }))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        Self::parse(response).await
    }

    /// Verify one attendee by the identifier decoded from a ticket QR code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on timeout, transport failure, malformed
    /// identifier (400), unknown identifier (404), or server error.
    pub async fn verify(&self, id: &str) -> Result<VerifiedAttendee, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/attendees/verify/{id}", self.base_url))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ApiError::from_reqwest);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or(ErrorBody {
            message: format!("Server responded with status {status}"),
            details: Vec::new(),
        });
        Err(ApiError::Rejected {
            status,
            message: body.message,
            details: body.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_thirty_seconds() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(30));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/").expect("client");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_rejected_error_carries_status_and_message() {
        let err = ApiError::Rejected {
            status: StatusCode::CONFLICT,
            message: "Some attendees could not be saved due to duplicate emails.".to_owned(),
            details: vec!["duplicate key: ada@example.com".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "Some attendees could not be saved due to duplicate emails."
        );
        let ApiError::Rejected { status, .. } = err else {
            panic!("expected Rejected");
        };
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
