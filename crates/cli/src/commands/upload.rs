//! Upload command: spreadsheet → ingestion endpoint → tickets.
//!
//! Drives the upload panel's state machine end to end: parse the workbook
//! (all client-side checks happen before any network call), post the rows,
//! then print the inserted records with their ticket QR payloads.

use std::path::Path;

use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::session::{Session, ticket_payload};
use crate::spreadsheet::{self, SpreadsheetError};

/// Errors from the upload flow; all terminal, the organizer re-uploads.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Spreadsheet(#[from] SpreadsheetError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Parse `file` and upload its rows to the server at `api_url`.
///
/// # Errors
///
/// Returns [`UploadError`] if parsing fails (wrong extension, empty sheet,
/// missing columns), the request times out, or the server rejects the
/// batch (duplicates, validation, server error).
pub async fn run(file: &Path, api_url: &str) -> Result<(), UploadError> {
    let mut session = Session::new();
    session.begin_parsing();

    let rows = match spreadsheet::read_attendee_rows(file) {
        Ok(rows) => rows,
        Err(e) => {
            session.fail_upload(e.to_string());
            return Err(e.into());
        }
    };
    tracing::info!(count = rows.len(), file = %file.display(), "spreadsheet parsed");

    let client = ApiClient::new(api_url)?;
    let response = match client.upload_attendees(&rows).await {
        Ok(response) => response,
        Err(e) => {
            if let ApiError::Rejected {
                status, details, ..
            } = &e
            {
                tracing::warn!(%status, "upload rejected");
                for detail in details {
                    tracing::warn!(%detail, "row rejected");
                }
            }
            session.fail_upload(e.to_string());
            return Err(e.into());
        }
    };

    session.complete_upload(response.data);

    #[allow(clippy::print_stdout)]
    {
        println!("{}", response.message);
        println!();
        for attendee in session.attendees() {
            println!(
                "  {}  <{}>  paid {}  balance {}",
                attendee.name, attendee.email, attendee.amount_paid, attendee.balance_due
            );
            println!("    ticket QR payload: {}", ticket_payload(attendee));
        }
    }

    Ok(())
}
