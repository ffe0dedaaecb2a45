//! Attendee ingestion and verification route handlers.
//!
//! Both endpoints are thin pass-throughs: upload forwards a row batch to
//! the store's bulk insert, verify forwards an identifier to the store's
//! point lookup. All shaping happens at the edges (body shape check,
//! per-row validation, identifier syntax, response projection).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use doorlist_core::{Attendee, AttendeeId, NewAttendee, VerifiedAttendee};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::store::IngestError;

/// Successful upload response: count message plus the inserted records,
/// each carrying its store-assigned identifier.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub data: Vec<Attendee>,
}

/// Bulk-ingest a batch of spreadsheet rows.
///
/// The body must be `{ "attendees": [...] }`. Rows are validated
/// individually, so a type error in one row reports that row rather than a
/// generic deserialization failure. Per-row independence covers validation
/// too: rows that parse cleanly are inserted even when siblings fail.
///
/// # Errors
///
/// - 400 if the body is not an object with an `attendees` array
/// - 400 if any row fails schema validation (per-row details; the rows
///   that parsed cleanly stay inserted)
/// - 409 if any row conflicts on email (non-conflicting rows stay inserted)
/// - 500 for unclassified store failures
#[instrument(skip(state, body))]
pub async fn upload(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    let rows = body
        .get("attendees")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::MalformedBody(
                "Invalid data format. \"attendees\" array is required.".to_owned(),
            )
        })?;

    let mut parsed = Vec::with_capacity(rows.len());
    let mut failures = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        match serde_json::from_value::<NewAttendee>(row.clone()) {
            Ok(attendee) => parsed.push(attendee),
            Err(e) => failures.push(format!("row {}: {e}", idx + 1)),
        }
    }
    if !failures.is_empty() {
        // The rows that parsed cleanly are still inserted; one bad row
        // must not block the others.
        if !parsed.is_empty() {
            match state.store().insert_batch(parsed).await {
                Ok(inserted) => {
                    tracing::info!(count = inserted.len(), "partial batch inserted");
                }
                Err(IngestError::DuplicateEmail { conflicts }) => {
                    tracing::warn!(count = conflicts.len(), "conflicts in partial batch");
                }
                Err(IngestError::Repository(e)) => return Err(e.into()),
            }
        }
        return Err(AppError::Validation { details: failures });
    }

    tracing::info!(count = parsed.len(), "inserting attendee batch");
    let inserted = state.store().insert_batch(parsed).await?;
    tracing::info!(count = inserted.len(), "attendee batch inserted");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: format!("{} attendees saved successfully.", inserted.len()),
            data: inserted,
        }),
    ))
}

/// Verify one attendee by the identifier scanned from a ticket QR code.
///
/// A malformed identifier is rejected before the store is consulted and is
/// a distinct condition from a well-formed identifier that matches nothing.
/// The response projects exactly four fields for the door-scanner display.
///
/// # Errors
///
/// - 400 if `id` is not a well-formed identifier
/// - 404 if no record carries `id`
/// - 500 for unclassified store failures
#[instrument(skip(state))]
pub async fn verify(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VerifiedAttendee>> {
    let id = AttendeeId::parse(&id).map_err(|_| AppError::MalformedId)?;

    let attendee = state.store().find_by_id(id).await?;
    Ok(Json(attendee.into()))
}
