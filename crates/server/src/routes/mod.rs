//! HTTP route handlers for the Doorlist API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (pings the store)
//!
//! # Attendees
//! POST /api/attendees/upload       - Bulk-ingest spreadsheet rows
//! GET  /api/attendees/verify/{id}  - Door-scan verification by identifier
//! ```

pub mod attendees;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the attendee API router.
pub fn attendee_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(attendees::upload))
        .route("/verify/{id}", get(attendees::verify))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api/attendees", attendee_routes())
}
