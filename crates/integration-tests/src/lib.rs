//! Integration tests for Doorlist.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and apply migrations
//! cargo run -p doorlist-cli -- migrate
//!
//! # Start the server
//! cargo run -p doorlist-server
//!
//! # Run integration tests
//! cargo test -p doorlist-integration-tests -- --ignored
//! ```
//!
//! Every test targets a live server over HTTP; nothing here touches the
//! database directly. Emails are randomized per run so tests can be
//! repeated against the same database without tripping the uniqueness
//! constraint.

use uuid::Uuid;

/// Base URL for the Doorlist server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("DOORLIST_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A unique email address for this test run.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}

/// A well-formed attendee row keyed by the verbatim spreadsheet headers.
#[must_use]
pub fn attendee_row(name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "Name": name,
        "Year": 2026,
        "Amount paid": "100.00",
        "Balance need to pay": "0",
        "Email": email,
    })
}
