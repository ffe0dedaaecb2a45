//! Attendee record types.
//!
//! Field names are serialized exactly as the spreadsheet headers appear,
//! embedded spaces included, so a row parsed from a workbook and a record
//! returned by the server share one shape end to end.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::AttendeeId;

/// A persisted attendee record, identifier included.
///
/// Created only by bulk ingestion; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Attendee {
    /// Store-assigned identifier; the entire QR ticket payload.
    pub id: AttendeeId,
    #[serde(rename = "Name")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Name"))]
    pub name: String,
    #[serde(rename = "Year")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Year"))]
    pub year: i32,
    #[serde(rename = "Amount paid")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Amount paid"))]
    pub amount_paid: Decimal,
    #[serde(rename = "Balance need to pay")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Balance need to pay"))]
    pub balance_due: Decimal,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Description"))]
    pub description: Option<String>,
    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Gender"))]
    pub gender: Option<String>,
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Count"))]
    pub count: Option<i32>,
    #[serde(rename = "Email")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Email"))]
    pub email: Email,
}

/// An attendee row as submitted for ingestion (no identifier yet).
///
/// Unknown extra keys on the incoming row are ignored; a wrong type in any
/// known column is a per-row validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendee {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Amount paid")]
    pub amount_paid: Decimal,
    #[serde(rename = "Balance need to pay")]
    pub balance_due: Decimal,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Gender", default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "Email")]
    pub email: Email,
}

/// The door-scanner projection of an attendee record.
///
/// Exactly four fields; the identifier and everything else are withheld
/// because this response is shown at the door, nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedAttendee {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Amount paid")]
    pub amount_paid: Decimal,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Balance need to pay")]
    pub balance_due: Decimal,
}

impl From<Attendee> for VerifiedAttendee {
    fn from(a: Attendee) -> Self {
        Self {
            name: a.name,
            amount_paid: a.amount_paid,
            year: a.year,
            balance_due: a.balance_due,
        }
    }
}
