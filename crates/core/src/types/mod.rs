//! Core types for Doorlist.
//!
//! This module provides type-safe wrappers for the attendee data path.

pub mod attendee;
pub mod columns;
pub mod email;
pub mod id;

pub use attendee::{Attendee, NewAttendee, VerifiedAttendee};
pub use columns::REQUIRED_COLUMNS;
pub use email::{Email, EmailError};
pub use id::{AttendeeId, AttendeeIdError};
