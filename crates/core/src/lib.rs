//! Doorlist Core - Shared types library.
//!
//! This crate provides common types used across all Doorlist components:
//! - `server` - Ingestion and verification HTTP API
//! - `cli` - Organizer tooling (spreadsheet upload, door-scan verification)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. The `postgres` feature adds sqlx trait impls so the server can
//! bind and decode these types directly.
//!
//! # Modules
//!
//! - [`types`] - Attendee records, the type-safe attendee identifier, the
//!   email newtype, and the canonical spreadsheet column names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
