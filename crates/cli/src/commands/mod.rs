//! CLI command implementations.

pub mod migrate;
pub mod send_ticket;
pub mod upload;
pub mod verify;
