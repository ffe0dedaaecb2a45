//! Verify command: door-scan lookup by ticket QR payload.

use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::session::{ScanPhase, Session};

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Look up the attendee behind a scanned identifier and print the four
/// fields the door staff see. The raw payload is sent as-is; the server
/// decides whether it is well formed.
///
/// # Errors
///
/// Returns [`VerifyError`] on timeout, transport failure, malformed
/// identifier, or unknown identifier.
pub async fn run(id: &str, api_url: &str) -> Result<(), VerifyError> {
    let mut session = Session::new();
    session.begin_scan();

    let client = ApiClient::new(api_url)?;
    match client.verify(id).await {
        Ok(verified) => {
            session.complete_scan(verified);
        }
        Err(e) => {
            session.fail_scan(e.to_string());
            return Err(e.into());
        }
    }

    if let ScanPhase::Verified(v) = session.scan_phase() {
        #[allow(clippy::print_stdout)]
        {
            println!("Attendee verified");
            println!("  Name:                {}", v.name);
            println!("  Year:                {}", v.year);
            println!("  Amount paid:         {}", v.amount_paid);
            println!("  Balance need to pay: {}", v.balance_due);
        }
    }

    Ok(())
}
