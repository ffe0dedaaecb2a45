//! Send-ticket command.
//!
//! Intentionally a simulation: no mail provider is wired up yet, so this
//! waits a moment and reports success unconditionally. It exists so the
//! flow (verify, then hand over the ticket) can be exercised end to end.

use std::time::Duration;

/// Simulate delivering a ticket email to `name` at `email`.
pub async fn run(name: &str, email: &str) {
    tokio::time::sleep(Duration::from_millis(1500)).await;

    #[allow(clippy::print_stdout)]
    {
        println!("Ticket sent to {name} ({email})");
    }
}
