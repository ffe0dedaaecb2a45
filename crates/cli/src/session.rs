//! Dashboard session state.
//!
//! Two small state machines, one per panel, exactly as the dashboard
//! presents them: upload runs idle → parsing → (error | uploaded); scanning
//! runs idle → scanning → (verified | verify-error). They share no lock —
//! the panels are merely separate — and the attendee list lives in memory
//! only, for the lifetime of the session.

use doorlist_core::{Attendee, VerifiedAttendee};

/// Upload panel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Parsing,
    /// Terminal for this attempt; the user must re-upload.
    Error(String),
    Uploaded,
}

/// Scan panel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Verified(VerifiedAttendee),
    /// Terminal for this attempt; the user must re-scan.
    VerifyError(String),
}

/// In-memory session for one dashboard run. No persistence of any kind.
#[derive(Debug)]
pub struct Session {
    upload: UploadPhase,
    attendees: Vec<Attendee>,
    scan: ScanPhase,
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            upload: UploadPhase::Idle,
            attendees: Vec::new(),
            scan: ScanPhase::Idle,
        }
    }

    pub const fn upload_phase(&self) -> &UploadPhase {
        &self.upload
    }

    pub const fn scan_phase(&self) -> &ScanPhase {
        &self.scan
    }

    /// The attendee list from the most recent successful upload. This is
    /// what was just inserted, never re-fetched from the store.
    #[must_use]
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn begin_parsing(&mut self) {
        self.upload = UploadPhase::Parsing;
    }

    /// A failed upload keeps whatever list the session already had.
    pub fn fail_upload(&mut self, message: impl Into<String>) {
        self.upload = UploadPhase::Error(message.into());
    }

    /// A successful upload replaces the list wholesale; nothing is merged.
    pub fn complete_upload(&mut self, attendees: Vec<Attendee>) {
        self.attendees = attendees;
        self.upload = UploadPhase::Uploaded;
    }

    pub fn begin_scan(&mut self) {
        self.scan = ScanPhase::Scanning;
    }

    pub fn complete_scan(&mut self, verified: VerifiedAttendee) {
        self.scan = ScanPhase::Verified(verified);
    }

    pub fn fail_scan(&mut self, message: impl Into<String>) {
        self.scan = ScanPhase::VerifyError(message.into());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// The QR payload for an attendee's ticket: exactly the store-assigned
/// identifier, nothing else. No signature, no expiry, no tamper protection.
#[must_use]
pub fn ticket_payload(attendee: &Attendee) -> String {
    attendee.id.to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use doorlist_core::{AttendeeId, Email};
    use rust_decimal::Decimal;

    use super::*;

    fn attendee(name: &str, email: &str) -> Attendee {
        Attendee {
            id: AttendeeId::random(),
            name: name.to_owned(),
            year: 2026,
            amount_paid: Decimal::new(10_000, 2),
            balance_due: Decimal::ZERO,
            description: None,
            gender: None,
            count: None,
            email: Email::parse(email).unwrap(),
        }
    }

    #[test]
    fn test_upload_happy_path() {
        let mut session = Session::new();
        assert_eq!(*session.upload_phase(), UploadPhase::Idle);

        session.begin_parsing();
        assert_eq!(*session.upload_phase(), UploadPhase::Parsing);

        session.complete_upload(vec![attendee("Ada", "ada@example.com")]);
        assert_eq!(*session.upload_phase(), UploadPhase::Uploaded);
        assert_eq!(session.attendees().len(), 1);
    }

    #[test]
    fn test_failed_upload_keeps_previous_list() {
        let mut session = Session::new();
        session.begin_parsing();
        session.complete_upload(vec![attendee("Ada", "ada@example.com")]);

        session.begin_parsing();
        session.fail_upload("Missing required columns: Email");

        assert!(matches!(*session.upload_phase(), UploadPhase::Error(_)));
        // The earlier list is still there; failure does not clear it.
        assert_eq!(session.attendees().len(), 1);
    }

    #[test]
    fn test_successful_upload_replaces_list_wholesale() {
        let mut session = Session::new();
        session.complete_upload(vec![
            attendee("Ada", "ada@example.com"),
            attendee("Grace", "grace@example.com"),
        ]);
        session.complete_upload(vec![attendee("Edsger", "edsger@example.com")]);

        assert_eq!(session.attendees().len(), 1);
        assert_eq!(session.attendees()[0].name, "Edsger");
    }

    #[test]
    fn test_scan_phases_are_independent_of_upload() {
        let mut session = Session::new();
        session.begin_scan();
        assert_eq!(*session.scan_phase(), ScanPhase::Scanning);
        assert_eq!(*session.upload_phase(), UploadPhase::Idle);

        session.fail_scan("Attendee not found.");
        assert!(matches!(*session.scan_phase(), ScanPhase::VerifyError(_)));
    }

    #[test]
    fn test_ticket_payload_is_exactly_the_identifier() {
        let a = attendee("Ada", "ada@example.com");
        assert_eq!(ticket_payload(&a), a.id.to_string());
    }
}
