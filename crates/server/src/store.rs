//! Storage interface for attendee records.
//!
//! The two endpoints are thin pass-throughs to these two operations, so the
//! whole storage backend sits behind one trait: handlers hold an
//! `Arc<dyn AttendeeStore>` owned by [`crate::state::AppState`] rather than
//! reaching for an ambient connection global. The production implementation
//! is [`crate::db::attendees::PgAttendeeStore`].

use async_trait::async_trait;
use doorlist_core::{Attendee, AttendeeId, NewAttendee};
use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from bulk ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// One or more rows conflicted on the unique email column. Rows that
    /// did not conflict are already persisted (per-row independence).
    #[error("duplicate emails: {}", conflicts.join(", "))]
    DuplicateEmail {
        /// One message per conflicting row.
        conflicts: Vec<String>,
    },

    /// Unclassified store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors from point lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No record carries the given identifier.
    #[error("attendee not found")]
    NotFound,

    /// Unclassified store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Storage backend for attendee records.
///
/// Implementations must insert batch rows independently: a row rejected by
/// the uniqueness constraint must not block the insertion of the others.
#[async_trait]
pub trait AttendeeStore: Send + Sync {
    /// Insert a batch of rows in a single non-ordered bulk operation.
    ///
    /// On full success returns the inserted records, each carrying its
    /// store-assigned identifier, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::DuplicateEmail`] if any row conflicted on
    /// email (the remaining rows stay inserted), or
    /// [`IngestError::Repository`] for other store failures.
    async fn insert_batch(&self, rows: Vec<NewAttendee>) -> Result<Vec<Attendee>, IngestError>;

    /// Look up exactly one record by its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no record matches, or
    /// [`LookupError::Repository`] for other store failures.
    async fn find_by_id(&self, id: AttendeeId) -> Result<Attendee, LookupError>;

    /// Cheap connectivity check used by the readiness probe.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend is unreachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory store used by handler tests.

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{AttendeeStore, IngestError, LookupError, RepositoryError, async_trait};
    use doorlist_core::{Attendee, AttendeeId, NewAttendee};

    /// Vec-backed [`AttendeeStore`] with the same per-row conflict
    /// semantics as the Postgres implementation.
    #[derive(Default)]
    pub struct MemoryAttendeeStore {
        records: Mutex<Vec<Attendee>>,
        /// Number of `find_by_id` calls; lets tests assert that malformed
        /// identifiers never reach the store.
        pub lookups: AtomicUsize,
    }

    impl MemoryAttendeeStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lookup_count(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AttendeeStore for MemoryAttendeeStore {
        async fn insert_batch(
            &self,
            rows: Vec<NewAttendee>,
        ) -> Result<Vec<Attendee>, IngestError> {
            let mut records = self.records.lock().expect("poisoned");
            let mut inserted = Vec::new();
            let mut conflicts = Vec::new();

            for row in rows {
                let taken = records.iter().any(|r| r.email == row.email)
                    || inserted.iter().any(|r: &Attendee| r.email == row.email);
                if taken {
                    conflicts.push(format!("duplicate key: {}", row.email));
                    continue;
                }
                inserted.push(Attendee {
                    id: AttendeeId::random(),
                    name: row.name,
                    year: row.year,
                    amount_paid: row.amount_paid,
                    balance_due: row.balance_due,
                    description: row.description,
                    gender: row.gender,
                    count: row.count,
                    email: row.email,
                });
            }

            records.extend(inserted.iter().cloned());
            if conflicts.is_empty() {
                Ok(inserted)
            } else {
                Err(IngestError::DuplicateEmail { conflicts })
            }
        }

        async fn find_by_id(&self, id: AttendeeId) -> Result<Attendee, LookupError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            let records = self.records.lock().expect("poisoned");
            records
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(LookupError::NotFound)
        }

        async fn ping(&self) -> Result<(), RepositoryError> {
            Ok(())
        }
    }
}
