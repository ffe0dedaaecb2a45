//! Store-assigned attendee identifier.
//!
//! The identifier is the entire payload of a ticket's QR code, so its
//! syntax is part of the verification contract: anything that does not
//! parse as a UUID is rejected before the store is consulted.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when an identifier string is not well-formed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid attendee id: {0}")]
pub struct AttendeeIdError(String);

/// Identifier assigned by the store when an attendee record is inserted.
///
/// Wraps a UUID so ticket payloads and lookup keys cannot be confused with
/// arbitrary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendeeId(Uuid);

impl AttendeeId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    ///
    /// Production identifiers are assigned by the store; this exists for
    /// tests and in-memory backends.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`AttendeeIdError`] if the input is not a well-formed UUID.
    pub fn parse(s: &str) -> Result<Self, AttendeeIdError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| AttendeeIdError(e.to_string()))
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AttendeeId {
    type Err = AttendeeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for AttendeeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AttendeeId> for Uuid {
    fn from(id: AttendeeId) -> Self {
        id.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for AttendeeId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Uuid as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Uuid as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for AttendeeId {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let id = <Uuid as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(id))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for AttendeeId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Uuid as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
