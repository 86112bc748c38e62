//! Entity identifiers: the capability contract and its UUID-backed value.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Capability contract for entity identifiers.
///
/// An identifier is an immutable value: `Eq` compares underlying values and
/// `Display` renders the canonical textual form. Identifiers of different
/// entity kinds should be distinct types (wrap [`UuidId`] in a newtype per
/// kind); a `UserId` and a `ProductId` sharing the same underlying value then
/// never compare equal, because no `==` exists between the two types.
pub trait EntityId:
    Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display + Send + Sync
{
    /// Canonical string form of the identifier.
    fn value(&self) -> String {
        self.to_string()
    }
}

/// UUID-backed identifier value.
///
/// Domain modules wrap this in their own newtypes so each entity kind keeps
/// its own identifier type:
///
/// ```ignore
/// #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// #[serde(transparent)]
/// pub struct UserId(pub UuidId);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UuidId(Uuid);

impl UuidId {
    /// Create a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Produce a fresh underlying UUID without constructing an identifier.
    ///
    /// For callers that need the raw value before instantiation, e.g. to hand
    /// the same value to several constructors.
    pub fn generate() -> Uuid {
        Uuid::now_v7()
    }

    /// Parse an identifier from its canonical textual form.
    ///
    /// Fails with [`DomainError::InvalidFormat`] when the input is not a
    /// well-formed UUID.
    pub fn parse(s: &str) -> DomainResult<Self> {
        s.parse()
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UuidId {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityId for UuidId {}

impl core::fmt::Display for UuidId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UuidId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UuidId> for Uuid {
    fn from(value: UuidId) -> Self {
        value.0
    }
}

impl FromStr for UuidId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_format(format!("UuidId: {e}")))?;
        Ok(Self(uuid))
    }
}
