//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical parcel record persisted by the repository.
//! - Provide the known status constants and their string conversions.
//!
//! # Invariants
//! - `number` is assigned exactly once, by the store at insert time.
//! - `status` is persisted and read back verbatim; the enum only names
//!   the values callers are expected to use.
//! - `address` may change only while `status == "registered"`.

use serde::{Deserialize, Serialize};

/// Known lifecycle states for a parcel.
///
/// The storage layer does not validate against this enumeration; it exists
/// so callers have one canonical spelling of each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Accepted into the system; address is still editable.
    Registered,
    /// Handed over for delivery.
    Sent,
    /// Received by the client.
    Delivered,
}

impl ParcelStatus {
    /// Returns the persisted string form of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Parses a persisted status string into a known state, if any.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(Self::Registered),
            "sent" => Some(Self::Sent),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }
}

/// Canonical persisted parcel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Store-generated primary identifier, immutable after insert.
    pub number: i64,
    /// External client identifier, set at creation.
    pub client: i64,
    /// Status string; normally one of [`ParcelStatus`], kept verbatim.
    pub status: String,
    /// Delivery address; mutable only in `registered` status.
    pub address: String,
    /// RFC3339 creation timestamp, immutable.
    pub created_at: String,
}

impl Parcel {
    /// Returns whether the parcel is still in the editable `registered` state.
    pub fn is_registered(&self) -> bool {
        self.status == ParcelStatus::Registered.as_str()
    }
}

/// Input record for creating a parcel; the store assigns `number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParcel {
    pub client: i64,
    pub status: String,
    pub address: String,
    pub created_at: String,
}

impl NewParcel {
    /// Builds a creation record in the conventional initial state.
    pub fn registered(
        client: i64,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            client,
            status: ParcelStatus::Registered.as_str().to_string(),
            address: address.into(),
            created_at: created_at.into(),
        }
    }
}
