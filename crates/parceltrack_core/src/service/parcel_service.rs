//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for parcel lifecycle operations.
//! - Own caller conventions the repository leaves open (initial status,
//!   creation timestamp).
//!
//! # Invariants
//! - Parcels are registered with status `registered` and an RFC3339 UTC
//!   creation timestamp.
//! - Service APIs never bypass repository persistence contracts.

use crate::model::parcel::{NewParcel, Parcel, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoResult};
use chrono::{SecondsFormat, Utc};

/// Use-case service wrapper for parcel lifecycle operations.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` at `address`.
    ///
    /// # Contract
    /// - Initial status is `registered`.
    /// - `created_at` is the current UTC time in RFC3339.
    /// - Returns the store-generated parcel number.
    pub fn register_parcel(&self, client: i64, address: impl Into<String>) -> RepoResult<i64> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        self.repo
            .add(&NewParcel::registered(client, address, created_at))
    }

    /// Marks a parcel as handed over for delivery.
    pub fn mark_sent(&self, number: i64) -> RepoResult<()> {
        self.repo.set_status(number, ParcelStatus::Sent.as_str())
    }

    /// Marks a parcel as received by the client.
    pub fn mark_delivered(&self, number: i64) -> RepoResult<()> {
        self.repo
            .set_status(number, ParcelStatus::Delivered.as_str())
    }

    /// Updates the delivery address.
    ///
    /// Silently has no effect once the parcel has left `registered` status;
    /// callers needing confirmation should re-read the parcel.
    pub fn change_address(&self, number: i64, address: &str) -> RepoResult<()> {
        self.repo.set_address(number, address)
    }

    /// Gets one parcel by number.
    pub fn parcel(&self, number: i64) -> RepoResult<Parcel> {
        self.repo.get(number)
    }

    /// Lists every parcel belonging to a client.
    pub fn parcels_for_client(&self, client: i64) -> RepoResult<Vec<Parcel>> {
        self.repo.get_by_client(client)
    }

    /// Deletes a parcel by number.
    pub fn delete_parcel(&self, number: i64) -> RepoResult<()> {
        self.repo.delete(number)
    }
}
