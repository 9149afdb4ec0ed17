//! Domain model for parcel tracking.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every persisted parcel is identified by a store-generated `number`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod parcel;
