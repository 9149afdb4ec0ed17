//! Parcel repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `parcel` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `add` either persists a row and returns its store-generated number,
//!   or returns an error; it never reports success with number 0.
//! - Predicate-mismatch updates (`set_address` outside `registered`) and
//!   deletes of unknown numbers are zero-row no-ops, not errors.
//! - `get` is the only operation that reports not-found.

use crate::db::DbError;
use crate::model::parcel::{NewParcel, Parcel, ParcelStatus};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for parcel persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(i64),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for parcel CRUD operations.
pub trait ParcelRepository {
    /// Inserts a new parcel and returns its store-generated number.
    fn add(&self, parcel: &NewParcel) -> RepoResult<i64>;
    /// Returns the parcel with the given number, or `NotFound`.
    fn get(&self, number: i64) -> RepoResult<Parcel>;
    /// Returns every parcel belonging to `client`; empty when none match.
    fn get_by_client(&self, client: i64) -> RepoResult<Vec<Parcel>>;
    /// Overwrites the status unconditionally; unknown numbers are a no-op.
    fn set_status(&self, number: i64, status: &str) -> RepoResult<()>;
    /// Overwrites the address while status is `registered`; otherwise a no-op.
    fn set_address(&self, number: i64, address: &str) -> RepoResult<()>;
    /// Removes the parcel row; unknown numbers are a no-op.
    fn delete(&self, number: i64) -> RepoResult<()>;
}

/// SQLite-backed parcel repository.
pub struct SqliteParcelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ParcelRepository for SqliteParcelRepository<'_> {
    fn add(&self, parcel: &NewParcel) -> RepoResult<i64> {
        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address.as_str(),
                parcel.created_at.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, number: i64) -> RepoResult<Parcel> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE number = ?1;"))?;

        stmt.query_row(params![number], parse_parcel_row)
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => RepoError::NotFound(number),
                other => other.into(),
            })
    }

    fn get_by_client(&self, client: i64) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE client = ?1;"))?;

        let mut rows = stmt.query(params![client])?;
        let mut parcels = Vec::new();
        while let Some(row) = rows.next()? {
            parcels.push(parse_parcel_row(row)?);
        }

        Ok(parcels)
    }

    fn set_status(&self, number: i64, status: &str) -> RepoResult<()> {
        // Unconditional by observed domain behavior; zero affected rows is
        // a valid outcome for unknown numbers.
        self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2;",
            params![status, number],
        )?;

        Ok(())
    }

    fn set_address(&self, number: i64, address: &str) -> RepoResult<()> {
        // The status predicate enforces address immutability after
        // registration at the query level; a mismatch affects zero rows.
        self.conn.execute(
            "UPDATE parcel SET address = ?1 WHERE number = ?2 AND status = ?3;",
            params![address, number, ParcelStatus::Registered.as_str()],
        )?;

        Ok(())
    }

    fn delete(&self, number: i64) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM parcel WHERE number = ?1;", params![number])?;

        Ok(())
    }
}

fn parse_parcel_row(row: &Row<'_>) -> rusqlite::Result<Parcel> {
    Ok(Parcel {
        number: row.get("number")?,
        client: row.get("client")?,
        status: row.get("status")?,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    })
}
