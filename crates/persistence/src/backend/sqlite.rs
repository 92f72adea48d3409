// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! Everything here either has no Diesel DSL equivalent or only makes sense
//! against `SQLite`:
//! - Connection initialization and migrations
//! - PRAGMA configuration (foreign keys, WAL)
//! - Startup checks on the schema the store relies on
//! - `last_insert_rowid()` after inserts
//!
//! Appointment, directory, and catalog queries stay in `queries/` and
//! `mutations/`.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema for principals, vehicles, the service catalog, and appointments.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Columns that make up one booking slot per customer.
const APPOINTMENT_SLOT_COLUMNS: [&str; 2] = ["customer_id", "scheduled_at"];

/// Row returned by `PRAGMA foreign_keys`.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Row returned by `pragma_index_list`.
#[derive(QueryableByName)]
struct IndexListRow {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Integer)]
    unique: i32,
}

/// Row returned by `pragma_index_info`.
#[derive(QueryableByName)]
struct IndexColumnRow {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Returns the rowid assigned by the most recent insert on `conn`.
///
/// Appointment and directory inserts read their new id back through this.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Verifies that foreign key enforcement is enabled.
///
/// Vehicles reference their owner and appointments reference customers,
/// vehicles, employees, and catalog items. Without enforcement a dangling
/// reference could be written.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // Diesel has no PRAGMA DSL.
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Verifies that `appointments` carries a unique index on exactly
/// `(customer_id, scheduled_at)`.
///
/// Booking and rescheduling check for a taken slot before writing; this
/// index rejects the write when two requests race past that check.
///
/// # Errors
///
/// Returns `PersistenceError::MissingConstraint` if no such index exists,
/// or a query error if the catalog cannot be read.
pub fn verify_appointment_slot_constraint(
    conn: &mut SqliteConnection,
) -> Result<(), PersistenceError> {
    let indexes: Vec<IndexListRow> =
        diesel::sql_query("SELECT name, \"unique\" FROM pragma_index_list('appointments')")
            .load(conn)?;

    for index in indexes.iter().filter(|index| index.unique != 0) {
        let columns: Vec<IndexColumnRow> =
            diesel::sql_query("SELECT name FROM pragma_index_info(?) ORDER BY seqno")
                .bind::<Text, _>(index.name.clone())
                .load(conn)?;
        let names: Vec<&str> = columns.iter().map(|column| column.name.as_str()).collect();

        if names == APPOINTMENT_SLOT_COLUMNS {
            debug!(index = %index.name, "Appointment slot uniqueness index present");
            return Ok(());
        }
    }

    Err(PersistenceError::MissingConstraint(format!(
        "appointments has no unique index on ({})",
        APPOINTMENT_SLOT_COLUMNS.join(", ")
    )))
}

/// Run pending migrations on the provided connection.
///
/// # Arguments
///
/// * `conn` - A mutable reference to a Diesel `SqliteConnection`
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Opens a `SQLite` database at `database_url`, enables foreign keys, and
/// applies pending migrations.
///
/// # Arguments
///
/// * `database_url` - A shared-cache memory URI or a file path
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    // Off by default per connection in SQLite.
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// Dashboards can then read while a lifecycle write is in flight from
/// another process.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
