// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence for GearSync.
//!
//! [`Persistence`] implements every data-access port the engine consumes:
//! the principal and vehicle directories, the service catalog, and the
//! appointment store. It also exposes seeding operations for the directories
//! that the engine itself never writes.
//!
//! ## Storage
//!
//! - In-memory databases (`new_in_memory`) are used by tests. Each call gets
//!   its own isolated shared-cache database.
//! - File databases (`new_with_file`) run in WAL mode.
//! - Foreign key enforcement is verified at startup.
//! - The `(customer_id, scheduled_at)` uniqueness constraint backs the
//!   duplicate-booking check against concurrent writers.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use gearsync_domain::{
    Principal, PrincipalId, Role, ServiceCatalogItem, ServiceCategory, ServiceId, Vehicle,
};
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite`-backed store for principals, vehicles, services, and
/// appointments.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection =
            backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;
        backend::sqlite::verify_appointment_slot_constraint(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;
        backend::sqlite::verify_appointment_slot_constraint(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Verifies the unique index backing one appointment per customer slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is missing.
    pub fn verify_appointment_slot_constraint(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_appointment_slot_constraint(&mut self.conn)
    }

    // ========================================================================
    // Directory Seeding
    // ========================================================================

    /// Creates a principal with a unique email.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already registered.
    pub fn create_principal(
        &mut self,
        email: &str,
        role: Role,
    ) -> Result<Principal, PersistenceError> {
        mutations::directory::create_principal(&mut self.conn, email, role)
    }

    /// Registers a vehicle to an owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the registration number is taken or the owner
    /// does not exist.
    pub fn create_vehicle(
        &mut self,
        owner_id: PrincipalId,
        registration_number: &str,
        make: &str,
        model: &str,
        year: u16,
    ) -> Result<Vehicle, PersistenceError> {
        mutations::directory::create_vehicle(
            &mut self.conn,
            owner_id,
            registration_number,
            make,
            model,
            year,
        )
    }

    /// Adds an active item to the service catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is invalid or its name is taken.
    pub fn create_service(
        &mut self,
        name: &str,
        category: ServiceCategory,
        base_price: Decimal,
        estimated_duration_minutes: u32,
    ) -> Result<ServiceCatalogItem, PersistenceError> {
        mutations::directory::create_service(
            &mut self.conn,
            name,
            category,
            base_price,
            estimated_duration_minutes,
        )
    }

    /// Activates or retires a catalog item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist.
    pub fn set_service_active(
        &mut self,
        service_id: ServiceId,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        mutations::directory::set_service_active(&mut self.conn, service_id, is_active)
    }

    /// Lists the whole catalog, active and retired, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_services(&mut self) -> Result<Vec<ServiceCatalogItem>, PersistenceError> {
        queries::directory::list_services(&mut self.conn)
    }
}
