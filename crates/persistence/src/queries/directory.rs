// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Principal, vehicle, and service catalog lookups.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gearsync_domain::{Principal, PrincipalId, ServiceCatalogItem, ServiceId, Vehicle, VehicleId};
use std::collections::BTreeSet;
use tracing::debug;

use crate::data_models::{PrincipalRow, ServiceRow, VehicleRow, decode_count};
use crate::diesel_schema::{principals, services, vehicles};
use crate::error::PersistenceError;

/// Retrieves a principal by email.
///
/// Returns `Ok(None)` if no principal has that email.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_principal_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<Principal>, PersistenceError> {
    debug!("Looking up principal by email: {}", email);

    principals::table
        .filter(principals::email.eq(email))
        .select(PrincipalRow::as_select())
        .first(conn)
        .optional()?
        .map(PrincipalRow::into_domain)
        .transpose()
}

/// Retrieves a principal by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_principal(
    conn: &mut SqliteConnection,
    principal_id: PrincipalId,
) -> Result<Option<Principal>, PersistenceError> {
    principals::table
        .filter(principals::principal_id.eq(principal_id.value()))
        .select(PrincipalRow::as_select())
        .first(conn)
        .optional()?
        .map(PrincipalRow::into_domain)
        .transpose()
}

/// Retrieves a vehicle by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_vehicle(
    conn: &mut SqliteConnection,
    vehicle_id: VehicleId,
) -> Result<Option<Vehicle>, PersistenceError> {
    debug!("Looking up vehicle by ID: {}", vehicle_id);

    vehicles::table
        .filter(vehicles::vehicle_id.eq(vehicle_id.value()))
        .select(VehicleRow::as_select())
        .first(conn)
        .optional()?
        .map(VehicleRow::into_domain)
        .transpose()
}

/// Counts the vehicles owned by `owner_id`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_vehicles_by_owner(
    conn: &mut SqliteConnection,
    owner_id: PrincipalId,
) -> Result<u64, PersistenceError> {
    let count: i64 = vehicles::table
        .filter(vehicles::owner_id.eq(owner_id.value()))
        .count()
        .get_result(conn)?;
    decode_count(count)
}

/// Retrieves the catalog items with the given ids, ordered by id.
///
/// Inactive items are included. Unknown ids are skipped.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_services(
    conn: &mut SqliteConnection,
    service_ids: &BTreeSet<ServiceId>,
) -> Result<Vec<ServiceCatalogItem>, PersistenceError> {
    let raw_ids: Vec<i64> = service_ids.iter().map(|id| id.value()).collect();

    services::table
        .filter(services::service_id.eq_any(raw_ids))
        .order(services::service_id.asc())
        .select(ServiceRow::as_select())
        .load(conn)?
        .into_iter()
        .map(ServiceRow::into_domain)
        .collect()
}

/// Retrieves every catalog item, ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_services(
    conn: &mut SqliteConnection,
) -> Result<Vec<ServiceCatalogItem>, PersistenceError> {
    services::table
        .order(services::service_id.asc())
        .select(ServiceRow::as_select())
        .load(conn)?
        .into_iter()
        .map(ServiceRow::into_domain)
        .collect()
}
