// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seeding of principals, vehicles, and catalog items.
//!
//! Identity and catalog management are owned by other systems; these
//! functions exist so a deployment or a test can populate the directories.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gearsync_domain::{
    Principal, PrincipalId, Role, ServiceCatalogItem, ServiceCategory, ServiceId, Vehicle,
    VehicleId, validate_service_item,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::encode_money;
use crate::diesel_schema::{principals, services, vehicles};
use crate::error::PersistenceError;

/// Creates a principal.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email is taken.
pub fn create_principal(
    conn: &mut SqliteConnection,
    email: &str,
    role: Role,
) -> Result<Principal, PersistenceError> {
    diesel::insert_into(principals::table)
        .values((principals::email.eq(email), principals::role.eq(role.as_str())))
        .execute(conn)?;

    let principal_id: i64 = get_last_insert_rowid(conn)?;
    info!(principal_id, role = role.as_str(), "Principal created");

    Ok(Principal::new(
        PrincipalId::new(principal_id),
        email.to_string(),
        role,
    ))
}

/// Creates a vehicle owned by `owner_id`.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the registration number is
/// taken, or a database error if the owner does not exist.
pub fn create_vehicle(
    conn: &mut SqliteConnection,
    owner_id: PrincipalId,
    registration_number: &str,
    make: &str,
    model: &str,
    year: u16,
) -> Result<Vehicle, PersistenceError> {
    diesel::insert_into(vehicles::table)
        .values((
            vehicles::owner_id.eq(owner_id.value()),
            vehicles::registration_number.eq(registration_number),
            vehicles::make.eq(make),
            vehicles::model.eq(model),
            vehicles::year.eq(i32::from(year)),
        ))
        .execute(conn)?;

    let vehicle_id: i64 = get_last_insert_rowid(conn)?;
    info!(vehicle_id, owner_id = owner_id.value(), "Vehicle created");

    Ok(Vehicle {
        id: VehicleId::new(vehicle_id),
        owner_id,
        registration_number: registration_number.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year,
    })
}

/// Creates an active catalog item.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidInput` if the item fails validation, or
/// `PersistenceError::UniqueViolation` if the name is taken.
pub fn create_service(
    conn: &mut SqliteConnection,
    name: &str,
    category: ServiceCategory,
    base_price: Decimal,
    estimated_duration_minutes: u32,
) -> Result<ServiceCatalogItem, PersistenceError> {
    let mut item = ServiceCatalogItem {
        id: ServiceId::new(0),
        name: name.to_string(),
        category,
        base_price,
        estimated_duration_minutes,
        is_active: true,
    };
    validate_service_item(&item).map_err(|e| PersistenceError::InvalidInput(e.to_string()))?;

    let duration: i32 = i32::try_from(estimated_duration_minutes).map_err(|_| {
        PersistenceError::InvalidInput(format!(
            "Estimated duration out of range: {estimated_duration_minutes}"
        ))
    })?;

    diesel::insert_into(services::table)
        .values((
            services::name.eq(name),
            services::category.eq(category.as_str()),
            services::base_price.eq(encode_money(base_price)),
            services::estimated_duration_minutes.eq(duration),
            services::is_active.eq(1),
        ))
        .execute(conn)?;

    item.id = ServiceId::new(get_last_insert_rowid(conn)?);
    info!(service_id = item.id.value(), name, "Service created");

    Ok(item)
}

/// Activates or retires a catalog item.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item does not exist.
pub fn set_service_active(
    conn: &mut SqliteConnection,
    service_id: ServiceId,
    is_active: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(services::table)
        .filter(services::service_id.eq(service_id.value()))
        .set(services::is_active.eq(i32::from(is_active)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Service {service_id}")));
    }

    info!(service_id = service_id.value(), is_active, "Service activity changed");
    Ok(())
}
