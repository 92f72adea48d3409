// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment loading and dashboard aggregates.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gearsync_domain::{
    Appointment, AppointmentId, AppointmentStatus, PrincipalId, ServiceCatalogItem, VehicleId,
};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use time::PrimitiveDateTime;
use tracing::debug;

use crate::data_models::{
    AppointmentRow, ServiceRow, decode_count, decode_money, decode_status, decode_timestamp,
    encode_timestamp,
};
use crate::diesel_schema::{appointment_services, appointments, services};
use crate::error::PersistenceError;
use crate::queries::directory::{find_principal, find_vehicle};

/// Loads the services linked to an appointment, ordered by id.
fn load_appointment_services(
    conn: &mut SqliteConnection,
    appointment_id: i64,
) -> Result<Vec<ServiceCatalogItem>, PersistenceError> {
    appointment_services::table
        .inner_join(services::table)
        .filter(appointment_services::appointment_id.eq(appointment_id))
        .order(services::service_id.asc())
        .select(ServiceRow::as_select())
        .load(conn)?
        .into_iter()
        .map(ServiceRow::into_domain)
        .collect()
}

/// Resolves every reference of an appointment row into a full appointment.
fn hydrate(
    conn: &mut SqliteConnection,
    row: AppointmentRow,
) -> Result<Appointment, PersistenceError> {
    let customer = find_principal(conn, PrincipalId::new(row.customer_id))?.ok_or_else(|| {
        PersistenceError::NotFound(format!(
            "Customer {} of appointment {}",
            row.customer_id, row.appointment_id
        ))
    })?;

    let vehicle = find_vehicle(conn, VehicleId::new(row.vehicle_id))?.ok_or_else(|| {
        PersistenceError::NotFound(format!(
            "Vehicle {} of appointment {}",
            row.vehicle_id, row.appointment_id
        ))
    })?;

    let assigned_employee = match row.assigned_employee_id {
        Some(employee_id) => find_principal(conn, PrincipalId::new(employee_id))?,
        None => None,
    };

    let services: Vec<ServiceCatalogItem> = load_appointment_services(conn, row.appointment_id)?;

    let progress_percentage: u8 = row
        .progress_percentage
        .to_u8()
        .filter(|value| *value <= 100)
        .ok_or(PersistenceError::CorruptValue {
            column: "appointments.progress_percentage",
            value: row.progress_percentage.to_string(),
        })?;

    let final_cost: Option<Decimal> = row
        .final_cost
        .as_deref()
        .map(|value| decode_money("appointments.final_cost", value))
        .transpose()?;

    Ok(Appointment {
        id: AppointmentId::new(row.appointment_id),
        customer,
        vehicle,
        assigned_employee,
        scheduled_at: decode_timestamp("appointments.scheduled_at", &row.scheduled_at)?,
        status: decode_status(&row.status)?,
        customer_notes: row.customer_notes,
        employee_notes: row.employee_notes,
        progress_percentage,
        final_cost,
        services,
        created_at: decode_timestamp("appointments.created_at", &row.created_at)?,
        updated_at: decode_timestamp("appointments.updated_at", &row.updated_at)?,
    })
}

/// Retrieves an appointment by id.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
pub fn find_appointment(
    conn: &mut SqliteConnection,
    appointment_id: AppointmentId,
) -> Result<Option<Appointment>, PersistenceError> {
    debug!("Looking up appointment by ID: {}", appointment_id);

    let row: Option<AppointmentRow> = appointments::table
        .filter(appointments::appointment_id.eq(appointment_id.value()))
        .select(AppointmentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(|row| hydrate(conn, row)).transpose()
}

/// Returns true if the customer holds an appointment at exactly
/// `scheduled_at`, ignoring `excluding`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn customer_has_appointment_at(
    conn: &mut SqliteConnection,
    customer_id: PrincipalId,
    scheduled_at: PrimitiveDateTime,
    excluding: Option<AppointmentId>,
) -> Result<bool, PersistenceError> {
    let encoded: String = encode_timestamp(scheduled_at)?;

    let mut query = appointments::table
        .filter(appointments::customer_id.eq(customer_id.value()))
        .filter(appointments::scheduled_at.eq(encoded))
        .into_boxed();

    if let Some(excluded) = excluding {
        query = query.filter(appointments::appointment_id.ne(excluded.value()));
    }

    let count: i64 = query.count().get_result(conn)?;
    Ok(count > 0)
}

/// Lists all of a customer's appointments, ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
pub fn list_customer_appointments(
    conn: &mut SqliteConnection,
    customer_id: PrincipalId,
) -> Result<Vec<Appointment>, PersistenceError> {
    let rows: Vec<AppointmentRow> = appointments::table
        .filter(appointments::customer_id.eq(customer_id.value()))
        .order(appointments::appointment_id.asc())
        .select(AppointmentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| hydrate(conn, row)).collect()
}

/// Lists a customer's appointments scheduled at or after `from`, earliest
/// first. Ties are broken by id.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value is invalid.
pub fn list_customer_appointments_from(
    conn: &mut SqliteConnection,
    customer_id: PrincipalId,
    from: PrimitiveDateTime,
) -> Result<Vec<Appointment>, PersistenceError> {
    let rows: Vec<AppointmentRow> = appointments::table
        .filter(appointments::customer_id.eq(customer_id.value()))
        .filter(appointments::scheduled_at.ge(encode_timestamp(from)?))
        .order((
            appointments::scheduled_at.asc(),
            appointments::appointment_id.asc(),
        ))
        .select(AppointmentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| hydrate(conn, row)).collect()
}

/// Counts a customer's appointments, optionally restricted to `status`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_customer_appointments(
    conn: &mut SqliteConnection,
    customer_id: PrincipalId,
    status: Option<AppointmentStatus>,
) -> Result<u64, PersistenceError> {
    let mut query = appointments::table
        .filter(appointments::customer_id.eq(customer_id.value()))
        .into_boxed();

    if let Some(status) = status {
        query = query.filter(appointments::status.eq(status.as_str()));
    }

    decode_count(query.count().get_result(conn)?)
}

/// Counts appointments assigned to `employee_id`, optionally restricted to
/// `status`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_employee_appointments(
    conn: &mut SqliteConnection,
    employee_id: PrincipalId,
    status: Option<AppointmentStatus>,
) -> Result<u64, PersistenceError> {
    let mut query = appointments::table
        .filter(appointments::assigned_employee_id.eq(employee_id.value()))
        .into_boxed();

    if let Some(status) = status {
        query = query.filter(appointments::status.eq(status.as_str()));
    }

    decode_count(query.count().get_result(conn)?)
}

/// Sums the final cost of the customer's completed appointments.
///
/// Summation happens over exact decimals, not in SQL. Returns `None` when the
/// customer has no completed appointment.
///
/// # Errors
///
/// Returns an error if the database query fails, a stored cost is invalid,
/// or the total leaves the decimal range.
pub fn sum_completed_final_cost(
    conn: &mut SqliteConnection,
    customer_id: PrincipalId,
) -> Result<Option<Decimal>, PersistenceError> {
    let costs: Vec<Option<String>> = appointments::table
        .filter(appointments::customer_id.eq(customer_id.value()))
        .filter(appointments::status.eq(AppointmentStatus::Completed.as_str()))
        .select(appointments::final_cost)
        .load(conn)?;

    if costs.is_empty() {
        return Ok(None);
    }

    let mut total: Decimal = Decimal::ZERO;
    for cost in costs.iter().flatten() {
        let amount: Decimal = decode_money("appointments.final_cost", cost)?;
        total = total.checked_add(amount).ok_or_else(|| {
            PersistenceError::InvalidInput(format!(
                "Completed final cost total overflows for customer {}",
                customer_id.value()
            ))
        })?;
    }
    Ok(Some(total))
}
