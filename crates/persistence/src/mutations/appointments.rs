// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gearsync_domain::{Appointment, AppointmentId, NewAppointment};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{encode_money, encode_timestamp};
use crate::diesel_schema::{appointment_services, appointments};
use crate::error::PersistenceError;
use crate::queries::appointments::find_appointment;

/// Inserts an appointment and its service links in one transaction.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the customer already holds
/// an appointment at the same time, or another error if the insert fails.
pub fn insert_appointment(
    conn: &mut SqliteConnection,
    appointment: &NewAppointment,
) -> Result<Appointment, PersistenceError> {
    let scheduled_at: String = encode_timestamp(appointment.scheduled_at)?;
    let created_at: String = encode_timestamp(appointment.created_at)?;

    let appointment_id: i64 = conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(appointments::table)
            .values((
                appointments::customer_id.eq(appointment.customer.id.value()),
                appointments::vehicle_id.eq(appointment.vehicle.id.value()),
                appointments::scheduled_at.eq(&scheduled_at),
                appointments::status.eq(appointment.status.as_str()),
                appointments::customer_notes.eq(appointment.customer_notes.as_deref()),
                appointments::progress_percentage.eq(i32::from(appointment.progress_percentage)),
                appointments::created_at.eq(&created_at),
                appointments::updated_at.eq(&created_at),
            ))
            .execute(conn)?;

        let appointment_id: i64 = get_last_insert_rowid(conn)?;

        let links: Vec<_> = appointment
            .services
            .iter()
            .map(|service| {
                (
                    appointment_services::appointment_id.eq(appointment_id),
                    appointment_services::service_id.eq(service.id.value()),
                )
            })
            .collect();

        diesel::insert_into(appointment_services::table)
            .values(&links)
            .execute(conn)?;

        Ok(appointment_id)
    })?;

    info!(
        appointment_id,
        customer_id = appointment.customer.id.value(),
        "Appointment inserted"
    );

    find_appointment(conn, AppointmentId::new(appointment_id))?.ok_or_else(|| {
        PersistenceError::NotFound(format!("Appointment {appointment_id} after insert"))
    })
}

/// Writes every mutable field of an existing appointment.
///
/// The service set is fixed at booking and is not rewritten.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row matched, or
/// `PersistenceError::UniqueViolation` on a schedule collision.
pub fn update_appointment(
    conn: &mut SqliteConnection,
    appointment: &Appointment,
) -> Result<(), PersistenceError> {
    debug!("Updating appointment ID: {}", appointment.id);

    let updated: usize = diesel::update(appointments::table)
        .filter(appointments::appointment_id.eq(appointment.id.value()))
        .set((
            appointments::assigned_employee_id
                .eq(appointment.assigned_employee.as_ref().map(|e| e.id.value())),
            appointments::scheduled_at.eq(encode_timestamp(appointment.scheduled_at)?),
            appointments::status.eq(appointment.status.as_str()),
            appointments::customer_notes.eq(appointment.customer_notes.as_deref()),
            appointments::employee_notes.eq(appointment.employee_notes.as_deref()),
            appointments::progress_percentage.eq(i32::from(appointment.progress_percentage)),
            appointments::final_cost.eq(appointment.final_cost.map(encode_money)),
            appointments::updated_at.eq(encode_timestamp(appointment.updated_at)?),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Appointment {}",
            appointment.id
        )));
    }

    Ok(())
}

/// Deletes an appointment and its service links.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row matched.
pub fn delete_appointment(
    conn: &mut SqliteConnection,
    appointment_id: AppointmentId,
) -> Result<(), PersistenceError> {
    info!("Deleting appointment ID: {}", appointment_id);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::delete(
            appointment_services::table
                .filter(appointment_services::appointment_id.eq(appointment_id.value())),
        )
        .execute(conn)?;

        let deleted: usize = diesel::delete(
            appointments::table.filter(appointments::appointment_id.eq(appointment_id.value())),
        )
        .execute(conn)?;

        if deleted == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Appointment {appointment_id}"
            )));
        }

        Ok(())
    })
}
