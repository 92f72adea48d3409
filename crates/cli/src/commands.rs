// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dispatches one parsed command and writes its JSON result.

use color_eyre::Result;
use gearsync::Clock;
use gearsync_api::{
    ApiError, BookAppointmentRequest, CompleteAppointmentRequest, RecordProgressRequest,
    RescheduleAppointmentRequest, ServiceConfig, UpdateAppointmentRequest, book_appointment,
    cancel_appointment, complete_appointment, confirm_appointment, dashboard_counts,
    delete_appointment, employee_dashboard_counts, get_appointment_by_id,
    get_appointment_capabilities, get_my_appointments, parse_shop_datetime, record_progress,
    reschedule_appointment, start_appointment, upcoming_appointments, update_appointment,
};
use gearsync_domain::{AppointmentId, PrincipalId, ServiceId, VehicleId};
use gearsync_persistence::{Persistence, PersistenceError};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::debug;

use crate::cli::{Command, SeedCommand};

const SCHEDULED_FIELD: &str = "scheduledDateTime";

/// Runs `command` against `store` and writes the result to `out`.
///
/// # Errors
///
/// Returns the rejection of the underlying operation, or an I/O error
/// writing the result.
#[allow(clippy::too_many_lines)]
pub fn execute<W: Write>(
    store: &mut Persistence,
    clock: &impl Clock,
    config: &ServiceConfig,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Book {
            email,
            vehicle,
            at,
            services,
            notes,
        } => {
            let result = parse_shop_datetime(SCHEDULED_FIELD, &at).and_then(|scheduled| {
                book_appointment(
                    store,
                    clock,
                    &email,
                    BookAppointmentRequest {
                        vehicle_id: VehicleId::new(vehicle),
                        scheduled_date_time: scheduled,
                        service_ids: services.into_iter().map(ServiceId::new).collect(),
                        customer_notes: notes,
                    },
                )
            });
            respond("book", result, out)
        }
        Command::List { email } => respond("list", get_my_appointments(store, &email), out),
        Command::Show { email, id } => respond(
            "show",
            get_appointment_by_id(store, &email, AppointmentId::new(id)),
            out,
        ),
        Command::Capabilities { email, id } => respond(
            "capabilities",
            get_appointment_capabilities(store, config, &email, AppointmentId::new(id)),
            out,
        ),
        Command::Update {
            email,
            id,
            notes,
            at,
        } => {
            let result = at
                .map(|value| parse_shop_datetime(SCHEDULED_FIELD, &value))
                .transpose()
                .and_then(|scheduled| {
                    update_appointment(
                        store,
                        clock,
                        config,
                        &email,
                        AppointmentId::new(id),
                        UpdateAppointmentRequest {
                            customer_notes: notes,
                            scheduled_date_time: scheduled,
                        },
                    )
                });
            respond("update", result, out)
        }
        Command::Reschedule { email, id, at } => {
            let result = parse_shop_datetime(SCHEDULED_FIELD, &at).and_then(|scheduled| {
                reschedule_appointment(
                    store,
                    clock,
                    config,
                    &email,
                    AppointmentId::new(id),
                    RescheduleAppointmentRequest {
                        scheduled_date_time: scheduled,
                    },
                )
            });
            respond("reschedule", result, out)
        }
        Command::Cancel { email, id } => respond(
            "cancel",
            cancel_appointment(store, clock, config, &email, AppointmentId::new(id)),
            out,
        ),
        Command::Delete { email, id } => {
            let result = delete_appointment(store, &email, AppointmentId::new(id))
                .map(|()| json!({ "deleted": id }));
            respond("delete", result, out)
        }
        Command::Confirm { email, id } => respond(
            "confirm",
            confirm_appointment(store, clock, config, &email, AppointmentId::new(id)),
            out,
        ),
        Command::Start { email, id } => respond(
            "start",
            start_appointment(store, clock, config, &email, AppointmentId::new(id)),
            out,
        ),
        Command::Progress {
            email,
            id,
            percent,
            notes,
        } => respond(
            "progress",
            record_progress(
                store,
                clock,
                config,
                &email,
                AppointmentId::new(id),
                RecordProgressRequest {
                    progress_percentage: percent,
                    employee_notes: notes,
                },
            ),
            out,
        ),
        Command::Complete {
            email,
            id,
            final_cost,
            notes,
        } => respond(
            "complete",
            complete_appointment(
                store,
                clock,
                config,
                &email,
                AppointmentId::new(id),
                CompleteAppointmentRequest {
                    final_cost,
                    employee_notes: notes,
                },
            ),
            out,
        ),
        Command::Dashboard { email } => respond("dashboard", dashboard_counts(store, &email), out),
        Command::Upcoming { email } => respond(
            "upcoming",
            upcoming_appointments(store, clock, &email),
            out,
        ),
        Command::EmployeeDashboard { email } => respond(
            "employee-dashboard",
            employee_dashboard_counts(store, &email),
            out,
        ),
        Command::Seed(seed) => execute_seed(store, seed, out),
    }
}

fn execute_seed<W: Write>(
    store: &mut Persistence,
    command: SeedCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        SeedCommand::Principal { email, role } => {
            seeded("principal", store.create_principal(&email, role.into()), out)
        }
        SeedCommand::Vehicle {
            owner,
            registration,
            make,
            model,
            year,
        } => seeded(
            "vehicle",
            store.create_vehicle(PrincipalId::new(owner), &registration, &make, &model, year),
            out,
        ),
        SeedCommand::Service {
            name,
            category,
            price,
            minutes,
        } => seeded(
            "service",
            store.create_service(&name, category.into(), price, minutes),
            out,
        ),
        SeedCommand::SetActive { id, active } => seeded(
            "set-active",
            store
                .set_service_active(ServiceId::new(id), active)
                .map(|()| json!({ "id": id, "isActive": active })),
            out,
        ),
        SeedCommand::Services => seeded("services", store.list_services(), out),
    }
}

fn respond<T: Serialize, W: Write>(
    operation: &str,
    result: Result<T, ApiError>,
    out: &mut W,
) -> Result<()> {
    match result {
        Ok(value) => emit(&value, out),
        Err(err) => {
            debug!(operation, kind = ?err.kind(), "Request rejected");
            Err(err.into())
        }
    }
}

fn seeded<T: Serialize, W: Write>(
    operation: &str,
    result: Result<T, PersistenceError>,
    out: &mut W,
) -> Result<()> {
    match result {
        Ok(value) => emit(&value, out),
        Err(err) => {
            debug!(operation, error = %err, "Seeding rejected");
            Err(err.into())
        }
    }
}

fn emit<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
