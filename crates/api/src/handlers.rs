// Copyright (C) 2026 The GearSync Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and lifecycle operations.
//!
//! Every guarded operation resolves the caller first, then the appointment,
//! then checks ownership or role, and only then consults the status rules.
//! The first failing check decides the error. Nothing is written before all
//! checks pass.

use gearsync::{
    AppointmentStore, Clock, LifecycleCommand, PrincipalDirectory, ShopStore, TransitionResult,
    apply_lifecycle, assemble_booking,
};
use gearsync_domain::{
    Appointment, AppointmentId, AppointmentStatus, NewAppointment, Principal, ServiceCatalogItem,
    ServiceId, Vehicle, can_book_for, can_mutate, can_service, can_view,
    validate_schedule_in_future, validate_service_selection, validate_services_available,
};
use std::collections::BTreeSet;
use time::PrimitiveDateTime;
use tracing::{debug, info, warn};

use crate::ServiceConfig;
use crate::capabilities::compute_appointment_capabilities;
use crate::error::{
    ApiError, DUPLICATE_SLOT_MESSAGE, translate_core_error, translate_domain_error,
    translate_store_error,
};
use crate::request_response::{
    AppointmentCapabilities, AppointmentSummary, BookAppointmentRequest,
    CompleteAppointmentRequest, RecordProgressRequest, RescheduleAppointmentRequest,
    UpdateAppointmentRequest,
};
use crate::snapshot::summarize_appointment;

// ============================================================================
// Shared resolution steps
// ============================================================================

/// Resolves the caller's principal, or fails with `UserNotFound`.
fn resolve_caller<S: PrincipalDirectory>(
    store: &mut S,
    email: &str,
    label: &str,
) -> Result<Principal, ApiError> {
    store
        .find_principal_by_email(email)
        .map_err(translate_store_error)?
        .ok_or_else(|| ApiError::UserNotFound {
            message: format!("{label} not found with email: {email}"),
        })
}

fn load_appointment<S: AppointmentStore>(
    store: &mut S,
    appointment_id: AppointmentId,
) -> Result<Appointment, ApiError> {
    store
        .find_appointment(appointment_id)
        .map_err(translate_store_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Appointment"),
            message: format!("Appointment with ID {appointment_id} not found"),
        })
}

/// Loads an appointment the caller booked.
fn load_owned_appointment<S: ShopStore>(
    store: &mut S,
    caller_email: &str,
    appointment_id: AppointmentId,
    action: &str,
) -> Result<Appointment, ApiError> {
    let customer: Principal = resolve_caller(store, caller_email, "Customer")?;
    let appointment: Appointment = load_appointment(store, appointment_id)?;

    if !can_mutate(&customer, &appointment) {
        return Err(ApiError::Unauthorized {
            action: action.to_string(),
            message: String::from("You can only modify your own appointments"),
        });
    }

    Ok(appointment)
}

/// Loads an appointment for shop-side work by an employee.
fn load_serviceable_appointment<S: ShopStore>(
    store: &mut S,
    caller_email: &str,
    appointment_id: AppointmentId,
    action: &str,
) -> Result<(Principal, Appointment), ApiError> {
    let employee: Principal = resolve_caller(store, caller_email, "Employee")?;
    let appointment: Appointment = load_appointment(store, appointment_id)?;

    if !can_service(&employee) {
        return Err(ApiError::Unauthorized {
            action: action.to_string(),
            message: String::from("Only employees may service appointments"),
        });
    }

    Ok((employee, appointment))
}

/// Applies `command` and writes the result.
///
/// A changed schedule is checked against the customer's other appointments
/// before anything is written.
fn apply_and_persist<S: ShopStore>(
    store: &mut S,
    appointment: &Appointment,
    command: LifecycleCommand,
    config: &ServiceConfig,
    now: PrimitiveDateTime,
) -> Result<TransitionResult, ApiError> {
    debug!(
        command = command.name(),
        appointment_id = appointment.id.value(),
        status = appointment.status.as_str(),
        "Applying lifecycle command"
    );
    let result: TransitionResult =
        apply_lifecycle(appointment, command, &config.policy, now).map_err(translate_core_error)?;

    if result.schedule_changed {
        let taken: bool = store
            .customer_has_appointment_at(
                appointment.customer.id,
                result.appointment.scheduled_at,
                Some(appointment.id),
            )
            .map_err(translate_store_error)?;
        if taken {
            return Err(ApiError::DuplicateResource {
                message: String::from(DUPLICATE_SLOT_MESSAGE),
            });
        }
    }

    store
        .update_appointment(&result.appointment)
        .map_err(translate_store_error)?;

    Ok(result)
}

// ============================================================================
// Booking
// ============================================================================

/// Books a new appointment for one of the caller's vehicles.
///
/// Checks run in this order, and the first failure is returned:
///
/// 1. the caller resolves (`UserNotFound`)
/// 2. the vehicle exists (`VehicleNotFound`)
/// 3. the caller owns the vehicle (`Unauthorized`)
/// 4. the time is in the future (`InvalidArgument`)
/// 5. at least one service is selected (`InvalidArgument`)
/// 6. every service exists and is active (`InvalidArgument`)
/// 7. the caller has no appointment at that exact time (`DuplicateResource`)
///
/// # Errors
///
/// Returns the error of the first failing check, or `DuplicateResource` if a
/// concurrent booking took the slot between the check and the write.
pub fn book_appointment<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    caller_email: &str,
    request: BookAppointmentRequest,
) -> Result<AppointmentSummary, ApiError> {
    let customer: Principal = resolve_caller(store, caller_email, "Customer")?;

    let vehicle: Vehicle = store
        .find_vehicle(request.vehicle_id)
        .map_err(translate_store_error)?
        .ok_or_else(|| ApiError::VehicleNotFound {
            message: format!("Vehicle not found with ID: {}", request.vehicle_id),
        })?;

    if !can_book_for(&customer, &vehicle) {
        return Err(ApiError::Unauthorized {
            action: String::from("book_appointment"),
            message: String::from("You can only book appointments for your own vehicles"),
        });
    }

    let now: PrimitiveDateTime = clock.now();
    validate_schedule_in_future(request.scheduled_date_time, now)
        .map_err(translate_domain_error)?;

    let requested: BTreeSet<ServiceId> =
        validate_service_selection(&request.service_ids).map_err(translate_domain_error)?;
    let resolved: Vec<ServiceCatalogItem> = store
        .find_services(&requested)
        .map_err(translate_store_error)?;
    let services: Vec<ServiceCatalogItem> =
        validate_services_available(&requested, resolved).map_err(translate_domain_error)?;

    let taken: bool = store
        .customer_has_appointment_at(customer.id, request.scheduled_date_time, None)
        .map_err(translate_store_error)?;
    if taken {
        return Err(ApiError::DuplicateResource {
            message: String::from(DUPLICATE_SLOT_MESSAGE),
        });
    }

    let booking: NewAppointment = assemble_booking(
        customer,
        vehicle,
        request.scheduled_date_time,
        services,
        request.customer_notes,
        now,
    );
    let appointment: Appointment = store
        .insert_appointment(&booking)
        .map_err(translate_store_error)?;

    info!(
        appointment_id = appointment.id.value(),
        customer_id = appointment.customer.id.value(),
        vehicle_id = appointment.vehicle.id.value(),
        scheduled_at = %appointment.scheduled_at,
        "Appointment booked"
    );

    summarize_appointment(&appointment)
}

// ============================================================================
// Customer reads
// ============================================================================

/// Lists every appointment the caller booked, in booking order.
///
/// # Errors
///
/// Returns `UserNotFound` if the caller does not resolve.
pub fn get_my_appointments<S: ShopStore>(
    store: &mut S,
    caller_email: &str,
) -> Result<Vec<AppointmentSummary>, ApiError> {
    let customer: Principal = resolve_caller(store, caller_email, "Customer")?;

    let appointments: Vec<Appointment> = store
        .list_customer_appointments(customer.id)
        .map_err(translate_store_error)?;

    appointments.iter().map(summarize_appointment).collect()
}

/// Retrieves one appointment.
///
/// Customers may read only their own appointments. Employees may read any.
///
/// # Errors
///
/// Returns `UserNotFound`, `ResourceNotFound`, or `Unauthorized`.
pub fn get_appointment_by_id<S: ShopStore>(
    store: &mut S,
    caller_email: &str,
    appointment_id: AppointmentId,
) -> Result<AppointmentSummary, ApiError> {
    let caller: Principal = resolve_caller(store, caller_email, "User")?;
    let appointment: Appointment = load_appointment(store, appointment_id)?;

    if !can_view(&caller, &appointment) {
        return Err(ApiError::Unauthorized {
            action: String::from("get_appointment"),
            message: String::from("You can only view your own appointments"),
        });
    }

    summarize_appointment(&appointment)
}

/// Reports what the caller may do with one appointment.
///
/// # Errors
///
/// Returns `UserNotFound`, `ResourceNotFound`, or `Unauthorized` if the
/// caller may not even view the appointment.
pub fn get_appointment_capabilities<S: ShopStore>(
    store: &mut S,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
) -> Result<AppointmentCapabilities, ApiError> {
    let caller: Principal = resolve_caller(store, caller_email, "User")?;
    let appointment: Appointment = load_appointment(store, appointment_id)?;

    if !can_view(&caller, &appointment) {
        return Err(ApiError::Unauthorized {
            action: String::from("get_appointment_capabilities"),
            message: String::from("You can only view your own appointments"),
        });
    }

    Ok(compute_appointment_capabilities(
        &caller,
        &appointment,
        &config.policy,
    ))
}

// ============================================================================
// Customer lifecycle
// ============================================================================

/// Edits the notes and/or time of one of the caller's appointments.
///
/// # Errors
///
/// Returns `IllegalState` while the appointment is in progress,
/// `InvalidArgument` for a new time that is not in the future, and
/// `DuplicateResource` if the new time collides with another of the caller's
/// appointments.
pub fn update_appointment<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
    request: UpdateAppointmentRequest,
) -> Result<AppointmentSummary, ApiError> {
    let appointment: Appointment =
        load_owned_appointment(store, caller_email, appointment_id, "update_appointment")?;

    let result: TransitionResult = apply_and_persist(
        store,
        &appointment,
        LifecycleCommand::Update {
            customer_notes: request.customer_notes,
            scheduled_at: request.scheduled_date_time,
        },
        config,
        clock.now(),
    )?;

    info!(
        appointment_id = appointment_id.value(),
        schedule_changed = result.schedule_changed,
        "Appointment updated"
    );

    summarize_appointment(&result.appointment)
}

/// Moves a scheduled appointment to a new time, marking it `RESCHEDULED`.
///
/// # Errors
///
/// Returns `IllegalState` unless the appointment is `SCHEDULED`,
/// `InvalidArgument` for a past time, or `DuplicateResource` on collision.
pub fn reschedule_appointment<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
    request: RescheduleAppointmentRequest,
) -> Result<AppointmentSummary, ApiError> {
    let appointment: Appointment =
        load_owned_appointment(store, caller_email, appointment_id, "reschedule_appointment")?;

    let result: TransitionResult = apply_and_persist(
        store,
        &appointment,
        LifecycleCommand::Reschedule {
            scheduled_at: request.scheduled_date_time,
        },
        config,
        clock.now(),
    )?;

    info!(
        appointment_id = appointment_id.value(),
        scheduled_at = %result.appointment.scheduled_at,
        "Appointment rescheduled"
    );

    summarize_appointment(&result.appointment)
}

/// Cancels one of the caller's appointments.
///
/// # Errors
///
/// Returns `IllegalState` if the appointment is already cancelled, or if it
/// is completed and the deployment rejects cancelling completed work.
pub fn cancel_appointment<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
) -> Result<AppointmentSummary, ApiError> {
    let appointment: Appointment =
        load_owned_appointment(store, caller_email, appointment_id, "cancel_appointment")?;

    let result: TransitionResult = apply_and_persist(
        store,
        &appointment,
        LifecycleCommand::Cancel,
        config,
        clock.now(),
    )?;

    if result.previous_status == AppointmentStatus::Completed {
        warn!(
            appointment_id = appointment_id.value(),
            "Completed appointment cancelled"
        );
    } else {
        info!(
            appointment_id = appointment_id.value(),
            previous_status = result.previous_status.as_str(),
            "Appointment cancelled"
        );
    }

    summarize_appointment(&result.appointment)
}

/// Permanently removes one of the caller's appointments.
///
/// The deletion is flushed before returning, so a subsequent lookup by id
/// reports `ResourceNotFound`.
///
/// # Errors
///
/// Returns `IllegalState` unless the status is `SCHEDULED`, `CONFIRMED`, or
/// `RESCHEDULED`.
pub fn delete_appointment<S: ShopStore>(
    store: &mut S,
    caller_email: &str,
    appointment_id: AppointmentId,
) -> Result<(), ApiError> {
    let appointment: Appointment =
        load_owned_appointment(store, caller_email, appointment_id, "delete_appointment")?;

    appointment
        .status
        .validate_deletable()
        .map_err(translate_domain_error)?;

    store
        .delete_appointment(appointment_id)
        .map_err(translate_store_error)?;
    store.flush().map_err(translate_store_error)?;

    info!(appointment_id = appointment_id.value(), "Appointment deleted");
    Ok(())
}

// ============================================================================
// Employee lifecycle
// ============================================================================

/// Confirms a scheduled appointment.
///
/// # Errors
///
/// Returns `Unauthorized` for non-employees and `IllegalState` unless the
/// appointment is `SCHEDULED`.
pub fn confirm_appointment<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
) -> Result<AppointmentSummary, ApiError> {
    let (_, appointment) =
        load_serviceable_appointment(store, caller_email, appointment_id, "confirm_appointment")?;

    let result: TransitionResult = apply_and_persist(
        store,
        &appointment,
        LifecycleCommand::Confirm,
        config,
        clock.now(),
    )?;

    info!(appointment_id = appointment_id.value(), "Appointment confirmed");
    summarize_appointment(&result.appointment)
}

/// Starts work on a confirmed or rescheduled appointment.
///
/// The caller becomes the assigned employee unless one is already assigned.
///
/// # Errors
///
/// Returns `Unauthorized` for non-employees and `IllegalState` unless the
/// appointment is `CONFIRMED` or `RESCHEDULED`.
pub fn start_appointment<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
) -> Result<AppointmentSummary, ApiError> {
    let (employee, appointment) =
        load_serviceable_appointment(store, caller_email, appointment_id, "start_appointment")?;
    let employee_id = employee.id.value();

    let result: TransitionResult = apply_and_persist(
        store,
        &appointment,
        LifecycleCommand::Start { employee },
        config,
        clock.now(),
    )?;

    info!(
        appointment_id = appointment_id.value(),
        employee_id, "Appointment started"
    );
    summarize_appointment(&result.appointment)
}

/// Records progress on an appointment that is in progress.
///
/// # Errors
///
/// Returns `Unauthorized` for non-employees, `IllegalState` unless the
/// appointment is `IN_PROGRESS`, and `InvalidArgument` for a percentage
/// outside `0..=100`.
pub fn record_progress<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
    request: RecordProgressRequest,
) -> Result<AppointmentSummary, ApiError> {
    let (_, appointment) =
        load_serviceable_appointment(store, caller_email, appointment_id, "record_progress")?;

    let result: TransitionResult = apply_and_persist(
        store,
        &appointment,
        LifecycleCommand::RecordProgress {
            progress_percentage: request.progress_percentage,
            employee_notes: request.employee_notes,
        },
        config,
        clock.now(),
    )?;

    info!(
        appointment_id = appointment_id.value(),
        progress_percentage = result.appointment.progress_percentage,
        "Progress recorded"
    );
    summarize_appointment(&result.appointment)
}

/// Completes an appointment that is in progress.
///
/// # Errors
///
/// Returns `Unauthorized` for non-employees, `IllegalState` unless the
/// appointment is `IN_PROGRESS`, and `InvalidArgument` for a negative final
/// cost or a missing one when the deployment requires it.
pub fn complete_appointment<S: ShopStore>(
    store: &mut S,
    clock: &impl Clock,
    config: &ServiceConfig,
    caller_email: &str,
    appointment_id: AppointmentId,
    request: CompleteAppointmentRequest,
) -> Result<AppointmentSummary, ApiError> {
    let (_, appointment) =
        load_serviceable_appointment(store, caller_email, appointment_id, "complete_appointment")?;

    let result: TransitionResult = apply_and_persist(
        store,
        &appointment,
        LifecycleCommand::Complete {
            final_cost: request.final_cost,
            employee_notes: request.employee_notes,
        },
        config,
        clock.now(),
    )?;

    info!(
        appointment_id = appointment_id.value(),
        final_cost = ?result.appointment.final_cost,
        "Appointment completed"
    );
    summarize_appointment(&result.appointment)
}
